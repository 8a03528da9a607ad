use sea_orm::DatabaseConnection;

use crate::server::{
    data::statistics::StatsRepository,
    error::AppError,
    model::{
        auth::AuthContext,
        statistics::{TicketSummary, TypeCount},
    },
    policy::{self, Action},
};

/// Technician-only ticket aggregates, computed on every call.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summary(&self, caller: &AuthContext) -> Result<TicketSummary, AppError> {
        policy::require(caller, Action::ViewStatistics, None)?;

        Ok(StatsRepository::new(self.db).summary().await?)
    }

    pub async fn by_type(&self, caller: &AuthContext) -> Result<Vec<TypeCount>, AppError> {
        policy::require(caller, Action::ViewStatistics, None)?;

        Ok(StatsRepository::new(self.db).by_type().await?)
    }
}
