//! Read-only ticket aggregates.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::{
    model::ticket::TicketStatus,
    server::model::statistics::{TicketSummary, TypeCount},
};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts tickets per status with a single grouped query.
    ///
    /// # Returns
    /// - `Ok(TicketSummary)` - Per-status counts and their total
    /// - `Err(DbErr::Custom)` - A stored estado is not a known status
    /// - `Err(DbErr)` - Database error during query
    pub async fn summary(&self) -> Result<TicketSummary, DbErr> {
        let rows = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::Estado)
            .column_as(entity::ticket::Column::Id.count(), "total")
            .group_by(entity::ticket::Column::Estado)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        rows.into_iter()
            .try_fold(TicketSummary::default(), |mut summary, (estado, count)| {
                let status = estado
                    .parse::<TicketStatus>()
                    .map_err(|e| DbErr::Custom(format!("Ticket summary: {}", e)))?;
                let count = count.max(0) as u64;

                match status {
                    TicketStatus::Pending => summary.pending_count += count,
                    TicketStatus::InProgress => summary.in_progress_count += count,
                    TicketStatus::Resolved => summary.resolved_count += count,
                }
                summary.total += count;

                Ok(summary)
            })
    }

    /// Counts tickets per tipo, most frequent first and ties by tipo ascending.
    pub async fn by_type(&self) -> Result<Vec<TypeCount>, DbErr> {
        let rows = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::Tipo)
            .column_as(entity::ticket::Column::Id.count(), "total")
            .group_by(entity::ticket::Column::Tipo)
            .order_by_desc(entity::ticket::Column::Id.count())
            .order_by_asc(entity::ticket::Column::Tipo)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(tipo, count)| TypeCount {
                tipo,
                count: count.max(0) as u64,
            })
            .collect())
    }
}
