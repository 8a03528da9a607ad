use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::statistics::StatsRepository,
    model::statistics::{TicketSummary, TypeCount},
};

mod by_type;
mod summary;
