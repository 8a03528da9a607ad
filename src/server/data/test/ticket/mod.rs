use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::ticket::{TicketPriority, TicketStatus},
    server::{
        data::ticket::TicketRepository,
        model::ticket::{CreateTicketParams, TicketFilter, TicketMutation},
    },
};

mod apply;
mod create;
mod delete;
mod list;

/// Fixed whole-second timestamp so stored values compare exactly.
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).unwrap()
}
