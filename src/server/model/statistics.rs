//! Ticket statistics models.

use crate::model::statistics::{TicketSummaryDto, TypeCountDto};

/// Ticket counts partitioned by status; the three counts sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketSummary {
    pub total: u64,
    pub pending_count: u64,
    pub in_progress_count: u64,
    pub resolved_count: u64,
}

impl TicketSummary {
    pub fn into_dto(self) -> TicketSummaryDto {
        TicketSummaryDto {
            total: self.total,
            pending_count: self.pending_count,
            in_progress_count: self.in_progress_count,
            resolved_count: self.resolved_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub tipo: String,
    pub count: u64,
}

impl TypeCount {
    pub fn into_dto(self) -> TypeCountDto {
        TypeCountDto {
            tipo: self.tipo,
            count: self.count,
        }
    }
}
