use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketSummaryDto {
    pub total: u64,
    pub pending_count: u64,
    pub in_progress_count: u64,
    pub resolved_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TypeCountDto {
    pub tipo: String,
    pub count: u64,
}
