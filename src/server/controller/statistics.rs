use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        statistics::{TicketSummaryDto, TypeCountDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::statistics::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

/// Ticket counts per status.
///
/// # Access Control
/// - `Technician` - Only technicians can view statistics
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - Total plus pending, in-progress and resolved counts
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a technician
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Ticket counts per status", body = TicketSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a technician", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let summary = StatsService::new(&state.db).summary(&caller).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Ticket counts per tipo, most frequent first.
///
/// # Access Control
/// - `Technician` - Only technicians can view statistics
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - Counts per tipo, ties ordered by tipo
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a technician
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/statistics/types",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Ticket counts per tipo", body = Vec<TypeCountDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a technician", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_by_type(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let counts = StatsService::new(&state.db).by_type(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(
            counts
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<TypeCountDto>>(),
        ),
    ))
}
