use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        ticket::{
            AssignTicketDto, CreateTicketDto, TicketDetailDto, TicketDto, TicketListItemDto,
            TicketListQuery, UpdateTicketDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::ticket::{CreateTicketParams, TicketFilter, UpdateTicketParams},
        policy::{self, Action},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// List tickets.
///
/// Returns tickets newest first, narrowed by the optional query filters. Each entry
/// carries the owner and assignee names and its comment count.
///
/// # Access Control
/// - `Technician` - Sees every ticket
/// - `User` - Sees only their own tickets, whatever filters they send
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `query` - Optional estado, prioridad, asignado_a and usuario_id filters
///
/// # Returns
/// - `200 OK` - Tickets newest first, possibly empty
/// - `400 Bad Request` - Non-numeric id filter
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    params(TicketListQuery),
    responses(
        (status = 200, description = "Matching tickets", body = Vec<TicketListItemDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TicketListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let filter = TicketFilter::from_query(query)?;

    let tickets = TicketService::new(&state.db).list(&caller, filter).await?;

    Ok((
        StatusCode::OK,
        Json(
            tickets
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<TicketListItemDto>>(),
        ),
    ))
}

/// Open a new ticket owned by the caller.
///
/// # Access Control
/// - `User` / `Technician` - Any authenticated caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Ticket data (tipo, titulo, descripcion, ubicacion)
///
/// # Returns
/// - `201 Created` - Ticket created in the pending state with medium priority
/// - `400 Bad Request` - A required field is missing or empty
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let params = CreateTicketParams::from_dto(caller.user_id, payload)?;

    let ticket = TicketService::new(&state.db).create(&caller, params).await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}

/// Get one ticket with its owner, assignee and comments.
///
/// # Access Control
/// - `Technician` - Any ticket
/// - `User` - Own tickets only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Ticket ID
///
/// # Returns
/// - `200 OK` - Ticket with contact data and comments oldest first
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Ticket belongs to another user
/// - `404 Not Found` - No ticket with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket with comments", body = TicketDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Ticket belongs to another user", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let detail = TicketService::new(&state.db).get_detail(&caller, id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update estado, prioridad and/or the assignee.
///
/// Only supplied fields change. Sending `"asignado_a": null` unassigns the ticket.
/// The caller is authorized before the body is validated.
///
/// # Access Control
/// - `Technician` - Only technicians can update tickets
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Ticket ID
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Ticket after the update
/// - `400 Bad Request` - Unknown estado/prioridad or assignee is not an active technician
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a technician
/// - `404 Not Found` - Ticket or assignee not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Updated ticket", body = TicketDto),
        (status = 400, description = "Unknown estado/prioridad or assignee is not a technician", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a technician", body = ErrorDto),
        (status = 404, description = "Ticket or assignee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;
    policy::require(&caller, Action::UpdateTicket, None)?;

    let params = UpdateTicketParams::from_dto(payload)?;

    let ticket = TicketService::new(&state.db)
        .update(&caller, id, params)
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// Assign a technician and move the ticket to in-progress.
///
/// Without a body, or without `tecnico_id`, the caller assigns themselves.
///
/// # Access Control
/// - `Technician` - Only technicians can assign tickets
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Ticket ID
/// - `payload` - Optional technician to assign
///
/// # Returns
/// - `200 OK` - Ticket after the assignment
/// - `400 Bad Request` - Target user is not an active technician
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a technician
/// - `404 Not Found` - Ticket or technician not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/assign",
    tag = TICKET_TAG,
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    request_body(content = AssignTicketDto, description = "Optional technician to assign; the body may be omitted"),
    responses(
        (status = 200, description = "Assigned ticket", body = TicketDto),
        (status = 400, description = "Target user is not a technician", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a technician", body = ErrorDto),
        (status = 404, description = "Ticket or technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Option<Json<AssignTicketDto>>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let tecnico_id = payload.and_then(|Json(dto)| dto.tecnico_id);

    let ticket = TicketService::new(&state.db)
        .assign(&caller, id, tecnico_id)
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// Delete a ticket and its comments.
///
/// # Access Control
/// - `Technician` - Only technicians can delete tickets
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Ticket ID
///
/// # Returns
/// - `200 OK` - Ticket deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a technician
/// - `404 Not Found` - No ticket with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a technician", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    TicketService::new(&state.db).delete(&caller, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            mensaje: format!("Ticket {} deleted", id),
        }),
    ))
}
