use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List a ticket's comments, oldest first.
///
/// # Access Control
/// - `Technician` - Any ticket
/// - `User` - Own tickets only, same as reading the ticket
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Ticket ID
///
/// # Returns
/// - `200 OK` - Comments with author names
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Ticket belongs to another user
/// - `404 Not Found` - No ticket with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Comments oldest first", body = Vec<CommentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Ticket belongs to another user", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let comments = CommentService::new(&state.db)
        .list_for_ticket(&caller, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<CommentDto>>(),
        ),
    ))
}

/// Add a comment to a ticket.
///
/// # Access Control
/// - `User` / `Technician` - Any authenticated caller, on any ticket
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Ticket ID
/// - `payload` - Comment text
///
/// # Returns
/// - `201 Created` - Comment created
/// - `400 Bad Request` - Comment text is empty
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No ticket with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Comment text is empty", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let comment = CommentService::new(&state.db)
        .add(&caller, id, payload.texto)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
