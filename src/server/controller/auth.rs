use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParams,
        policy::{self, Action},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// On success the user's id is stored in the session cookie.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session that receives the user id
/// - `payload` - Username and password
///
/// # Returns
/// - `200 OK` - Logged in user
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and destroy the session.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `session` - Session to flush
///
/// # Returns
/// - `200 OK` - Session cleared
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            mensaje: "Logged out".to_string(),
        }),
    ))
}

/// Get the currently logged in user.
///
/// # Access Control
/// - `User` / `Technician` - Any authenticated caller
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;

    let user = UserRepository::new(&state.db)
        .find_by_id(caller.user_id)
        .await?
        .ok_or(AuthError::UserNotInDatabase(caller.user_id))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register a new account.
///
/// The caller is authorized before the body is validated.
///
/// # Access Control
/// - `Technician` - Only technicians can register accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Account data (username, password, nombre, rol, email)
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field or unknown role
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a technician
/// - `409 Conflict` - Username already exists
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Missing field or unknown role", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a technician", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).authenticate().await?;
    policy::require(&caller, Action::RegisterUser, None)?;

    let params = RegisterUserParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).register(&caller, params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
