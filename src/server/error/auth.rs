use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists or has been deactivated.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database or inactive")]
    UserNotInDatabase(i32),

    /// Unknown username, inactive account or wrong password.
    ///
    /// The three cases share one message so a caller cannot tell which usernames exist.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Access policy denied the action.
    ///
    /// Results in a 403 Forbidden response. The message is logged, never returned.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the denied action
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, unknown users and bad credentials
/// - 403 Forbidden - For policy denials
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
