use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    state::AppState,
};


/// Status code a failed handler call would answer with.
fn error_status<T>(result: Result<T, AppError>) -> Option<StatusCode> {
    result.err().map(|e| e.into_response().status())
}
