use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        ticket::{CreateTicketDto, TicketPriority, TicketStatus},
        user::Role,
    },
    server::{
        error::{auth::AuthError, AppError},
        model::{
            auth::AuthContext,
            ticket::{CreateTicketParams, TicketFilter, UpdateTicketParams},
        },
    },
};

mod comment;

/// Builds the caller identity for a factory-created user.
fn caller_for(user: &entity::user::Model) -> AuthContext {
    AuthContext {
        user_id: user.id,
        username: user.username.clone(),
        role: user.rol.parse::<Role>().unwrap(),
    }
}

fn create_params(owner_id: i32, titulo: &str) -> CreateTicketParams {
    CreateTicketParams::from_dto(
        owner_id,
        CreateTicketDto {
            tipo: "hardware".to_string(),
            titulo: titulo.to_string(),
            descripcion: "Does not turn on".to_string(),
            ubicacion: "Room 101".to_string(),
        },
    )
    .unwrap()
}

fn is_forbidden<T>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _))))
}

fn is_not_found<T>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::NotFound(_)))
}
