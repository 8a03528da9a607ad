use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::CreateUserParams},
};

mod create;
mod find_credentials_by_username;
mod technician_exists;

fn params(username: &str, rol: Role) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        nombre: format!("{} name", username),
        rol,
        email: Some(format!("{}@example.com", username)),
    }
}
