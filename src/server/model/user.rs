//! User domain models and parameters.
//!
//! Accounts belong to the identity layer; the ticket core only reads them to
//! resolve callers, validate assignees and display names.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{RegisterUserDto, Role, UserDto},
    server::error::AppError,
};

/// Account without its credential.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Display name.
    pub nombre: String,
    pub rol: Role,
    pub email: Option<String>,
    /// Inactive accounts can neither log in nor keep an existing session.
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            nombre: self.nombre,
            rol: self.rol,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let rol = entity
            .rol
            .parse::<Role>()
            .map_err(|e| DbErr::Custom(format!("User {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            nombre: entity.nombre,
            rol,
            email: entity.email,
            activo: entity.activo,
            fecha_creacion: entity.fecha_creacion,
        })
    }
}

/// Account together with its stored Argon2 PHC string, used only by login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Validated account registration request with a plaintext password.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub password: String,
    pub nombre: String,
    pub rol: Role,
    pub email: Option<String>,
}

impl RegisterUserParams {
    /// Validates a registration DTO.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - All required fields present and role known
    /// - `Err(AppError::Validation)` - Missing field or unknown role
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        if dto.username.trim().is_empty()
            || dto.password.is_empty()
            || dto.nombre.trim().is_empty()
            || dto.rol.trim().is_empty()
        {
            return Err(AppError::Validation("Incomplete data".to_string()));
        }

        let rol = dto.rol.parse::<Role>().map_err(AppError::Validation)?;

        Ok(Self {
            username: dto.username,
            password: dto.password,
            nombre: dto.nombre,
            rol,
            email: dto.email.filter(|email| !email.trim().is_empty()),
        })
    }
}

/// Row to insert for a new account; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub nombre: String,
    pub rol: Role,
    pub email: Option<String>,
}
