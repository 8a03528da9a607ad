//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for account records. It handles account
//! creation, lookups by id and username, and technician checks, converting entity
//! models into domain models at the infrastructure boundary. Password hashes only
//! leave this module through `UserCredentials`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    model::user::Role,
    server::model::user::{CreateUserParams, User, UserCredentials},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active account.
    ///
    /// # Arguments
    /// - `params` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            nombre: ActiveValue::Set(params.nombre),
            rol: ActiveValue::Set(params.rol.to_string()),
            email: ActiveValue::Set(params.email),
            activo: ActiveValue::Set(true),
            fecha_creacion: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds an account by id, active or not.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error or corrupt stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds an active account and its password hash by username, for login.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - Active account found
    /// - `Ok(None)` - Unknown username or inactive account
    /// - `Err(DbErr)` - Database error or corrupt stored role
    pub async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::Activo.eq(true))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let password_hash = entity.password_hash.clone();

        Ok(Some(UserCredentials {
            user: User::from_entity(entity)?,
            password_hash,
        }))
    }

    /// Checks whether at least one active technician exists.
    ///
    /// Used at startup to decide whether the configured technician account is seeded.
    pub async fn technician_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Rol.eq(Role::Technician.as_str()))
            .filter(entity::user::Column::Activo.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
