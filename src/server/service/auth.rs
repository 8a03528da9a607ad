//! Password login and account registration.
//!
//! Passwords are stored as Argon2id PHC strings. Login never reveals whether the
//! username exists: unknown users, inactive users and wrong passwords share one error.
//! Hashing and verification run on the blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        auth::AuthContext,
        user::{CreateUserParams, RegisterUserParams, User},
    },
    policy::{self, Action},
};

/// Service for credential checks and account creation.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username and password against an active account.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user, inactive account
    ///   or wrong password
    /// - `Err(AppError::InternalErr)` - Stored hash could not be parsed
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let user_id = credentials.user.id;
        let password = password.to_owned();
        let stored = credentials.password_hash;
        let valid =
            tokio::task::spawn_blocking(move || verify_password(user_id, &password, &stored))
                .await
                .map_err(InternalError::from)??;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = credentials.user.id, "User logged in");

        Ok(credentials.user)
    }

    /// Registers a new account on behalf of a technician.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::AuthErr)` - Caller is not a technician
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(
        &self,
        caller: &AuthContext,
        params: RegisterUserParams,
    ) -> Result<User, AppError> {
        policy::require(caller, Action::RegisterUser, None)?;

        let user = self.create_account(params).await?;

        tracing::info!(
            user_id = user.id,
            registered_by = caller.user_id,
            "Registered account '{}' as {}",
            user.username,
            user.rol
        );

        Ok(user)
    }

    /// Hashes the password and inserts the account without a policy check.
    ///
    /// Used by `register` and by startup seeding.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn create_account(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let RegisterUserParams {
            username,
            password,
            nombre,
            rol,
            email,
        } = params;

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(InternalError::from)??;

        UserRepository::new(self.db)
            .create(CreateUserParams {
                username,
                password_hash,
                nombre,
                rol,
                email,
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, "Username already exists"))
    }

    pub async fn technician_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).technician_exists().await?)
    }
}

/// Hashes a password into an Argon2id PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Password matches or not
/// - `Err(InternalError::MalformedPasswordHash)` - Stored hash is not a PHC string
pub fn verify_password(user_id: i32, password: &str, stored: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(stored).map_err(|e| InternalError::MalformedPasswordHash {
        user_id,
        reason: e.to_string(),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
