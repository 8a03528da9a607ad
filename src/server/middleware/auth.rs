use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::auth::AuthContext,
};

/// Resolves the request's session into an authenticated caller.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session's user and builds the caller identity.
    ///
    /// Accounts are re-read on every request so a deactivated account or a role
    /// change takes effect immediately.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Active user found
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - User deleted or deactivated
    pub async fn authenticate(&self) -> Result<AuthContext, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .filter(|user| user.activo)
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(AuthContext {
            user_id: user.id,
            username: user.username,
            role: user.rol,
        })
    }
}
