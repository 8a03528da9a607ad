//! Resolved caller identity.

use crate::model::user::Role;

/// Authenticated caller identity handed to every core operation.
///
/// Built by `AuthGuard` from the session; the ticket core never resolves
/// credentials itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl AuthContext {
    pub fn is_technician(&self) -> bool {
        self.role == Role::Technician
    }
}
