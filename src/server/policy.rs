//! Access policy for every ticket, comment, account and statistics operation.
//!
//! `authorize` is a pure decision over the caller's role and, for per-ticket reads,
//! the ticket owner. Services call `require` before touching the store so denials
//! surface uniformly as `AuthError::AccessDenied` (403).

use crate::{
    model::user::Role,
    server::{error::auth::AuthError, model::auth::AuthContext},
};

/// Operation a caller attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListTickets,
    ReadTicket,
    CreateTicket,
    UpdateTicket,
    AssignTicket,
    DeleteTicket,
    AddComment,
    RegisterUser,
    ViewStatistics,
}

impl Action {
    fn describe(&self) -> &'static str {
        match self {
            Self::ListTickets => "list tickets",
            Self::ReadTicket => "read ticket",
            Self::CreateTicket => "create ticket",
            Self::UpdateTicket => "update ticket",
            Self::AssignTicket => "assign ticket",
            Self::DeleteTicket => "delete ticket",
            Self::AddComment => "add comment",
            Self::RegisterUser => "register user",
            Self::ViewStatistics => "view statistics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Decides whether `caller` may perform `action`.
///
/// # Arguments
/// - `caller` - Authenticated identity
/// - `action` - Attempted operation
/// - `ticket_owner` - Owner of the target ticket, only consulted for `ReadTicket`
///
/// # Returns
/// - `Decision::Allow` - Technicians for everything; users for listing, creating,
///   commenting and reading their own tickets
/// - `Decision::Deny` - Everything else
pub fn authorize(caller: &AuthContext, action: Action, ticket_owner: Option<i32>) -> Decision {
    let allowed = match (caller.role, action) {
        (Role::Technician, _) => true,
        (Role::User, Action::ListTickets | Action::CreateTicket | Action::AddComment) => true,
        (Role::User, Action::ReadTicket) => ticket_owner == Some(caller.user_id),
        (
            Role::User,
            Action::UpdateTicket
            | Action::AssignTicket
            | Action::DeleteTicket
            | Action::RegisterUser
            | Action::ViewStatistics,
        ) => false,
    };

    if allowed {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// Runs `authorize` and converts a denial into `AuthError::AccessDenied`.
///
/// # Returns
/// - `Ok(())` - Action allowed
/// - `Err(AuthError::AccessDenied)` - Action denied; logged at debug level
pub fn require(
    caller: &AuthContext,
    action: Action,
    ticket_owner: Option<i32>,
) -> Result<(), AuthError> {
    match authorize(caller, action, ticket_owner) {
        Decision::Allow => Ok(()),
        Decision::Deny => {
            tracing::debug!(
                user_id = caller.user_id,
                role = %caller.role,
                "Denied {}",
                action.describe()
            );

            Err(AuthError::AccessDenied(
                caller.user_id,
                format!("not permitted to {}", action.describe()),
            ))
        }
    }
}
