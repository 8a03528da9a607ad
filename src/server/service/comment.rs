use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, user::UserRepository},
    error::AppError,
    model::{
        auth::AuthContext,
        comment::{CommentWithAuthor, CreateCommentParams},
    },
    policy::{self, Action},
    service::ticket::TicketService,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment authored by the caller.
    ///
    /// Any authenticated caller may comment on any ticket; ticket ownership is not checked.
    ///
    /// # Returns
    /// - `Ok(CommentWithAuthor)` - Created comment with the caller's display name
    /// - `Err(AppError::NotFound)` - Ticket does not exist
    pub async fn add(
        &self,
        caller: &AuthContext,
        ticket_id: i32,
        texto: String,
    ) -> Result<CommentWithAuthor, AppError> {
        policy::require(caller, Action::AddComment, None)?;

        let params = CreateCommentParams::new(ticket_id, caller.user_id, texto)?;

        let comment = CommentRepository::new(self.db)
            .create(params, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", ticket_id)))?;

        let autor_nombre = UserRepository::new(self.db)
            .find_by_id(caller.user_id)
            .await?
            .map(|user| user.nombre)
            .unwrap_or_else(|| caller.username.clone());

        Ok(CommentWithAuthor {
            comment,
            autor_nombre,
        })
    }

    /// Lists a ticket's comments, oldest first, for callers allowed to read the ticket.
    pub async fn list_for_ticket(
        &self,
        caller: &AuthContext,
        ticket_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, AppError> {
        let ticket = TicketService::new(self.db)
            .get_visible(caller, ticket_id)
            .await?;

        let comments = CommentRepository::new(self.db)
            .get_by_ticket_id(ticket.id)
            .await?;

        Ok(comments)
    }
}
