use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{comment::CommentRepository, ticket::TicketRepository, user::UserRepository},
        error::AppError,
        model::{
            auth::AuthContext,
            ticket::{
                CreateTicketParams, Ticket, TicketDetail, TicketFilter, TicketListItem,
                UpdateTicketParams,
            },
        },
        policy::{self, Action},
        service::lifecycle,
    },
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new pending ticket owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Created ticket
    /// - `Err(AppError::Validation)` - Required field empty (checked when building params)
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        caller: &AuthContext,
        params: CreateTicketParams,
    ) -> Result<Ticket, AppError> {
        policy::require(caller, Action::CreateTicket, None)?;

        let ticket = TicketRepository::new(self.db)
            .create(params, Utc::now())
            .await?;

        tracing::debug!(ticket_id = ticket.id, owner = ticket.usuario_id, "Ticket created");

        Ok(ticket)
    }

    /// Gets one ticket with owner, assignee and comments.
    ///
    /// Existence is checked before ownership, so a missing ticket answers 404 for
    /// every caller and an existing ticket owned by someone else answers 403.
    ///
    /// # Returns
    /// - `Ok(TicketDetail)` - Ticket visible to the caller
    /// - `Err(AppError::NotFound)` - No ticket with that id
    /// - `Err(AppError::AuthErr)` - Plain user reading another user's ticket
    pub async fn get_detail(&self, caller: &AuthContext, id: i32) -> Result<TicketDetail, AppError> {
        let ticket = self.get_visible(caller, id).await?;

        let user_repo = UserRepository::new(self.db);
        let owner = user_repo.find_by_id(ticket.usuario_id).await?;
        let assignee = match ticket.asignado_a {
            Some(tecnico_id) => user_repo.find_by_id(tecnico_id).await?,
            None => None,
        };

        let comments = CommentRepository::new(self.db)
            .get_by_ticket_id(ticket.id)
            .await?;

        Ok(TicketDetail {
            ticket,
            owner,
            assignee,
            comments,
        })
    }

    /// Loads a ticket and checks the caller may read it.
    pub async fn get_visible(&self, caller: &AuthContext, id: i32) -> Result<Ticket, AppError> {
        let ticket = TicketRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| ticket_not_found(id))?;

        policy::require(caller, Action::ReadTicket, Some(ticket.usuario_id))?;

        Ok(ticket)
    }

    /// Lists tickets, restricting plain users to their own.
    pub async fn list(
        &self,
        caller: &AuthContext,
        filter: TicketFilter,
    ) -> Result<Vec<TicketListItem>, AppError> {
        policy::require(caller, Action::ListTickets, None)?;

        let items = TicketRepository::new(self.db)
            .list(filter.scoped_to(caller))
            .await?;

        Ok(items)
    }

    /// Applies a partial update through the lifecycle engine.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Ticket after the update
    /// - `Err(AppError::AuthErr)` - Caller is not a technician
    /// - `Err(AppError::NotFound)` - Ticket or requested assignee does not exist
    /// - `Err(AppError::Validation)` - Requested assignee is not an active technician
    pub async fn update(
        &self,
        caller: &AuthContext,
        id: i32,
        params: UpdateTicketParams,
    ) -> Result<Ticket, AppError> {
        policy::require(caller, Action::UpdateTicket, None)?;

        if let Some(Some(tecnico_id)) = params.asignado_a {
            self.ensure_technician(tecnico_id).await?;
        }

        let mutation = lifecycle::plan_update(&params, Utc::now());

        let ticket = TicketRepository::new(self.db)
            .apply(id, mutation)
            .await?
            .ok_or_else(|| ticket_not_found(id))?;

        tracing::debug!(ticket_id = id, estado = %ticket.estado, "Ticket updated");

        Ok(ticket)
    }

    /// Assigns a technician, defaulting to the caller, and moves the ticket to in-progress.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Ticket after the assignment
    /// - `Err(AppError::AuthErr)` - Caller is not a technician
    /// - `Err(AppError::NotFound)` - Ticket or technician does not exist
    /// - `Err(AppError::Validation)` - Target user is not an active technician
    pub async fn assign(
        &self,
        caller: &AuthContext,
        id: i32,
        tecnico_id: Option<i32>,
    ) -> Result<Ticket, AppError> {
        policy::require(caller, Action::AssignTicket, None)?;

        let tecnico_id = tecnico_id.unwrap_or(caller.user_id);
        if tecnico_id != caller.user_id {
            self.ensure_technician(tecnico_id).await?;
        }

        let mutation = lifecycle::plan_assignment(tecnico_id, Utc::now());

        let ticket = TicketRepository::new(self.db)
            .apply(id, mutation)
            .await?
            .ok_or_else(|| ticket_not_found(id))?;

        tracing::debug!(ticket_id = id, tecnico_id, "Ticket assigned");

        Ok(ticket)
    }

    /// Deletes a ticket and its comments.
    pub async fn delete(&self, caller: &AuthContext, id: i32) -> Result<(), AppError> {
        policy::require(caller, Action::DeleteTicket, None)?;

        if !TicketRepository::new(self.db).delete(id).await? {
            return Err(ticket_not_found(id));
        }

        tracing::debug!(ticket_id = id, "Ticket deleted");

        Ok(())
    }

    async fn ensure_technician(&self, user_id: i32) -> Result<(), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if user.rol != Role::Technician {
            return Err(AppError::Validation(format!(
                "User {} is not a technician",
                user_id
            )));
        }

        if !user.activo {
            return Err(AppError::Validation(format!(
                "Technician {} is inactive",
                user_id
            )));
        }

        Ok(())
    }
}

fn ticket_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Ticket {} not found", id))
}
