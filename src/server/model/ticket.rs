//! Ticket domain models and parameters.
//!
//! Provides the ticket domain model, the validated parameter types built from request
//! DTOs, the list filter, and `TicketMutation`, the single shape every ticket write
//! (update or assignment) is reduced to before it reaches the repository.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        ticket::{
            CreateTicketDto, TicketDetailDto, TicketDto, TicketListItemDto, TicketListQuery,
            TicketPriority, TicketStatus, UpdateTicketDto,
        },
        user::Role,
    },
    server::{
        error::AppError,
        model::{auth::AuthContext, comment::CommentWithAuthor, user::User},
    },
};

/// Reported issue tracked through the pending → in-progress → resolved lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    /// Free-form category, e.g. "hardware".
    pub tipo: String,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    /// Owner; fixed at creation.
    pub usuario_id: i32,
    pub estado: TicketStatus,
    pub prioridad: TicketPriority,
    /// Assigned technician.
    pub asignado_a: Option<i32>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
    /// Set whenever the ticket moves into `Resolved`; never cleared.
    pub fecha_resolucion: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            tipo: self.tipo,
            titulo: self.titulo,
            descripcion: self.descripcion,
            ubicacion: self.ubicacion,
            usuario_id: self.usuario_id,
            estado: self.estado,
            prioridad: self.prioridad,
            asignado_a: self.asignado_a,
            fecha_creacion: self.fecha_creacion,
            fecha_actualizacion: self.fecha_actualizacion,
            fecha_resolucion: self.fecha_resolucion,
        }
    }

    /// Converts an entity model to a ticket domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The converted ticket
    /// - `Err(DbErr::Custom)` - Stored estado or prioridad is not a known value
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        let estado = entity
            .estado
            .parse::<TicketStatus>()
            .map_err(|e| DbErr::Custom(format!("Ticket {}: {}", entity.id, e)))?;
        let prioridad = entity
            .prioridad
            .parse::<TicketPriority>()
            .map_err(|e| DbErr::Custom(format!("Ticket {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            tipo: entity.tipo,
            titulo: entity.titulo,
            descripcion: entity.descripcion,
            ubicacion: entity.ubicacion,
            usuario_id: entity.usuario_id,
            estado,
            prioridad,
            asignado_a: entity.asignado_a,
            fecha_creacion: entity.fecha_creacion,
            fecha_actualizacion: entity.fecha_actualizacion,
            fecha_resolucion: entity.fecha_resolucion,
        })
    }
}

/// Validated ticket creation request.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub usuario_id: i32,
    pub tipo: String,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
}

impl CreateTicketParams {
    /// Builds creation params owned by `usuario_id`.
    ///
    /// # Returns
    /// - `Ok(CreateTicketParams)` - All four text fields are non-empty
    /// - `Err(AppError::Validation)` - At least one field is empty or whitespace
    pub fn from_dto(usuario_id: i32, dto: CreateTicketDto) -> Result<Self, AppError> {
        let missing: Vec<&str> = [
            ("tipo", &dto.tipo),
            ("titulo", &dto.titulo),
            ("descripcion", &dto.descripcion),
            ("ubicacion", &dto.ubicacion),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            usuario_id,
            tipo: dto.tipo,
            titulo: dto.titulo,
            descripcion: dto.descripcion,
            ubicacion: dto.ubicacion,
        })
    }
}

/// Partial ticket update with a closed set of mutable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTicketParams {
    pub estado: Option<TicketStatus>,
    pub prioridad: Option<TicketPriority>,
    /// `Some(None)` unassigns, `None` leaves the assignee unchanged.
    pub asignado_a: Option<Option<i32>>,
}

impl UpdateTicketParams {
    /// Parses an update DTO, treating empty strings as not supplied.
    ///
    /// # Returns
    /// - `Ok(UpdateTicketParams)` - Every supplied enum value is valid
    /// - `Err(AppError::Validation)` - estado or prioridad is not a known value
    pub fn from_dto(dto: UpdateTicketDto) -> Result<Self, AppError> {
        let estado = non_empty(dto.estado)
            .map(|value| value.parse::<TicketStatus>())
            .transpose()
            .map_err(AppError::Validation)?;
        let prioridad = non_empty(dto.prioridad)
            .map(|value| value.parse::<TicketPriority>())
            .transpose()
            .map_err(AppError::Validation)?;

        Ok(Self {
            estado,
            prioridad,
            asignado_a: dto.asignado_a,
        })
    }
}

/// Fully resolved write applied to one ticket row in a single statement.
///
/// Produced by the lifecycle engine for both updates and assignments; `None`
/// fields are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketMutation {
    pub estado: Option<TicketStatus>,
    pub prioridad: Option<TicketPriority>,
    pub asignado_a: Option<Option<i32>>,
    pub fecha_resolucion: Option<DateTime<Utc>>,
    pub fecha_actualizacion: DateTime<Utc>,
}

/// Conjunction of equality filters for listing tickets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub estado: Option<String>,
    pub prioridad: Option<String>,
    pub asignado_a: Option<i32>,
    pub usuario_id: Option<i32>,
    /// Implicit owner restriction for plain users, applied on top of `usuario_id`.
    pub owner_scope: Option<i32>,
}

impl TicketFilter {
    /// Parses list query parameters.
    ///
    /// estado and prioridad are free-form: an unknown value simply matches nothing.
    ///
    /// # Returns
    /// - `Ok(TicketFilter)` - Parsed filter without caller scope
    /// - `Err(AppError::Validation)` - asignado_a or usuario_id is not an integer
    pub fn from_query(query: TicketListQuery) -> Result<Self, AppError> {
        Ok(Self {
            estado: non_empty(query.estado),
            prioridad: non_empty(query.prioridad),
            asignado_a: parse_id_filter("asignado_a", query.asignado_a)?,
            usuario_id: parse_id_filter("usuario_id", query.usuario_id)?,
            owner_scope: None,
        })
    }

    /// Restricts plain users to their own tickets regardless of explicit filters.
    pub fn scoped_to(mut self, caller: &AuthContext) -> Self {
        self.owner_scope = match caller.role {
            Role::User => Some(caller.user_id),
            Role::Technician => None,
        };
        self
    }
}

/// Ticket row as shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketListItem {
    pub ticket: Ticket,
    pub usuario_nombre: Option<String>,
    pub tecnico_nombre: Option<String>,
    pub total_comentarios: u64,
}

impl TicketListItem {
    pub fn into_dto(self) -> TicketListItemDto {
        TicketListItemDto {
            ticket: self.ticket.into_dto(),
            usuario_nombre: self.usuario_nombre,
            tecnico_nombre: self.tecnico_nombre,
            total_comentarios: self.total_comentarios,
        }
    }
}

/// Single ticket with owner, assignee and its comment thread.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub owner: Option<User>,
    pub assignee: Option<User>,
    pub comments: Vec<CommentWithAuthor>,
}

impl TicketDetail {
    pub fn into_dto(self) -> TicketDetailDto {
        let (usuario_nombre, usuario_email) = split_contact(self.owner);
        let (tecnico_nombre, tecnico_email) = split_contact(self.assignee);

        TicketDetailDto {
            ticket: self.ticket.into_dto(),
            usuario_nombre,
            usuario_email,
            tecnico_nombre,
            tecnico_email,
            comentarios: self.comments.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

fn split_contact(user: Option<User>) -> (Option<String>, Option<String>) {
    match user {
        Some(user) => (Some(user.nombre), user.email),
        None => (None, None),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_id_filter(name: &str, value: Option<String>) -> Result<Option<i32>, AppError> {
    non_empty(value)
        .map(|v| {
            v.trim()
                .parse::<i32>()
                .map_err(|_| AppError::Validation(format!("Invalid {} filter '{}'", name, v)))
        })
        .transpose()
}
