//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::comment::CommentDto, server::error::AppError};

/// Append-only note attached to one ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub ticket_id: i32,
    /// Author.
    pub usuario_id: i32,
    pub texto: String,
    pub fecha_creacion: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            usuario_id: entity.usuario_id,
            texto: entity.texto,
            fecha_creacion: entity.fecha_creacion,
        }
    }
}

/// Comment enriched with its author's display name for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub autor_nombre: String,
}

impl CommentWithAuthor {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            ticket_id: self.comment.ticket_id,
            usuario_id: self.comment.usuario_id,
            autor_nombre: self.autor_nombre,
            texto: self.comment.texto,
            fecha_creacion: self.comment.fecha_creacion,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub ticket_id: i32,
    pub usuario_id: i32,
    pub texto: String,
}

impl CreateCommentParams {
    /// # Returns
    /// - `Err(AppError::Validation)` - Comment text is empty or whitespace
    pub fn new(ticket_id: i32, usuario_id: i32, texto: String) -> Result<Self, AppError> {
        if texto.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment text is required".to_string(),
            ));
        }

        Ok(Self {
            ticket_id,
            usuario_id,
            texto,
        })
    }
}
