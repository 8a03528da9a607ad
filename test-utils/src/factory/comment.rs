//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments.
///
/// Inserts the row directly and does not touch the parent ticket.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: i32,
    usuario_id: i32,
    texto: String,
    fecha_creacion: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, ticket_id: i32, usuario_id: i32) -> Self {
        Self {
            db,
            ticket_id,
            usuario_id,
            texto: format!("Comment {}", next_id()),
            fecha_creacion: Utc::now(),
        }
    }

    pub fn texto(mut self, texto: impl Into<String>) -> Self {
        self.texto = texto.into();
        self
    }

    pub fn fecha_creacion(mut self, fecha_creacion: DateTime<Utc>) -> Self {
        self.fecha_creacion = fecha_creacion;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            ticket_id: ActiveValue::Set(self.ticket_id),
            usuario_id: ActiveValue::Set(self.usuario_id),
            texto: ActiveValue::Set(self.texto),
            fecha_creacion: ActiveValue::Set(self.fecha_creacion),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default text.
pub async fn create_comment(
    db: &DatabaseConnection,
    ticket_id: i32,
    usuario_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, ticket_id, usuario_id).build().await
}
