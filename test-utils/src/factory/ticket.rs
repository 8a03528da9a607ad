//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
///
/// The owner must already exist; every other field has a default.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    usuario_id: i32,
    tipo: String,
    titulo: String,
    descripcion: String,
    ubicacion: String,
    estado: String,
    prioridad: String,
    asignado_a: Option<i32>,
    fecha_creacion: DateTime<Utc>,
    fecha_resolucion: Option<DateTime<Utc>>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - tipo: `"hardware"`
    /// - titulo: `"Ticket {id}"`
    /// - estado: `"pending"`, prioridad: `"medium"`
    /// - asignado_a / fecha_resolucion: `None`
    /// - fecha_creacion: now
    pub fn new(db: &'a DatabaseConnection, usuario_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            usuario_id,
            tipo: "hardware".to_string(),
            titulo: format!("Ticket {}", id),
            descripcion: format!("Description for ticket {}", id),
            ubicacion: "Floor 1".to_string(),
            estado: "pending".to_string(),
            prioridad: "medium".to_string(),
            asignado_a: None,
            fecha_creacion: Utc::now(),
            fecha_resolucion: None,
        }
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = tipo.into();
        self
    }

    pub fn titulo(mut self, titulo: impl Into<String>) -> Self {
        self.titulo = titulo.into();
        self
    }

    /// Sets the stored status string, written as-is.
    pub fn estado(mut self, estado: impl Into<String>) -> Self {
        self.estado = estado.into();
        self
    }

    pub fn prioridad(mut self, prioridad: impl Into<String>) -> Self {
        self.prioridad = prioridad.into();
        self
    }

    pub fn asignado_a(mut self, asignado_a: Option<i32>) -> Self {
        self.asignado_a = asignado_a;
        self
    }

    /// Overrides the creation time, used by ordering tests.
    ///
    /// `fecha_actualizacion` is set to the same value.
    pub fn fecha_creacion(mut self, fecha_creacion: DateTime<Utc>) -> Self {
        self.fecha_creacion = fecha_creacion;
        self
    }

    pub fn fecha_resolucion(mut self, fecha_resolucion: Option<DateTime<Utc>>) -> Self {
        self.fecha_resolucion = fecha_resolucion;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ticket::Model)` - Created ticket entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            tipo: ActiveValue::Set(self.tipo),
            titulo: ActiveValue::Set(self.titulo),
            descripcion: ActiveValue::Set(self.descripcion),
            ubicacion: ActiveValue::Set(self.ubicacion),
            usuario_id: ActiveValue::Set(self.usuario_id),
            estado: ActiveValue::Set(self.estado),
            prioridad: ActiveValue::Set(self.prioridad),
            asignado_a: ActiveValue::Set(self.asignado_a),
            fecha_creacion: ActiveValue::Set(self.fecha_creacion),
            fecha_actualizacion: ActiveValue::Set(self.fecha_creacion),
            fecha_resolucion: ActiveValue::Set(self.fecha_resolucion),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending ticket owned by `usuario_id` with default values.
pub async fn create_ticket(
    db: &DatabaseConnection,
    usuario_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, usuario_id).build().await
}

/// Creates a ticket owned by `usuario_id` with the given stored status.
pub async fn create_ticket_with_estado(
    db: &DatabaseConnection,
    usuario_id: i32,
    estado: &str,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, usuario_id).estado(estado).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_ticket_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = create_user(db).await?;
        let ticket = create_ticket(db, owner.id).await?;

        assert_eq!(ticket.usuario_id, owner.id);
        assert_eq!(ticket.estado, "pending");
        assert_eq!(ticket.prioridad, "medium");
        assert!(ticket.asignado_a.is_none());
        assert_eq!(ticket.fecha_creacion, ticket.fecha_actualizacion);

        Ok(())
    }
}
