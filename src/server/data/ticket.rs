//! Ticket data repository for database operations.
//!
//! This module provides the `TicketRepository` for creating, reading, listing, mutating
//! and deleting tickets. Every write that spans more than one statement runs inside a
//! single transaction, and stored enum strings are parsed into domain types at this
//! boundary.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::ticket::{TicketPriority, TicketStatus},
    server::model::ticket::{
        CreateTicketParams, Ticket, TicketFilter, TicketListItem, TicketMutation,
    },
};

/// Repository providing database operations for tickets.
pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    /// Creates a new TicketRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TicketRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new ticket in the pending state with medium priority.
    ///
    /// # Arguments
    /// - `params` - Validated creation parameters including the owner
    /// - `now` - Creation time, also used as the first update time
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateTicketParams,
        now: DateTime<Utc>,
    ) -> Result<Ticket, DbErr> {
        let entity = entity::ticket::ActiveModel {
            tipo: ActiveValue::Set(params.tipo),
            titulo: ActiveValue::Set(params.titulo),
            descripcion: ActiveValue::Set(params.descripcion),
            ubicacion: ActiveValue::Set(params.ubicacion),
            usuario_id: ActiveValue::Set(params.usuario_id),
            estado: ActiveValue::Set(TicketStatus::Pending.to_string()),
            prioridad: ActiveValue::Set(TicketPriority::Medium.to_string()),
            asignado_a: ActiveValue::Set(None),
            fecha_creacion: ActiveValue::Set(now),
            fecha_actualizacion: ActiveValue::Set(now),
            fecha_resolucion: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    /// Gets a ticket by id.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - Ticket found
    /// - `Ok(None)` - No ticket with that id
    /// - `Err(DbErr)` - Database error or corrupt stored enum value
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ticket>, DbErr> {
        entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Lists tickets matching every supplied filter, newest first.
    ///
    /// Owner and assignee names are resolved with one batched user query and comment
    /// counts with one grouped query, instead of per-row lookups.
    ///
    /// # Arguments
    /// - `filter` - Conjunction of equality filters plus the optional owner scope
    ///
    /// # Returns
    /// - `Ok(Vec<TicketListItem>)` - Matching tickets ordered by creation time then id,
    ///   both descending; empty when nothing matches
    /// - `Err(DbErr)` - Database error or corrupt stored enum value
    pub async fn list(&self, filter: TicketFilter) -> Result<Vec<TicketListItem>, DbErr> {
        let mut query = entity::prelude::Ticket::find();

        if let Some(estado) = filter.estado {
            query = query.filter(entity::ticket::Column::Estado.eq(estado));
        }
        if let Some(prioridad) = filter.prioridad {
            query = query.filter(entity::ticket::Column::Prioridad.eq(prioridad));
        }
        if let Some(asignado_a) = filter.asignado_a {
            query = query.filter(entity::ticket::Column::AsignadoA.eq(asignado_a));
        }
        if let Some(usuario_id) = filter.usuario_id {
            query = query.filter(entity::ticket::Column::UsuarioId.eq(usuario_id));
        }
        if let Some(owner) = filter.owner_scope {
            query = query.filter(entity::ticket::Column::UsuarioId.eq(owner));
        }

        let entities = query
            .order_by_desc(entity::ticket::Column::FechaCreacion)
            .order_by_desc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ticket_ids: Vec<i32> = entities.iter().map(|t| t.id).collect();
        let user_ids: HashSet<i32> = entities
            .iter()
            .flat_map(|t| std::iter::once(t.usuario_id).chain(t.asignado_a))
            .collect();

        let names: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.nombre))
            .collect();

        let comment_counts: HashMap<i32, i64> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::TicketId)
            .column_as(entity::comment::Column::Id.count(), "total")
            .filter(entity::comment::Column::TicketId.is_in(ticket_ids))
            .group_by(entity::comment::Column::TicketId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        entities
            .into_iter()
            .map(|entity| {
                let usuario_nombre = names.get(&entity.usuario_id).cloned();
                let tecnico_nombre = entity.asignado_a.and_then(|id| names.get(&id).cloned());
                let total_comentarios =
                    comment_counts.get(&entity.id).copied().unwrap_or(0).max(0) as u64;

                Ok(TicketListItem {
                    ticket: Ticket::from_entity(entity)?,
                    usuario_nombre,
                    tecnico_nombre,
                    total_comentarios,
                })
            })
            .collect()
    }

    /// Applies a lifecycle mutation to one ticket and returns the stored result.
    ///
    /// The conditional update and the re-read share one transaction, so the returned
    /// ticket is exactly the row this mutation produced.
    ///
    /// # Arguments
    /// - `id` - Ticket to mutate
    /// - `mutation` - Fields to write; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - Ticket after the mutation
    /// - `Ok(None)` - No ticket with that id; nothing was written
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn apply(&self, id: i32, mutation: TicketMutation) -> Result<Option<Ticket>, DbErr> {
        let txn = self.db.begin().await?;

        let mut update = entity::prelude::Ticket::update_many()
            .filter(entity::ticket::Column::Id.eq(id))
            .col_expr(
                entity::ticket::Column::FechaActualizacion,
                Expr::value(mutation.fecha_actualizacion),
            );

        if let Some(estado) = mutation.estado {
            update = update.col_expr(
                entity::ticket::Column::Estado,
                Expr::value(estado.to_string()),
            );
        }
        if let Some(prioridad) = mutation.prioridad {
            update = update.col_expr(
                entity::ticket::Column::Prioridad,
                Expr::value(prioridad.to_string()),
            );
        }
        if let Some(asignado_a) = mutation.asignado_a {
            update = update.col_expr(entity::ticket::Column::AsignadoA, Expr::value(asignado_a));
        }
        if let Some(fecha_resolucion) = mutation.fecha_resolucion {
            update = update.col_expr(
                entity::ticket::Column::FechaResolucion,
                Expr::value(fecha_resolucion),
            );
        }

        let result = update.exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let entity = entity::prelude::Ticket::find_by_id(id).one(&txn).await?;
        txn.commit().await?;

        entity.map(Ticket::from_entity).transpose()
    }

    /// Deletes a ticket together with its comments.
    ///
    /// # Returns
    /// - `Ok(true)` - Ticket and its comments removed
    /// - `Ok(false)` - No ticket with that id
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::TicketId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Ticket::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }
}
