//! Comment data repository for database operations.
//!
//! Comments are append-only. Creation and the parent ticket's update timestamp are
//! written in one transaction so a comment never exists without its ticket.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::comment::{Comment, CommentWithAuthor, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a ticket and bumps the ticket's `fecha_actualizacion`.
    ///
    /// The parent row is updated before the insert, so the write lock is held and the
    /// ticket is known to exist when the comment lands.
    ///
    /// # Arguments
    /// - `params` - Validated comment with its ticket and author
    /// - `now` - Comment creation time, also written to the ticket
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment created
    /// - `Ok(None)` - Ticket does not exist; nothing was written
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create(
        &self,
        params: CreateCommentParams,
        now: DateTime<Utc>,
    ) -> Result<Option<Comment>, DbErr> {
        let txn = self.db.begin().await?;

        let touched = entity::prelude::Ticket::update_many()
            .filter(entity::ticket::Column::Id.eq(params.ticket_id))
            .col_expr(
                entity::ticket::Column::FechaActualizacion,
                Expr::value(now),
            )
            .exec(&txn)
            .await?;

        if touched.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let entity = entity::comment::ActiveModel {
            ticket_id: ActiveValue::Set(params.ticket_id),
            usuario_id: ActiveValue::Set(params.usuario_id),
            texto: ActiveValue::Set(params.texto),
            fecha_creacion: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(Comment::from_entity(entity)))
    }

    /// Lists a ticket's comments oldest first with each author's display name.
    ///
    /// # Returns
    /// - `Ok(Vec<CommentWithAuthor>)` - Comments ordered by creation time then id;
    ///   empty for a ticket without comments or an unknown ticket
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_ticket_id(&self, ticket_id: i32) -> Result<Vec<CommentWithAuthor>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::TicketId.eq(ticket_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::FechaCreacion)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| CommentWithAuthor {
                comment: Comment::from_entity(comment),
                autor_nombre: author.map(|a| a.nombre).unwrap_or_default(),
            })
            .collect())
    }
}
