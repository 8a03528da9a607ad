use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251101_000001_create_user_table::User, m20251101_000002_create_ticket_table::Ticket};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::TicketId))
                    .col(integer(Comment::UsuarioId))
                    .col(text(Comment::Texto))
                    .col(
                        timestamp(Comment::FechaCreacion)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_ticket_id")
                            .from(Comment::Table, Comment::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_usuario_id")
                            .from(Comment::Table, Comment::UsuarioId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_ticket_id")
                    .table(Comment::Table)
                    .col(Comment::TicketId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    #[sea_orm(iden = "comentarios")]
    Table,
    Id,
    TicketId,
    UsuarioId,
    Texto,
    FechaCreacion,
}
