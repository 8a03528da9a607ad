use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string_len(Ticket::Tipo, 50))
                    .col(string_len(Ticket::Titulo, 200))
                    .col(text(Ticket::Descripcion))
                    .col(string_len(Ticket::Ubicacion, 100))
                    .col(integer(Ticket::UsuarioId))
                    .col(string_len(Ticket::Estado, 20).default("pending"))
                    .col(string_len(Ticket::Prioridad, 20).default("medium"))
                    .col(integer_null(Ticket::AsignadoA))
                    .col(
                        timestamp(Ticket::FechaCreacion)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Ticket::FechaActualizacion)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Ticket::FechaResolucion))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_usuario_id")
                            .from(Ticket::Table, Ticket::UsuarioId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_asignado_a")
                            .from(Ticket::Table, Ticket::AsignadoA)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_usuario_id")
                    .table(Ticket::Table)
                    .col(Ticket::UsuarioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_estado")
                    .table(Ticket::Table)
                    .col(Ticket::Estado)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    #[sea_orm(iden = "tickets")]
    Table,
    Id,
    Tipo,
    Titulo,
    Descripcion,
    Ubicacion,
    UsuarioId,
    Estado,
    Prioridad,
    AsignadoA,
    FechaCreacion,
    FechaActualizacion,
    FechaResolucion,
}
