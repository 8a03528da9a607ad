use super::*;

/// Tests creating a ticket with lifecycle defaults.
///
/// Verifies a new ticket starts pending with medium priority, no assignee, no
/// resolution time, and equal creation and update times.
///
/// Expected: Ok(Ticket) with defaults applied
#[tokio::test]
async fn creates_pending_ticket_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let now = fixed_now();

    let ticket = TicketRepository::new(db)
        .create(
            CreateTicketParams {
                usuario_id: owner.id,
                tipo: "hardware".to_string(),
                titulo: "Printer down".to_string(),
                descripcion: "Paper jam".to_string(),
                ubicacion: "Floor 2".to_string(),
            },
            now,
        )
        .await?;

    assert!(ticket.id > 0);
    assert_eq!(ticket.usuario_id, owner.id);
    assert_eq!(ticket.titulo, "Printer down");
    assert_eq!(ticket.estado, TicketStatus::Pending);
    assert_eq!(ticket.prioridad, TicketPriority::Medium);
    assert_eq!(ticket.asignado_a, None);
    assert_eq!(ticket.fecha_resolucion, None);
    assert_eq!(ticket.fecha_creacion, now);
    assert_eq!(ticket.fecha_actualizacion, now);

    Ok(())
}

/// Tests reading back a created ticket by id.
///
/// Expected: Ok(Some(Ticket)) equal to the created ticket, Ok(None) for unknown ids
#[tokio::test]
async fn get_by_id_returns_created_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = factory::helpers::create_ticket_with_owner(db).await?;

    let repo = TicketRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert_eq!(found.map(|t| t.titulo), Some(created.titulo));
    assert!(repo.get_by_id(created.id + 100).await?.is_none());

    Ok(())
}

/// Tests that a corrupt stored estado surfaces as a custom database error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn get_by_id_rejects_unknown_stored_estado() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let ticket = factory::ticket::create_ticket_with_estado(db, owner.id, "archived").await?;

    let result = TicketRepository::new(db).get_by_id(ticket.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
