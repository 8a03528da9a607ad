use super::*;

fn mutation_at(now: DateTime<Utc>) -> TicketMutation {
    TicketMutation {
        estado: None,
        prioridad: None,
        asignado_a: None,
        fecha_resolucion: None,
        fecha_actualizacion: now,
    }
}

/// Tests that only supplied fields are written.
///
/// Expected: prioridad changed, estado and assignee untouched, update time bumped
#[tokio::test]
async fn writes_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let tech = factory::create_technician(db).await?;
    let ticket = factory::ticket::TicketFactory::new(db, owner.id)
        .estado("in-progress")
        .asignado_a(Some(tech.id))
        .fecha_creacion(fixed_now() - Duration::days(1))
        .build()
        .await?;

    let now = fixed_now();
    let updated = TicketRepository::new(db)
        .apply(
            ticket.id,
            TicketMutation {
                prioridad: Some(TicketPriority::High),
                ..mutation_at(now)
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.prioridad, TicketPriority::High);
    assert_eq!(updated.estado, TicketStatus::InProgress);
    assert_eq!(updated.asignado_a, Some(tech.id));
    assert_eq!(updated.usuario_id, owner.id);
    assert_eq!(updated.fecha_creacion, ticket.fecha_creacion);
    assert_eq!(updated.fecha_actualizacion, now);

    Ok(())
}

/// Tests unassigning with an explicit null and stamping the resolution time.
///
/// Expected: asignado_a cleared, estado resolved, fecha_resolucion set
#[tokio::test]
async fn unassigns_and_resolves() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let tech = factory::create_technician(db).await?;
    let ticket = factory::ticket::TicketFactory::new(db, owner.id)
        .asignado_a(Some(tech.id))
        .build()
        .await?;

    let now = fixed_now();
    let updated = TicketRepository::new(db)
        .apply(
            ticket.id,
            TicketMutation {
                estado: Some(TicketStatus::Resolved),
                asignado_a: Some(None),
                fecha_resolucion: Some(now),
                ..mutation_at(now)
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.estado, TicketStatus::Resolved);
    assert_eq!(updated.asignado_a, None);
    assert_eq!(updated.fecha_resolucion, Some(now));

    Ok(())
}

/// Tests that an existing resolution time survives a mutation without one.
///
/// Expected: fecha_resolucion unchanged after reopening
#[tokio::test]
async fn keeps_resolution_time_when_not_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let resolved_at = fixed_now() - Duration::hours(3);
    let ticket = factory::ticket::TicketFactory::new(db, owner.id)
        .estado("resolved")
        .fecha_resolucion(Some(resolved_at))
        .build()
        .await?;

    let updated = TicketRepository::new(db)
        .apply(
            ticket.id,
            TicketMutation {
                estado: Some(TicketStatus::Pending),
                ..mutation_at(fixed_now())
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.estado, TicketStatus::Pending);
    assert_eq!(updated.fecha_resolucion, Some(resolved_at));

    Ok(())
}

/// Tests mutating a ticket that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db)
        .apply(999, mutation_at(fixed_now()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
