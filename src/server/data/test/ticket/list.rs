use super::*;

/// Tests newest-first ordering with id as tiebreaker.
///
/// Expected: tickets ordered by fecha_creacion descending, equal times by id descending
#[tokio::test]
async fn orders_newest_first_with_id_tiebreak() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let base = fixed_now();

    let oldest = factory::ticket::TicketFactory::new(db, owner.id)
        .fecha_creacion(base - Duration::hours(2))
        .build()
        .await?;
    let tied_first = factory::ticket::TicketFactory::new(db, owner.id)
        .fecha_creacion(base)
        .build()
        .await?;
    let tied_second = factory::ticket::TicketFactory::new(db, owner.id)
        .fecha_creacion(base)
        .build()
        .await?;

    let items = TicketRepository::new(db)
        .list(TicketFilter::default())
        .await?;
    let ids: Vec<i32> = items.iter().map(|i| i.ticket.id).collect();

    assert_eq!(ids, vec![tied_second.id, tied_first.id, oldest.id]);

    Ok(())
}

/// Tests that filters combine as a conjunction.
///
/// Expected: only tickets matching estado AND prioridad are returned
#[tokio::test]
async fn applies_filters_as_conjunction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let matching = factory::ticket::TicketFactory::new(db, owner.id)
        .estado("pending")
        .prioridad("high")
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, owner.id)
        .estado("pending")
        .prioridad("low")
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, owner.id)
        .estado("resolved")
        .prioridad("high")
        .build()
        .await?;

    let items = TicketRepository::new(db)
        .list(TicketFilter {
            estado: Some("pending".to_string()),
            prioridad: Some("high".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ticket.id, matching.id);

    Ok(())
}

/// Tests that the owner scope narrows on top of an explicit owner filter.
///
/// Expected: empty list when the explicit usuario_id names another user
#[tokio::test]
async fn owner_scope_overrides_explicit_owner_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, alice_ticket) = factory::helpers::create_ticket_with_owner(db).await?;
    let (bob, _) = factory::helpers::create_ticket_with_owner(db).await?;

    let repo = TicketRepository::new(db);

    let foreign = repo
        .list(TicketFilter {
            usuario_id: Some(bob.id),
            owner_scope: Some(alice.id),
            ..Default::default()
        })
        .await?;
    assert!(foreign.is_empty());

    let own = repo
        .list(TicketFilter {
            owner_scope: Some(alice.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].ticket.id, alice_ticket.id);

    Ok(())
}

/// Tests that listed tickets carry owner name, assignee name and comment count.
///
/// Expected: names resolved and comments counted per ticket
#[tokio::test]
async fn includes_names_and_comment_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .nombre("Ana Owner")
        .build()
        .await?;
    let tech = factory::user::UserFactory::new(db)
        .nombre("Tom Tech")
        .rol("technician")
        .build()
        .await?;

    let assigned = factory::ticket::TicketFactory::new(db, owner.id)
        .asignado_a(Some(tech.id))
        .fecha_creacion(fixed_now())
        .build()
        .await?;
    let unassigned = factory::ticket::TicketFactory::new(db, owner.id)
        .fecha_creacion(fixed_now() - Duration::minutes(5))
        .build()
        .await?;

    factory::create_comment(db, assigned.id, owner.id).await?;
    factory::create_comment(db, assigned.id, tech.id).await?;

    let items = TicketRepository::new(db)
        .list(TicketFilter::default())
        .await?;

    assert_eq!(items.len(), 2);

    assert_eq!(items[0].ticket.id, assigned.id);
    assert_eq!(items[0].usuario_nombre.as_deref(), Some("Ana Owner"));
    assert_eq!(items[0].tecnico_nombre.as_deref(), Some("Tom Tech"));
    assert_eq!(items[0].total_comentarios, 2);

    assert_eq!(items[1].ticket.id, unassigned.id);
    assert_eq!(items[1].tecnico_nombre, None);
    assert_eq!(items[1].total_comentarios, 0);

    Ok(())
}

/// Tests that an unmatched filter value yields an empty list.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn unknown_filter_value_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_ticket_with_owner(db).await?;

    let items = TicketRepository::new(db)
        .list(TicketFilter {
            estado: Some("archived".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(items.is_empty());

    Ok(())
}
