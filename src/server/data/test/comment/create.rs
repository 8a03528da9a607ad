use super::*;

/// Tests adding a comment bumps the parent ticket's update time.
///
/// Expected: Ok(Some(Comment)) and ticket fecha_actualizacion equal to the comment time
#[tokio::test]
async fn creates_comment_and_touches_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let created_at = Utc.with_ymd_and_hms(2025, 11, 1, 8, 0, 0).unwrap();
    let ticket = factory::ticket::TicketFactory::new(db, owner.id)
        .fecha_creacion(created_at)
        .build()
        .await?;

    let now = created_at + Duration::hours(1);
    let comment = CommentRepository::new(db)
        .create(
            CreateCommentParams {
                ticket_id: ticket.id,
                usuario_id: owner.id,
                texto: "Still broken".to_string(),
            },
            now,
        )
        .await?
        .unwrap();

    assert_eq!(comment.ticket_id, ticket.id);
    assert_eq!(comment.usuario_id, owner.id);
    assert_eq!(comment.texto, "Still broken");
    assert_eq!(comment.fecha_creacion, now);

    let stored = entity::prelude::Ticket::find_by_id(ticket.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.fecha_actualizacion, now);
    assert_eq!(stored.fecha_creacion, created_at);

    Ok(())
}

/// Tests commenting on a missing ticket writes nothing.
///
/// Expected: Ok(None) and no comment rows
#[tokio::test]
async fn returns_none_for_missing_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let result = CommentRepository::new(db)
        .create(
            CreateCommentParams {
                ticket_id: 77,
                usuario_id: author.id,
                texto: "Hello?".to_string(),
            },
            Utc::now(),
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}
