use super::*;

/// Tests comments are listed oldest first with author names.
///
/// Expected: comments of the requested ticket only, ascending by creation time
#[tokio::test]
async fn lists_oldest_first_with_author_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .nombre("Ana")
        .build()
        .await?;
    let tech = factory::user::UserFactory::new(db)
        .nombre("Tom")
        .rol("technician")
        .build()
        .await?;
    let ticket = factory::create_ticket(db, owner.id).await?;
    let other = factory::create_ticket(db, owner.id).await?;

    let base = Utc.with_ymd_and_hms(2025, 11, 1, 8, 0, 0).unwrap();
    let later = factory::comment::CommentFactory::new(db, ticket.id, tech.id)
        .texto("On my way")
        .fecha_creacion(base + Duration::minutes(10))
        .build()
        .await?;
    let earlier = factory::comment::CommentFactory::new(db, ticket.id, owner.id)
        .texto("Printer smokes")
        .fecha_creacion(base)
        .build()
        .await?;
    factory::create_comment(db, other.id, owner.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_ticket_id(ticket.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment.id, earlier.id);
    assert_eq!(comments[0].autor_nombre, "Ana");
    assert_eq!(comments[1].comment.id, later.id);
    assert_eq!(comments[1].autor_nombre, "Tom");

    Ok(())
}

/// Tests listing comments of a ticket without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_ticket_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, ticket) = factory::helpers::create_ticket_with_owner(db).await?;

    let comments = CommentRepository::new(db)
        .get_by_ticket_id(ticket.id)
        .await?;

    assert!(comments.is_empty());

    Ok(())
}
