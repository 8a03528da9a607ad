use super::*;

/// Tests deleting a ticket removes its comments too.
///
/// Expected: Ok(true), ticket and comments gone
#[tokio::test]
async fn deletes_ticket_and_comments() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, ticket) = factory::helpers::create_ticket_with_owner(db).await?;
    let (_, other) = factory::helpers::create_ticket_with_owner(db).await?;
    factory::create_comment(db, ticket.id, owner.id).await?;
    factory::create_comment(db, other.id, owner.id).await?;

    let repo = TicketRepository::new(db);

    assert!(repo.delete(ticket.id).await?);
    assert!(repo.get_by_id(ticket.id).await?.is_none());
    assert!(repo.get_by_id(other.id).await?.is_some());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an unknown ticket.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TicketRepository::new(db).delete(42).await?);

    Ok(())
}
