use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::server::service::{comment::CommentService, ticket::TicketService};

/// Tests any user commenting on another user's ticket.
///
/// Expected: comment created with the caller as author and display name
#[tokio::test]
async fn any_user_may_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, ticket) = factory::helpers::create_ticket_with_owner(db).await?;
    let stranger = factory::user::UserFactory::new(db)
        .nombre("Sam")
        .build()
        .await?;

    let comment = CommentService::new(db)
        .add(&caller_for(&stranger), ticket.id, "Same issue here".to_string())
        .await?;

    assert_eq!(comment.comment.ticket_id, ticket.id);
    assert_eq!(comment.comment.usuario_id, stranger.id);
    assert_eq!(comment.autor_nombre, "Sam");

    Ok(())
}

/// Tests rejecting empty comment text.
///
/// Expected: Validation error and no comment stored
#[tokio::test]
async fn rejects_empty_text() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, ticket) = factory::helpers::create_ticket_with_owner(db).await?;

    let result = CommentService::new(db)
        .add(&caller_for(&owner), ticket.id, "   ".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests commenting on a ticket that was deleted.
///
/// Expected: NotFound and no orphaned comment
#[tokio::test]
async fn comment_on_deleted_ticket_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, ticket) = factory::helpers::create_ticket_with_owner(db).await?;
    let tech = factory::create_technician(db).await?;

    TicketService::new(db)
        .delete(&caller_for(&tech), ticket.id)
        .await?;

    let result = CommentService::new(db)
        .add(&caller_for(&owner), ticket.id, "Anyone?".to_string())
        .await;

    assert!(is_not_found(&result));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests that listing comments follows the ticket read policy.
///
/// Expected: owner and technicians see comments, other users are forbidden
#[tokio::test]
async fn listing_follows_read_policy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, ticket) = factory::helpers::create_ticket_with_owner(db).await?;
    let tech = factory::create_technician(db).await?;
    let stranger = factory::create_user(db).await?;
    factory::create_comment(db, ticket.id, owner.id).await?;

    let service = CommentService::new(db);

    assert_eq!(
        service
            .list_for_ticket(&caller_for(&owner), ticket.id)
            .await?
            .len(),
        1
    );
    assert_eq!(
        service
            .list_for_ticket(&caller_for(&tech), ticket.id)
            .await?
            .len(),
        1
    );
    assert!(is_forbidden(
        &service
            .list_for_ticket(&caller_for(&stranger), ticket.id)
            .await
    ));

    Ok(())
}
