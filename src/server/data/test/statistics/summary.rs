use super::*;

/// Tests per-status counts for 3 pending, 2 in-progress and 1 resolved ticket.
///
/// Expected: counts match and sum to total
#[tokio::test]
async fn counts_tickets_per_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for estado in [
        "pending",
        "pending",
        "pending",
        "in-progress",
        "in-progress",
        "resolved",
    ] {
        factory::ticket::create_ticket_with_estado(db, owner.id, estado).await?;
    }

    let summary = StatsRepository::new(db).summary().await?;

    assert_eq!(
        summary,
        TicketSummary {
            total: 6,
            pending_count: 3,
            in_progress_count: 2,
            resolved_count: 1,
        }
    );

    Ok(())
}

/// Tests the summary of an empty store.
///
/// Expected: all zeros
#[tokio::test]
async fn returns_zeros_without_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let summary = StatsRepository::new(db).summary().await?;

    assert_eq!(summary, TicketSummary::default());

    Ok(())
}

/// Tests that an unknown stored status fails the summary.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::ticket::create_ticket_with_estado(db, owner.id, "closed").await?;

    let result = StatsRepository::new(db).summary().await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
