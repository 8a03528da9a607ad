use super::*;

/// Tests per-tipo counts ordered by count descending, ties by tipo ascending.
///
/// Expected: [(network, 3), (hardware, 1), (software, 1)]
#[tokio::test]
async fn counts_per_type_most_frequent_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for tipo in ["software", "network", "hardware", "network", "network"] {
        factory::ticket::TicketFactory::new(db, owner.id)
            .tipo(tipo)
            .build()
            .await?;
    }

    let counts = StatsRepository::new(db).by_type().await?;

    assert_eq!(
        counts,
        vec![
            TypeCount {
                tipo: "network".to_string(),
                count: 3
            },
            TypeCount {
                tipo: "hardware".to_string(),
                count: 1
            },
            TypeCount {
                tipo: "software".to_string(),
                count: 1
            },
        ]
    );

    Ok(())
}
