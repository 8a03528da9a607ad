use super::*;

/// Tests detecting an active technician.
///
/// Expected: false with only plain or inactive technicians, true once an active one exists
#[tokio::test]
async fn detects_active_technician() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.technician_exists().await?);

    factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .rol("technician")
        .activo(false)
        .build()
        .await?;
    assert!(!repo.technician_exists().await?);

    factory::create_technician(db).await?;
    assert!(repo.technician_exists().await?);

    Ok(())
}
