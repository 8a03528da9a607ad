use super::*;

/// Tests creating an active account.
///
/// Expected: Ok(User) with the given fields and activo set
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice", Role::Technician)).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.rol, Role::Technician);
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert!(user.activo);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found.map(|u| u.username), Some("alice".to_string()));

    Ok(())
}

/// Tests that a duplicate username is reported as a unique violation.
///
/// Expected: Err(DbErr) whose sql_err is UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    use sea_orm::SqlErr;

    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("bob", Role::User)).await?;

    let err = repo.create(params("bob", Role::User)).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
