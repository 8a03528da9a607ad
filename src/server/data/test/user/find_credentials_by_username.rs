use super::*;

/// Tests looking up credentials of an active account.
///
/// Expected: Ok(Some(UserCredentials)) carrying the stored hash
#[tokio::test]
async fn finds_active_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("carol")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_username("carol")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests that inactive and unknown accounts are not returned.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn skips_inactive_and_unknown_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("dave")
        .activo(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_credentials_by_username("dave").await?.is_none());
    assert!(repo.find_credentials_by_username("nobody").await?.is_none());

    Ok(())
}
