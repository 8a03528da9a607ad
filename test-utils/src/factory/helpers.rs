//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a ticket together with the plain user who owns it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, ticket))` - Created owner and ticket
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticket_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::ticket::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let ticket = crate::factory::ticket::create_ticket(db, owner.id).await?;

    Ok((owner, ticket))
}
