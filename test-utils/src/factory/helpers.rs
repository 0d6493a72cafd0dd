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

/// Creates an organizer user and an event they own, both with default values.
///
/// # Returns
/// - `Ok((organizer, event))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_organizer(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::event::Model), DbErr> {
    let organizer = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, organizer.id).await?;

    Ok((organizer, event))
}

/// Creates an author user and an announcement they wrote, both with default values.
///
/// # Returns
/// - `Ok((author, announcement))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_announcement_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::announcement::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let announcement = crate::factory::announcement::create_announcement(db, author.id).await?;

    Ok((author, announcement))
}
