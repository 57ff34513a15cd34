//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a booking together with its user and lesson dependencies.
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, lesson, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::lesson::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let lesson = crate::factory::lesson::create_lesson(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, lesson.id).await?;

    Ok((user, lesson, booking))
}
