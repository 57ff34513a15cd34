//! Booking factory for creating test booking entities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// The referenced user and lesson must already exist; use
/// `helpers::create_booking_with_dependencies` when the test does not care
/// about them.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    lesson_id: i32,
    scheduled_at: chrono::DateTime<Utc>,
    status: String,
    notes: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - scheduled_at: one day in the future
    /// - status: `"PENDING"`
    /// - notes: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, lesson_id: i32) -> Self {
        Self {
            db,
            user_id,
            lesson_id,
            scheduled_at: Utc::now() + Duration::days(1),
            status: "PENDING".to_string(),
            notes: None,
        }
    }

    /// Sets the scheduled time for the booking.
    pub fn scheduled_at(mut self, scheduled_at: chrono::DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Sets the status text for the booking.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the optional notes for the booking.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            lesson_id: ActiveValue::Set(self.lesson_id),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking for the given user and lesson.
///
/// Shorthand for `BookingFactory::new(db, user_id, lesson_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    lesson_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, lesson_id).build().await
}
