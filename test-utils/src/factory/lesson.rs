//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons with customizable fields.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    price_cents: i32,
    duration_minutes: i32,
    level: String,
    active: bool,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Lesson {id}"` where id is auto-incremented
    /// - description: a short markdown snippet
    /// - price_cents: `5500`
    /// - duration_minutes: `60`
    /// - level: `"BEGINNER"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Lesson {}", id),
            description: "Practice session with an instructor.".to_string(),
            price_cents: 5500,
            duration_minutes: 60,
            level: "BEGINNER".to_string(),
            active: true,
        }
    }

    /// Sets the title for the lesson.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the markdown description for the lesson.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the price in cents for the lesson.
    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the duration in minutes for the lesson.
    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Sets the difficulty level for the lesson.
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets whether the lesson is visible in the catalog.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the lesson entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::lesson::Model)` - Created lesson entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price_cents: ActiveValue::Set(self.price_cents),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            level: ActiveValue::Set(self.level),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active lesson with default values.
///
/// Shorthand for `LessonFactory::new(db).build().await`.
pub async fn create_lesson(db: &DatabaseConnection) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db).build().await
}
