//! Lesson service for catalog business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, lesson::LessonRepository},
    error::AppError,
    model::lesson::{CreateLessonParam, Lesson, PaginatedLessons, UpdateLessonParam},
};

/// Service providing business logic for the lessons catalog.
pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    /// Creates a new LessonService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the public catalog page: active lessons only.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of lessons per page
    ///
    /// # Returns
    /// - `Ok(PaginatedLessons)` - Active lessons with pagination metadata
    /// - `Err(AppError)` - Database error during query
    pub async fn get_catalog(&self, page: u64, per_page: u64) -> Result<PaginatedLessons, AppError> {
        let (lessons, total, total_pages) = LessonRepository::new(self.db)
            .get_active_paginated(page, per_page)
            .await?;

        Ok(PaginatedLessons {
            lessons,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Retrieves a single lesson from the public catalog.
    ///
    /// Inactive lessons are indistinguishable from missing ones to keep
    /// withdrawn offerings out of the public surface.
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The active lesson
    /// - `Err(AppError::NotFound)` - Lesson missing or inactive
    pub async fn get_from_catalog(&self, lesson_id: i32) -> Result<Lesson, AppError> {
        let lesson = LessonRepository::new(self.db).find_by_id(lesson_id).await?;

        match lesson {
            Some(lesson) if lesson.active => Ok(lesson),
            _ => Err(AppError::NotFound("Lesson not found".to_string())),
        }
    }

    /// Creates a lesson.
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(AppError::BadRequest)` - Invalid lesson data
    pub async fn create(&self, param: CreateLessonParam) -> Result<Lesson, AppError> {
        validate_lesson_fields(&param.title, param.price_cents, param.duration_minutes)?;

        let lesson = LessonRepository::new(self.db).create(param).await?;

        Ok(lesson)
    }

    /// Replaces all fields of a lesson.
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The updated lesson
    /// - `Err(AppError::NotFound)` - No lesson with that id
    /// - `Err(AppError::BadRequest)` - Invalid lesson data
    pub async fn update(&self, param: UpdateLessonParam) -> Result<Lesson, AppError> {
        validate_lesson_fields(&param.title, param.price_cents, param.duration_minutes)?;

        let lesson = LessonRepository::new(self.db).update(param).await?;

        lesson.ok_or_else(|| AppError::NotFound("Lesson not found".to_string()))
    }

    /// Deletes a lesson without booking history.
    ///
    /// Lessons that have ever been booked are kept for record integrity;
    /// deactivating removes them from the catalog instead.
    ///
    /// # Returns
    /// - `Ok(())` - Lesson deleted
    /// - `Err(AppError::NotFound)` - No lesson with that id
    /// - `Err(AppError::Conflict)` - Lesson has bookings
    pub async fn delete(&self, lesson_id: i32) -> Result<(), AppError> {
        let booking_count = BookingRepository::new(self.db)
            .count_for_lesson(lesson_id)
            .await?;

        if booking_count > 0 {
            return Err(AppError::Conflict(
                "Lesson has bookings and cannot be deleted; deactivate it instead".to_string(),
            ));
        }

        if !LessonRepository::new(self.db).delete(lesson_id).await? {
            return Err(AppError::NotFound("Lesson not found".to_string()));
        }

        Ok(())
    }
}

/// Validates the lesson fields shared by create and update.
fn validate_lesson_fields(title: &str, price_cents: i32, duration_minutes: i32) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("Lesson title must not be empty".to_string()));
    }
    if price_cents < 0 {
        return Err(AppError::BadRequest("Lesson price must not be negative".to_string()));
    }
    if duration_minutes <= 0 {
        return Err(AppError::BadRequest(
            "Lesson duration must be positive".to_string(),
        ));
    }
    Ok(())
}
