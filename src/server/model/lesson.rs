//! Lesson domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::lesson::{LessonDto, PaginatedLessonsDto};

/// Catalog lesson offered by the school.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub title: String,
    /// Markdown source rendered on the catalog page.
    pub description: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub level: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Lesson {
    /// Converts the lesson domain model to a DTO for API responses.
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            title: self.title,
            description: self.description,
            price_cents: self.price_cents,
            duration_minutes: self.duration_minutes,
            level: self.level,
            active: self.active,
        }
    }

    /// Converts an entity model to a lesson domain model at the repository boundary.
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price_cents: entity.price_cents,
            duration_minutes: entity.duration_minutes,
            level: entity.level,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a lesson.
#[derive(Debug, Clone)]
pub struct CreateLessonParam {
    pub title: String,
    pub description: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub level: String,
    pub active: bool,
}

/// Parameters for updating a lesson. All fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateLessonParam {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub level: String,
    pub active: bool,
}

/// Paginated collection of lessons with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedLessons {
    pub lessons: Vec<Lesson>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedLessons {
    /// Converts the paginated lessons domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedLessonsDto {
        let lessons = self.lessons.into_iter().map(|l| l.into_dto()).collect();

        PaginatedLessonsDto {
            lessons,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
