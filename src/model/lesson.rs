use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog lesson returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub title: String,
    /// Markdown source; rendered to HTML on the catalog page.
    pub description: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub level: String,
    pub active: bool,
}

/// Paginated collection of lessons with navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedLessonsDto {
    pub lessons: Vec<LessonDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for creating a lesson.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLessonDto {
    pub title: String,
    pub description: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub level: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Request body for updating a lesson. All fields are replaced.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateLessonDto {
    pub title: String,
    pub description: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub level: String,
    pub active: bool,
}

fn default_active() -> bool {
    true
}
