use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::PaginationQuery,
        lesson::{CreateLessonDto, UpdateLessonDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::lesson::{CreateLessonParam, UpdateLessonParam},
        service::lesson::LessonService,
        state::AppState,
    },
};

const LESSON_TAG: &str = "lessons";

/// GET /api/lessons - Browse the public lessons catalog.
///
/// Returns active lessons only, ordered by title. No authentication required.
///
/// # Returns
/// - `200 OK` - Paginated list of active lessons
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lessons",
    tag = LESSON_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of active lessons", body = crate::model::lesson::PaginatedLessonsDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lessons = LessonService::new(&state.db)
        .get_catalog(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(lessons.into_dto())))
}

/// GET /api/lessons/{id} - Get a single catalog lesson.
///
/// Inactive lessons answer 404, indistinguishable from missing ones.
///
/// # Returns
/// - `200 OK` - The lesson
/// - `404 Not Found` - Lesson missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "The lesson", body = crate::model::lesson::LessonDto),
        (status = 404, description = "Lesson missing or inactive", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = LessonService::new(&state.db)
        .get_from_catalog(lesson_id)
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

/// POST /api/admin/lessons - Create a lesson.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Returns
/// - `201 Created` - The created lesson
/// - `400 Bad Request` - Invalid lesson data
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/lessons",
    tag = LESSON_TAG,
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "The created lesson", body = crate::model::lesson::LessonDto),
        (status = 400, description = "Invalid lesson data", body = crate::model::api::ErrorDto),
        (status = 403, description = "Admin role required", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lesson = LessonService::new(&state.db)
        .create(CreateLessonParam {
            title: payload.title,
            description: payload.description,
            price_cents: payload.price_cents,
            duration_minutes: payload.duration_minutes,
            level: payload.level,
            active: payload.active,
        })
        .await?;

    tracing::info!("Admin {} created lesson {}", admin.id, lesson.id);

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

/// PUT /api/admin/lessons/{id} - Update a lesson.
///
/// Replaces every field, including the active flag used to pull a lesson
/// from the catalog.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Returns
/// - `200 OK` - The updated lesson
/// - `400 Bad Request` - Invalid lesson data
/// - `404 Not Found` - No lesson with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "The updated lesson", body = crate::model::lesson::LessonDto),
        (status = 400, description = "Invalid lesson data", body = crate::model::api::ErrorDto),
        (status = 404, description = "No lesson with that id", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
    Json(payload): Json<UpdateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lesson = LessonService::new(&state.db)
        .update(UpdateLessonParam {
            id: lesson_id,
            title: payload.title,
            description: payload.description,
            price_cents: payload.price_cents,
            duration_minutes: payload.duration_minutes,
            level: payload.level,
            active: payload.active,
        })
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

/// DELETE /api/admin/lessons/{id} - Delete a lesson without bookings.
///
/// Lessons with booking history cannot be deleted; deactivate them instead.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Returns
/// - `204 No Content` - Lesson deleted
/// - `404 Not Found` - No lesson with that id
/// - `409 Conflict` - Lesson has bookings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/lessons/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 404, description = "No lesson with that id", body = crate::model::api::ErrorDto),
        (status = 409, description = "Lesson has bookings", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LessonService::new(&state.db).delete(lesson_id).await?;

    tracing::info!("Admin {} deleted lesson {}", admin.id, lesson_id);

    Ok(StatusCode::NO_CONTENT)
}
