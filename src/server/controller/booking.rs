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
        booking::{CreateBookingDto, UpdateBookingStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::CreateBookingParam,
        service::booking::BookingService,
        state::AppState,
    },
};

const BOOKING_TAG: &str = "bookings";

/// GET /api/bookings - List bookings visible to the requester.
///
/// Students see their own bookings; teachers and admins see everyone's.
///
/// # Authentication
/// Requires a signed-in session (no role required).
///
/// # Returns
/// - `200 OK` - Paginated list of visible bookings
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of visible bookings", body = crate::model::booking::PaginatedBookingsDto),
        (status = 401, description = "Not signed in", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db)
        .get_for_requester(&user, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

/// POST /api/bookings - Book a lesson.
///
/// Creates a pending booking for the signed-in account, subject to the
/// booking rules from the application settings (future slot inside the
/// booking window, active-booking cap).
///
/// # Authentication
/// Requires a signed-in session (no role required).
///
/// # Returns
/// - `201 Created` - The created pending booking
/// - `400 Bad Request` - A booking rule was violated
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - Lesson missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "The created pending booking", body = crate::model::booking::BookingDto),
        (status = 400, description = "A booking rule was violated", body = crate::model::api::ErrorDto),
        (status = 401, description = "Not signed in", body = crate::model::api::ErrorDto),
        (status = 404, description = "Lesson missing or inactive", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParam {
            user_id: user.id,
            lesson_id: payload.lesson_id,
            scheduled_at: payload.scheduled_at,
            notes: payload.notes,
        })
        .await?;

    tracing::info!("User {} booked lesson {}", user.id, booking.lesson_id);

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// PUT /api/bookings/{id}/status - Move a booking to a new status.
///
/// Applies a transition of the booking state machine: pending bookings can be
/// confirmed or cancelled, confirmed ones completed or cancelled.
///
/// # Access Control
/// - `Teacher` - Teachers and admins manage booking statuses
///
/// # Returns
/// - `200 OK` - The booking in its new status
/// - `400 Bad Request` - Transition not allowed
/// - `403 Forbidden` - Signed in without the teacher or admin role
/// - `404 Not Found` - No booking with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "The booking in its new status", body = crate::model::booking::BookingDto),
        (status = 400, description = "Transition not allowed", body = crate::model::api::ErrorDto),
        (status = 403, description = "Teacher or admin role required", body = crate::model::api::ErrorDto),
        (status = 404, description = "No booking with that id", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(booking_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// POST /api/bookings/{id}/cancel - Cancel a booking.
///
/// Students may cancel their own non-finalized bookings; teachers and admins
/// may cancel any.
///
/// # Authentication
/// Requires a signed-in session (no role required).
///
/// # Returns
/// - `200 OK` - The cancelled booking
/// - `400 Bad Request` - Booking already finalized
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - No such booking visible to the requester
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "The cancelled booking", body = crate::model::booking::BookingDto),
        (status = 400, description = "Booking already finalized", body = crate::model::api::ErrorDto),
        (status = 401, description = "Not signed in", body = crate::model::api::ErrorDto),
        (status = 404, description = "No such booking visible to the requester", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .cancel(booking_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
