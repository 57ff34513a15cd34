use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::settings::UpdateAdminSettingsDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::UpdateSettingsParam,
        service::settings::SettingsService,
        state::AppState,
    },
};

const SETTINGS_TAG: &str = "settings";

/// GET /api/admin/settings - Read the application settings.
///
/// Returns defaults until the settings row has been written.
///
/// # Access Control
/// - `Admin` - Only admins can view settings
///
/// # Returns
/// - `200 OK` - The application settings
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "The application settings", body = crate::model::settings::AdminSettingsDto),
        (status = 403, description = "Admin role required", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings = SettingsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// PUT /api/admin/settings - Replace the application settings.
///
/// # Access Control
/// - `Admin` - Only admins can change settings
///
/// # Returns
/// - `200 OK` - The stored settings
/// - `400 Bad Request` - A value fails validation
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = SETTINGS_TAG,
    request_body = UpdateAdminSettingsDto,
    responses(
        (status = 200, description = "The stored settings", body = crate::model::settings::AdminSettingsDto),
        (status = 400, description = "A value fails validation", body = crate::model::api::ErrorDto),
        (status = 403, description = "Admin role required", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateAdminSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings = SettingsService::new(&state.db)
        .update(UpdateSettingsParam {
            school_name: payload.school_name,
            contact_email: payload.contact_email,
            booking_window_days: payload.booking_window_days,
            max_active_bookings: payload.max_active_bookings,
            registration_open: payload.registration_open,
        })
        .await?;

    tracing::info!("Admin {} updated application settings", admin.id);

    Ok((StatusCode::OK, Json(settings.into_dto())))
}
