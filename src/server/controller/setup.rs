use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::setup::CompleteSetupDto,
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::setup::CompleteSetupParam,
        service::setup::SetupService,
        state::AppState,
    },
};

const SETUP_TAG: &str = "setup";

/// GET /api/setup/status - Report first-run setup state.
///
/// Reports database health (a connection ping) and whether an admin account
/// exists. Unauthenticated by design: this is what an installer looks at
/// before any account exists.
///
/// # Returns
/// - `200 OK` - Setup state
#[utoipa::path(
    get,
    path = "/api/setup/status",
    tag = SETUP_TAG,
    responses(
        (status = 200, description = "Setup state", body = crate::model::setup::SetupStatusDto),
    ),
)]
pub async fn get_setup_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = SetupService::new(&state.db).status().await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// POST /api/setup - Create the first admin account.
///
/// Consumes the one-time setup token printed to the server log at startup,
/// creates the admin account and the default settings row, signs the new
/// admin in, and forwards them to the admin area.
///
/// # Returns
/// - `303 See Other` - Setup complete, signed in as the new admin
/// - `403 Forbidden` - Token missing, expired, or wrong
/// - `409 Conflict` - Setup already completed
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/setup",
    tag = SETUP_TAG,
    request_body(content = CompleteSetupDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Setup complete, signed in as the new admin"),
        (status = 403, description = "Token missing, expired, or wrong", body = crate::model::api::ErrorDto),
        (status = 409, description = "Setup already completed", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn complete_setup(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<CompleteSetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = SetupService::new(&state.db)
        .complete(
            &state.setup_tokens,
            &payload.token,
            CompleteSetupParam {
                name: payload.name,
                email: payload.email,
                password: payload.password,
            },
        )
        .await?;

    AuthSession::new(&session).set_user_id(admin.id).await?;

    tracing::info!("First-run setup completed; admin {} created", admin.id);

    Ok(Redirect::to("/admin"))
}
