use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::auth::{RegisterDto, SignInDto},
    server::{
        error::AppError,
        middleware::{access::SIGN_IN_PATH, auth::AuthGuard, session::AuthSession},
        service::{
            auth::{AuthService, RegisterUserParam},
            settings::SettingsService,
        },
        state::AppState,
    },
};

const AUTH_TAG: &str = "auth";

/// POST /api/auth/signin - Sign in with email and password.
///
/// Verifies the credentials, stores the account id in the session, and
/// forwards the browser to the page it originally asked for (the `callback`
/// form field) or the home page. Only local paths are accepted as callback
/// targets; anything else falls back to `/`.
///
/// # Returns
/// - `303 See Other` - Signed in, redirecting to the callback path
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body(content = SignInDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in, redirecting to the callback path"),
        (status = 401, description = "Unknown email or wrong password", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .sign_in(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} signed in", user.id);

    let target = payload
        .callback
        .as_deref()
        .filter(|callback| is_local_path(callback))
        .unwrap_or("/");

    Ok(Redirect::to(target))
}

/// POST /api/auth/register - Register a student account.
///
/// Open only while registration is enabled in the application settings.
/// The new account is signed in immediately and sent to the student area.
///
/// # Returns
/// - `303 See Other` - Account created and signed in
/// - `400 Bad Request` - Registration closed or email already registered
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body(content = RegisterDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created and signed in"),
        (status = 400, description = "Registration closed or email already registered", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let settings = SettingsService::new(&state.db).get().await?;
    if !settings.registration_open {
        return Err(AppError::BadRequest(
            "Registration is currently closed".to_string(),
        ));
    }

    let user = AuthService::new(&state.db)
        .register(RegisterUserParam {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} registered", user.id);

    Ok(Redirect::to("/student"))
}

/// GET /api/auth/signout - Sign out the current session.
///
/// Clears all session data and sends the browser to the sign-in page.
///
/// # Returns
/// - `303 See Other` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirecting to sign-in"),
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::to(SIGN_IN_PATH))
}

/// GET /api/auth/user - Get the signed-in account.
///
/// # Authentication
/// Requires a signed-in session (no role required).
///
/// # Returns
/// - `200 OK` - The signed-in account
/// - `401 Unauthorized` - No signed-in session
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in account", body = crate::model::user::UserDto),
        (status = 401, description = "No signed-in session", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Accepts only same-site paths as post-sign-in redirect targets.
///
/// A leading single slash keeps the redirect on this origin; `//host` would
/// be treated as protocol-relative by browsers and is refused.
fn is_local_path(callback: &str) -> bool {
    callback.starts_with('/') && !callback.starts_with("//")
}
