use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, booking, lesson, pages, settings, setup, user},
    middleware::access,
    state::AppState,
};

/// OpenAPI document assembled from the controller annotations.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::sign_in,
        auth::register,
        auth::sign_out,
        auth::get_user,
        lesson::get_lessons,
        lesson::get_lesson,
        lesson::create_lesson,
        lesson::update_lesson,
        lesson::delete_lesson,
        booking::get_bookings,
        booking::create_booking,
        booking::update_booking_status,
        booking::cancel_booking,
        user::get_users,
        user::set_user_role,
        settings::get_settings,
        settings::update_settings,
        setup::get_setup_status,
        setup::complete_setup,
    ),
    tags(
        (name = "auth", description = "Sign-in, registration, and session endpoints"),
        (name = "lessons", description = "Public catalog and admin lesson management"),
        (name = "bookings", description = "Lesson bookings and their lifecycle"),
        (name = "users", description = "Admin account management"),
        (name = "settings", description = "Application settings"),
        (name = "setup", description = "First-run setup"),
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Layer order matters: the session layer wraps the access-control layer so
/// every response the engine produces (redirects and rejections included)
/// still passes through the session layer and receives the refreshed cookie.
pub fn router(state: AppState, session_layer: SessionManagerLayer<SqliteStore>) -> Router {
    let pages = Router::new()
        .route("/", get(pages::home))
        .route("/signin", get(pages::sign_in))
        .route("/unauthorized", get(pages::unauthorized))
        .route("/setup", get(pages::setup))
        .route("/privacy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        .route("/admin", get(pages::admin_dashboard))
        .route("/teacher", get(pages::teacher_dashboard))
        .route("/student", get(pages::student_dashboard));

    let api = Router::new()
        .route("/api/auth/signin", post(auth::sign_in))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/signout", get(auth::sign_out))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/lessons", get(lesson::get_lessons))
        .route("/api/lessons/{id}", get(lesson::get_lesson))
        .route(
            "/api/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route(
            "/api/bookings/{id}/status",
            put(booking::update_booking_status),
        )
        .route("/api/bookings/{id}/cancel", post(booking::cancel_booking))
        .route("/api/admin/lessons", post(lesson::create_lesson))
        .route(
            "/api/admin/lessons/{id}",
            put(lesson::update_lesson).delete(lesson::delete_lesson),
        )
        .route("/api/admin/users", get(user::get_users))
        .route("/api/admin/users/{id}/role", put(user::set_user_role))
        .route(
            "/api/admin/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/setup/status", get(setup::get_setup_status))
        .route("/api/setup", post(setup::complete_setup));

    Router::new()
        .merge(pages)
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            access::access_control,
        ))
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
