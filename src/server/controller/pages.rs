//! Server-rendered page shells.
//!
//! Markup is intentionally minimal: the pages carry the forms and links the
//! flows need and nothing else. Lesson descriptions are authored as markdown
//! and rendered to HTML here.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    service::{lesson::LessonService, settings::SettingsService},
    state::AppState,
};

/// Lessons shown on the catalog page.
const CATALOG_PAGE_SIZE: u64 = 50;

/// Query parameters for the sign-in page.
#[derive(Deserialize)]
pub struct SignInPageQuery {
    /// Path to return to after signing in, set by the access middleware.
    pub callback: Option<String>,
}

/// Query parameters for the setup page.
#[derive(Deserialize)]
pub struct SetupPageQuery {
    /// One-time setup token from the startup log.
    pub token: Option<String>,
}

/// GET / - Home page with the lessons catalog.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let settings = SettingsService::new(&state.db).get().await?;
    let catalog = LessonService::new(&state.db)
        .get_catalog(0, CATALOG_PAGE_SIZE)
        .await?;

    let mut lessons_html = String::new();
    for lesson in catalog.lessons {
        lessons_html.push_str(&format!(
            "<article><h2>{}</h2><p>{} min &middot; {} &middot; &euro;{:.2}</p>{}</article>\n",
            escape_html(&lesson.title),
            lesson.duration_minutes,
            escape_html(&lesson.level),
            lesson.price_cents as f64 / 100.0,
            render_markdown(&lesson.description),
        ));
    }

    Ok(page(
        &settings.school_name,
        &format!(
            "<h1>{}</h1>\
             <nav><a href=\"/signin\">Sign in</a> <a href=\"/student\">My bookings</a></nav>\
             {}",
            escape_html(&settings.school_name),
            lessons_html
        ),
    ))
}

/// GET /signin - Sign-in and registration forms.
///
/// The callback path arrives via the query string and travels through the
/// form as a hidden field, so a successful sign-in returns the user to the
/// page they originally asked for. An already-signed-in visitor is sent
/// straight back to the callback target.
pub async fn sign_in(
    session: Session,
    Query(query): Query<SignInPageQuery>,
) -> Result<Response, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        // Same-site paths only, as in the sign-in handler itself.
        let target = query
            .callback
            .as_deref()
            .filter(|c| c.starts_with('/') && !c.starts_with("//"))
            .unwrap_or("/");
        return Ok(Redirect::to(target).into_response());
    }

    let callback_field = match query.callback.as_deref() {
        Some(callback) => format!(
            "<input type=\"hidden\" name=\"callback\" value=\"{}\">",
            escape_html(callback)
        ),
        None => String::new(),
    };

    Ok(page(
        "Sign in",
        &format!(
            "<h1>Sign in</h1>\
             <form method=\"post\" action=\"/api/auth/signin\">\
             <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\
             <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\
             {callback_field}\
             <button type=\"submit\">Sign in</button>\
             </form>\
             <h2>New student?</h2>\
             <form method=\"post\" action=\"/api/auth/register\">\
             <input type=\"text\" name=\"name\" placeholder=\"Full name\" required>\
             <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\
             <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\
             <button type=\"submit\">Register</button>\
             </form>"
        ),
    )
    .into_response())
}

/// GET /unauthorized - Shown when a signed-in user lacks the required role.
pub async fn unauthorized() -> Html<String> {
    page(
        "Unauthorized",
        "<h1>Unauthorized</h1>\
         <p>Your account does not have access to that page.</p>\
         <p><a href=\"/\">Back to the catalog</a></p>",
    )
}

/// GET /setup - First-run setup form.
pub async fn setup(Query(query): Query<SetupPageQuery>) -> Html<String> {
    let token = query.token.as_deref().unwrap_or("");

    page(
        "First-run setup",
        &format!(
            "<h1>First-run setup</h1>\
             <p>Create the first admin account using the token from the server log.</p>\
             <form method=\"post\" action=\"/api/setup\">\
             <input type=\"hidden\" name=\"token\" value=\"{}\">\
             <input type=\"text\" name=\"name\" placeholder=\"Full name\" required>\
             <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\
             <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\
             <button type=\"submit\">Create admin</button>\
             </form>",
            escape_html(token)
        ),
    )
}

/// GET /admin - Admin dashboard shell.
///
/// The access middleware has already required the admin role; the guard here
/// only loads the account for the greeting.
pub async fn admin_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(page(
        "Admin",
        &format!(
            "<h1>Admin dashboard</h1>\
             <p>Signed in as {}.</p>\
             <ul>\
             <li><a href=\"/api/admin/users\">Accounts</a></li>\
             <li><a href=\"/api/admin/settings\">Settings</a></li>\
             <li><a href=\"/api/bookings\">Bookings</a></li>\
             <li><a href=\"/api/auth/signout\">Sign out</a></li>\
             </ul>",
            escape_html(&user.name)
        ),
    ))
}

/// GET /teacher - Teacher dashboard shell.
pub async fn teacher_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(page(
        "Teacher",
        &format!(
            "<h1>Teacher dashboard</h1>\
             <p>Signed in as {}.</p>\
             <ul>\
             <li><a href=\"/api/bookings\">Bookings</a></li>\
             <li><a href=\"/api/auth/signout\">Sign out</a></li>\
             </ul>",
            escape_html(&user.name)
        ),
    ))
}

/// GET /student - Student dashboard shell.
pub async fn student_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(page(
        "My bookings",
        &format!(
            "<h1>My bookings</h1>\
             <p>Signed in as {}.</p>\
             <ul>\
             <li><a href=\"/api/bookings\">Bookings</a></li>\
             <li><a href=\"/\">Lessons catalog</a></li>\
             <li><a href=\"/api/auth/signout\">Sign out</a></li>\
             </ul>",
            escape_html(&user.name)
        ),
    ))
}

/// GET /privacy - Privacy policy page.
pub async fn privacy() -> Html<String> {
    page(
        "Privacy policy",
        "<h1>Privacy policy</h1>\
         <p>We store your name, email address, and booking history to operate\
         the school. Data is never shared with third parties.</p>",
    )
}

/// GET /terms - Terms of service page.
pub async fn terms() -> Html<String> {
    page(
        "Terms of service",
        "<h1>Terms of service</h1>\
         <p>Bookings are requests until confirmed by an instructor. Cancel at\
         least 24 hours before your lesson to avoid losing the slot.</p>",
    )
}

/// Wraps body markup in the shared document shell.
fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body>{}</body>\
         </html>",
        escape_html(title),
        body
    ))
}

/// Renders markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markdown);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Escapes text for interpolation into HTML content and attribute values.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
