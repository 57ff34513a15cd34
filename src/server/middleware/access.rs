//! Route classification and the access decision engine.
//!
//! Every request passes through `access_control` after the session layer has
//! run. The path is classified against a declarative prefix table, the
//! requester's role is resolved from the session and the user table, and the
//! combination yields one of four outcomes: pass-through, a redirect to the
//! sign-in page (carrying the original path as a callback), a redirect to the
//! unauthorized page, or a JSON 403 for admin API routes.
//!
//! `classify` and `decide` are pure functions; all I/O lives in the
//! surrounding glue. Lookup failures never propagate out of the middleware:
//! a broken session store reads as "not signed in" and a failed role lookup
//! reads as the default role, so errors can only ever narrow access.
//!
//! Because the session layer wraps this middleware, refreshed session cookies
//! are stamped onto every response produced here, redirects and rejections
//! included.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;
use url::form_urlencoded;

use crate::{
    model::{api::ErrorDto, user::Role},
    server::{
        data::user::UserRepository, error::auth::AuthError,
        middleware::session::SESSION_AUTH_USER_ID, state::AppState,
    },
};

/// Page handling sign-in; protected requests without a session land here.
pub const SIGN_IN_PATH: &str = "/signin";

/// Query parameter carrying the originally requested path through sign-in.
pub const CALLBACK_PARAM: &str = "callback";

/// Page shown when an authenticated user lacks the required role.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Classification of a request path against the protected route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No session required.
    Unprotected,
    /// Admin dashboard pages.
    AdminPage,
    /// Teacher area pages, also open to admins.
    TeacherPage,
    /// Student area pages; any signed-in user passes.
    StudentPage,
    /// Admin API routes; failures are JSON, never redirects.
    AdminApi,
}

/// Protected route table consulted by the classifier.
///
/// First matching prefix wins. `/api/admin` precedes the page prefixes so new
/// entries stay unambiguous even if an overlapping prefix is ever added;
/// adding a protected area means adding a row here, not a branch.
const PROTECTED_ROUTES: &[(&str, RouteClass)] = &[
    ("/api/admin", RouteClass::AdminApi),
    ("/admin", RouteClass::AdminPage),
    ("/teacher", RouteClass::TeacherPage),
    ("/student", RouteClass::StudentPage),
];

impl RouteClass {
    /// Roles allowed through, or `None` when any authenticated user passes.
    fn allowed_roles(self) -> Option<&'static [Role]> {
        match self {
            RouteClass::AdminPage | RouteClass::AdminApi => Some(&[Role::Admin]),
            RouteClass::TeacherPage => Some(&[Role::Admin, Role::Teacher]),
            RouteClass::StudentPage | RouteClass::Unprotected => None,
        }
    }

    /// Whether denial should be a JSON rejection instead of a redirect.
    fn is_api(self) -> bool {
        matches!(self, RouteClass::AdminApi)
    }
}

/// Per-request outcome of the access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Let the request through to its handler.
    Allow,
    /// Send the client to the sign-in page, carrying the original path.
    RedirectToSignIn {
        /// The originally requested path, forwarded back after sign-in.
        callback: String,
    },
    /// Send the client to the unauthorized page.
    RedirectToUnauthorized,
    /// Answer with a JSON 403 body.
    Reject,
}

/// Classifies a request path against the protected route table.
///
/// Literal, case-sensitive prefix tests with no normalization; any path that
/// matches no table row is `Unprotected`. Pure and total — the same path
/// always yields the same classification. The query component never reaches
/// this function since `Uri::path()` excludes it.
pub fn classify(path: &str) -> RouteClass {
    PROTECTED_ROUTES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|&(_, class)| class)
        .unwrap_or(RouteClass::Unprotected)
}

/// Combines route classification and the requester's role into a decision.
///
/// `role` is `None` when there is no signed-in session. The no-session check
/// runs before any role check, for every protected class — so an
/// unauthenticated request to an admin API route is redirected to sign-in
/// rather than rejected, and the client returns to the requested path after
/// signing in.
pub fn decide(class: RouteClass, role: Option<Role>, path: &str) -> AccessDecision {
    if class == RouteClass::Unprotected {
        return AccessDecision::Allow;
    }

    let Some(role) = role else {
        return AccessDecision::RedirectToSignIn {
            callback: path.to_string(),
        };
    };

    match class.allowed_roles() {
        None => AccessDecision::Allow,
        Some(allowed) if allowed.contains(&role) => AccessDecision::Allow,
        Some(_) if class.is_api() => AccessDecision::Reject,
        Some(_) => AccessDecision::RedirectToUnauthorized,
    }
}

/// Axum middleware applying the access decision engine to every request.
///
/// Excluded prefixes (static assets and similar, from configuration) bypass
/// the engine entirely. Unprotected paths short-circuit before touching the
/// session or the database, so public traffic costs no lookups.
pub async fn access_control(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if state
        .route_exclusions
        .iter()
        .any(|prefix| path.starts_with(prefix.as_str()))
    {
        return next.run(request).await;
    }

    let class = classify(&path);
    if class == RouteClass::Unprotected {
        return next.run(request).await;
    }

    let session = request.extensions().get::<Session>().cloned();
    let role = resolve_role(&state.db, session.as_ref()).await;

    match decide(class, role, &path) {
        AccessDecision::Allow => next.run(request).await,
        AccessDecision::RedirectToSignIn { callback } => {
            Redirect::to(&sign_in_redirect(&callback)).into_response()
        }
        AccessDecision::RedirectToUnauthorized => Redirect::to(UNAUTHORIZED_PATH).into_response(),
        AccessDecision::Reject => (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: "Forbidden".to_string(),
            }),
        )
            .into_response(),
    }
}

/// Builds the sign-in redirect target carrying the original path.
///
/// The callback is query-encoded so it round-trips exactly, reserved
/// characters included.
pub fn sign_in_redirect(callback: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(CALLBACK_PARAM, callback)
        .finish();
    format!("{SIGN_IN_PATH}?{query}")
}

/// Resolves the requester's role, failing closed on lookup errors.
///
/// A session-store failure is treated as "not signed in"; a database failure
/// during the role lookup keeps the session but falls back to the default
/// role. Both are logged and neither can widen access.
async fn resolve_role(db: &DatabaseConnection, session: Option<&Session>) -> Option<Role> {
    let session = session?;

    match lookup_role(db, session).await {
        Ok(role) => role,
        Err(AuthError::SessionLookup(err)) => {
            tracing::warn!("Session lookup failed, treating request as unauthenticated: {err}");
            None
        }
        Err(err) => {
            tracing::warn!("{err}; using default role");
            Some(Role::Student)
        }
    }
}

/// Looks up the session user's role.
///
/// # Returns
/// - `Ok(Some(role))` - Signed-in session; a missing user row resolves to the
///   default role
/// - `Ok(None)` - No signed-in session
/// - `Err(AuthError::SessionLookup)` - Session store failed
/// - `Err(AuthError::RoleLookup)` - Database failed during the role query
async fn lookup_role(db: &DatabaseConnection, session: &Session) -> Result<Option<Role>, AuthError> {
    let user_id = session
        .get::<i32>(SESSION_AUTH_USER_ID)
        .await
        .map_err(AuthError::SessionLookup)?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user = UserRepository::new(db)
        .find_by_id(user_id)
        .await
        .map_err(|err| AuthError::RoleLookup(user_id, err))?;

    Ok(Some(user.map(|u| u.role).unwrap_or(Role::Student)))
}
