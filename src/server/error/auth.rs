use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The session store failed while reading the authenticated user.
    ///
    /// In the access-control middleware this is caught and the request is
    /// treated as unauthenticated; elsewhere it surfaces as a generic 500.
    #[error("Session store lookup failed: {0}")]
    SessionLookup(#[source] tower_sessions::session::Error),

    /// The database failed while resolving a session user's role.
    ///
    /// In the access-control middleware this is caught and the request keeps
    /// the default role; elsewhere it surfaces as a generic 500.
    #[error("Role lookup failed for user {0}: {1}")]
    RoleLookup(i32, #[source] sea_orm::DbErr),

    /// Sign-in was attempted with an unknown email or a wrong password.
    ///
    /// Results in a 401 Unauthorized response with a message that does not
    /// reveal which of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A guarded endpoint was called without an authenticated session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the stale id is logged.
    #[error("User {0} is in session but not in the database")]
    UserNotInDatabase(i32),

    /// An authenticated user lacks the required permission.
    ///
    /// Results in a 403 Forbidden response; the detail string is logged
    /// server-side only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The first-run setup token was wrong, expired, or already used.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid or expired setup token")]
    SetupTokenInvalid,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid information leakage; the full
/// error detail is logged server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session references missing user {}", user_id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("User {} denied access: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Forbidden".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::SetupTokenInvalid => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Invalid or expired setup token".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
