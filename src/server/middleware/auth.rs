//! Handler-level authentication guard.
//!
//! The access-control middleware gates whole route prefixes; handlers that
//! need the acting user (or a finer-grained permission on a non-prefixed
//! route) use `AuthGuard` to load the account behind the session and check
//! its role.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Permission checked by `AuthGuard::require`.
pub enum Permission {
    /// Requires the admin role.
    Admin,
    /// Requires the teacher role; admins pass as well.
    Teacher,
}

/// Guard that resolves the session to an account and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the signed-in account and verifies it holds every listed permission.
    ///
    /// An empty permission list only requires a signed-in account that still
    /// exists in the database.
    ///
    /// # Returns
    /// - `Ok(User)` - The acting account
    /// - `Err(AuthError::UserNotInSession)` - No signed-in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted account
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin access required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Teacher => {
                    if !matches!(user.role, Role::Admin | Role::Teacher) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "teacher access required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
