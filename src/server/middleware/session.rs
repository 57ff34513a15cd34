//! Type-safe session management wrapper.
//!
//! Wraps the raw tower-sessions `Session` behind a struct that exposes only the
//! authentication concern, preventing key typos and centralizing session logic.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's account id.
pub const SESSION_AUTH_USER_ID: &str = "auth.user_id";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the authenticated
/// account id and clearing the session at sign-out.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account id in the session.
    ///
    /// Called after successful sign-in (or registration/setup) to establish a
    /// logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - Account id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the account id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Checks if a user is currently signed in.
    ///
    /// # Returns
    /// - `Ok(true)` - User is signed in
    /// - `Ok(false)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session. Used during sign-out.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
