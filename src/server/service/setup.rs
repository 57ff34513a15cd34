//! First-run setup: one-time token management and first-admin creation.
//!
//! When the application starts with no admin account, a random setup token is
//! generated and its URL printed to the log. Whoever holds the token can
//! create the first admin through the setup endpoint; the token is single-use
//! and expires after a short TTL, so an unconfigured instance never stays
//! open-ended.

use rand::Rng;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::{
    model::user::Role,
    server::{
        data::{settings::SettingsRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            settings::{AdminSettings, UpdateSettingsParam},
            setup::{CompleteSetupParam, SetupStatus},
            user::{CreateUserParam, User},
        },
        service::auth::password::hash_password,
    },
};

/// Time-to-live for setup tokens in seconds.
///
/// Long enough to fill in the setup form by hand, short enough that a leaked
/// log line goes stale quickly.
const SETUP_TOKEN_TTL_SECONDS: u64 = 600;

/// Stored setup token with expiration timestamp.
#[derive(Clone)]
struct SetupToken {
    /// The token string.
    token: String,
    /// Timestamp when this token expires.
    expires_at: Instant,
}

impl SetupToken {
    fn new(token: String) -> Self {
        Self {
            token,
            expires_at: Instant::now() + Duration::from_secs(SETUP_TOKEN_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.token == input
    }
}

/// Service managing the one-time first-run setup token.
///
/// The token lives in memory only; restarting the server generates a fresh
/// one (if still needed), which also invalidates anything previously logged.
#[derive(Clone)]
pub struct SetupTokenService {
    /// The currently active token, if any.
    token: Arc<RwLock<Option<SetupToken>>>,
}

impl SetupTokenService {
    /// Creates a new SetupTokenService with no active token.
    pub fn new() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random setup token, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character token
    pub async fn generate(&self) -> String {
        let token_string = Self::generate_random_token();
        *self.token.write().await = Some(SetupToken::new(token_string.clone()));
        token_string
    }

    /// Validates the provided token and consumes it on success.
    ///
    /// A matching, unexpired token is invalidated so it can be used exactly
    /// once. Expired tokens are cleaned up and fail validation.
    ///
    /// # Returns
    /// - `true` - Token matched and was consumed
    /// - `false` - Token missing, expired, or mismatched
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut token = self.token.write().await;

        if let Some(stored) = token.as_ref() {
            if stored.is_expired() {
                *token = None;
                return false;
            }

            if stored.matches(input) {
                *token = None;
                return true;
            }
        }

        false
    }

    /// Generates a random 32-character alphanumeric token.
    fn generate_random_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const TOKEN_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks whether an unexpired token is currently stored.
    ///
    /// Used in tests to verify token state.
    #[cfg(test)]
    pub async fn has_valid_token(&self) -> bool {
        let mut token = self.token.write().await;

        if let Some(stored) = token.as_ref() {
            if stored.is_expired() {
                *token = None;
                return false;
            }
            return true;
        }

        false
    }
}

/// Service completing the first-run setup.
pub struct SetupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetupService<'a> {
    /// Creates a new SetupService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports the setup state of the installation.
    ///
    /// The database check is a connection ping; the admin check decides
    /// whether setup is still open. Errors on either check read as a negative
    /// answer rather than failing the endpoint — the status page must render
    /// precisely when the installation is broken.
    ///
    /// # Returns
    /// - `Ok(SetupStatus)` - Database health and setup completion flags
    pub async fn status(&self) -> Result<SetupStatus, AppError> {
        let database_ok = self.db.ping().await.is_ok();

        let setup_complete = match UserRepository::new(self.db).admin_exists().await {
            Ok(exists) => exists,
            Err(err) => {
                tracing::warn!("Setup status check could not query admins: {err}");
                false
            }
        };

        Ok(SetupStatus {
            database_ok,
            setup_complete,
        })
    }

    /// Creates the first admin account and the default settings row.
    ///
    /// # Arguments
    /// - `tokens` - Token service holding the startup-generated token
    /// - `token` - The token presented by the caller
    /// - `param` - Name, email, and password for the first admin
    ///
    /// # Returns
    /// - `Ok(User)` - The created admin account
    /// - `Err(AppError::Conflict)` - An admin already exists
    /// - `Err(AuthError::SetupTokenInvalid)` - Token missing, expired, or wrong
    pub async fn complete(
        &self,
        tokens: &SetupTokenService,
        token: &str,
        param: CompleteSetupParam,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Err(AppError::Conflict(
                "Setup has already been completed".to_string(),
            ));
        }

        if !tokens.validate_and_consume(token).await {
            return Err(AuthError::SetupTokenInvalid.into());
        }

        let password_hash = hash_password(&param.password)?;

        let admin = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                role: Role::Admin,
            })
            .await?;

        // Write the defaults so later reads and edits work on a real row.
        let defaults = AdminSettings::defaults();
        SettingsRepository::new(self.db)
            .upsert(UpdateSettingsParam {
                school_name: defaults.school_name,
                contact_email: defaults.contact_email,
                booking_window_days: defaults.booking_window_days,
                max_active_bookings: defaults.max_active_bookings,
                registration_open: defaults.registration_open,
            })
            .await?;

        Ok(admin)
    }
}
