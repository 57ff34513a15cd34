use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// First-run setup state reported before any admin exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetupStatusDto {
    /// Whether the database answered a connection check.
    pub database_ok: bool,
    /// Whether an admin account exists, which completes setup.
    pub setup_complete: bool,
}

/// Form body for completing first-run setup.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CompleteSetupDto {
    /// One-time setup token printed to the server log at startup.
    pub token: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
