//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::setup::SetupTokenService;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply, as it contains
/// reference-counted or pooled types) for each incoming request via Axum's
/// state extraction. There are no module-level singletons; everything a
/// handler needs arrives through this struct.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Shared across all requests; clones share the underlying pool.
    pub db: DatabaseConnection,

    /// Service holding the one-time first-run setup token.
    ///
    /// Generated at startup when no admin user exists and consumed by the
    /// setup endpoint.
    pub setup_tokens: SetupTokenService,

    /// Path prefixes the access-control middleware passes through untouched
    /// (static assets and similar), taken from configuration.
    pub route_exclusions: Arc<Vec<String>>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is handed to the Axum router.
    pub fn new(
        db: DatabaseConnection,
        setup_tokens: SetupTokenService,
        route_exclusions: Vec<String>,
    ) -> Self {
        Self {
            db,
            setup_tokens,
            route_exclusions: Arc::new(route_exclusions),
        }
    }
}
