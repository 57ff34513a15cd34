use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";

/// Request path prefixes the access-control middleware skips entirely.
///
/// Static assets and well-known files never carry authorization semantics;
/// the list can be overridden with the `ROUTE_EXCLUSIONS` variable.
const DEFAULT_ROUTE_EXCLUSIONS: &str = "/assets,/favicon.ico,/robots.txt";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,
    pub route_exclusions: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let route_exclusions = std::env::var("ROUTE_EXCLUSIONS")
            .unwrap_or_else(|_| DEFAULT_ROUTE_EXCLUSIONS.to_string())
            .split(',')
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty())
            .collect();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            route_exclusions,
        })
    }
}
