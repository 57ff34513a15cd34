use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error body returned by every failing API endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Common pagination query parameters for list endpoints.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
