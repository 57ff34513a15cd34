use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Permission level associated with a user account.
///
/// Stored as text in the database; unknown or missing values resolve to
/// `Student`, the default level that grants no elevated access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// The database text for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
        }
    }

    /// Parses database text into a role, falling back to the default role.
    ///
    /// Unrecognized text is treated the same as an absent role so bad data can
    /// never grant more than student-level access.
    pub fn from_db(value: &str) -> Self {
        match value {
            "ADMIN" => Role::Admin,
            "TEACHER" => Role::Teacher,
            _ => Role::Student,
        }
    }
}

/// User account details returned by the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Paginated collection of users with navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for changing a user's role.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SetRoleDto {
    pub role: Role,
}
