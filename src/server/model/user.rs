//! User domain models and parameters.
//!
//! Provides domain models for application accounts with their permission role.
//! Includes parameter types for account creation and role management.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, Role, UserDto};

/// Application account with its permission role.
///
/// Carries the stored password hash for credential verification inside the
/// service layer; the hash never leaves the server (see `into_dto`).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string verified at sign-in.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here; no response type carries it.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Role text is parsed leniently: unknown values resolve to the default
    /// `Student` role rather than failing the conversion.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_db(&entity.role),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating an account.
///
/// The password arrives already hashed; plain-text passwords stop at the
/// auth service.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Parameters for changing a user's role.
#[derive(Debug, Clone)]
pub struct SetRoleParam {
    pub user_id: i32,
    pub role: Role,
}
