//! User service for account management business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{GetAllUsersParam, PaginatedUsers, SetRoleParam, User},
    },
};

/// Service providing business logic for account management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all accounts with pagination.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and accounts per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Accounts for the requested page with pagination metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let (users, total, total_pages) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Changes an account's role.
    ///
    /// Demoting the last remaining admin is refused — the system must always
    /// keep at least one account that can manage it.
    ///
    /// # Arguments
    /// - `param` - The account id and the role to assign
    ///
    /// # Returns
    /// - `Ok(User)` - The account with its new role
    /// - `Err(AppError::NotFound)` - No account with that id
    /// - `Err(AppError::Conflict)` - Would demote the last admin
    pub async fn set_role(&self, param: SetRoleParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(param.user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if user.role == Role::Admin
            && param.role != Role::Admin
            && user_repo.count_admins().await? <= 1
        {
            return Err(AppError::Conflict(
                "Cannot remove the last admin".to_string(),
            ));
        }

        user_repo.set_role(param.user_id, param.role).await?;

        Ok(User {
            role: param.role,
            ..user
        })
    }
}
