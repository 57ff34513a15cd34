//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records in the
//! database. It handles account creation, queries, role management, and the
//! admin-existence check used by the first-run setup flow, with conversion from
//! entity models to domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::model::user::{CreateUserParam, User},
};

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// The unique index on `email` makes a duplicate insert fail; callers that
    /// want a friendly error check `find_by_email` first.
    ///
    /// # Arguments
    /// - `param` - Account data including the already-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error during insert (including duplicate email)
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds an account by its primary key.
    ///
    /// This is the role lookup used by the access-control middleware: a single
    /// keyed read per request.
    ///
    /// # Arguments
    /// - `user_id` - Account id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an account by email address.
    ///
    /// Used by sign-in and by registration's duplicate check.
    ///
    /// # Arguments
    /// - `email` - Email address, matched exactly
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin accounts exist in the database.
    ///
    /// Used during startup to decide whether the first-run setup token should
    /// be generated, and by the setup endpoint to refuse repeat setup.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin account exists
    /// - `Ok(false)` - No admin accounts exist (first-run scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        Ok(self.count_admins().await? > 0)
    }

    /// Counts admin accounts.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of accounts with the admin role
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_admins(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await
    }

    /// Gets all accounts with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of accounts per page
    ///
    /// # Returns
    /// - `Ok((users, total_items, total_pages))` - Accounts for the page plus counts
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, counts.number_of_items, counts.number_of_pages))
    }

    /// Sets the role for an account.
    ///
    /// # Arguments
    /// - `user_id` - Account id
    /// - `role` - Role to store
    ///
    /// # Returns
    /// - `Ok(())` - Role updated (or no matching account)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_role(&self, user_id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
