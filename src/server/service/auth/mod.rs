//! Credentials authentication service.
//!
//! Verifies sign-in attempts against stored password hashes and handles
//! student self-registration. Session handling stays in the controllers; this
//! service only answers "who is this" questions against the user table.

pub mod password;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, User},
        service::auth::password::{hash_password, verify_password},
    },
};

/// Parameters for registering a student account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Service providing credentials verification and account registration.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and returns the matching account.
    ///
    /// Unknown email and wrong password produce the same error so responses
    /// never reveal whether an address is registered.
    ///
    /// # Arguments
    /// - `email` - Email address entered at sign-in
    /// - `password` - Plain-text password entered at sign-in
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials verified
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError)` - Database or hashing infrastructure failure
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Registers a new student account.
    ///
    /// Whether registration is currently open is the controller's concern
    /// (it consults the application settings); this method only creates the
    /// account.
    ///
    /// # Arguments
    /// - `param` - Name, email, and plain-text password for the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created student account
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                role: Role::Student,
            })
            .await?;

        Ok(user)
    }
}
