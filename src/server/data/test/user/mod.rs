use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod admin_exists;
mod create;
mod find_by_email;
mod get_all_paginated;
mod set_role;

/// Builds a create parameter with unique-enough values for one test.
fn user_param(email: &str, name: &str, role: Role) -> CreateUserParam {
    CreateUserParam {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "stored-hash".to_string(),
        role,
    }
}
