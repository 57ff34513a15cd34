use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require_admin;
mod require_any;
mod require_teacher;
