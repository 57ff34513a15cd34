use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::PaginationQuery, user::SetRoleDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{GetAllUsersParam, SetRoleParam},
        service::user::UserService,
        state::AppState,
    },
};

const USER_TAG: &str = "users";

/// GET /api/admin/users - List all accounts.
///
/// Returns a paginated list of every account, ordered alphabetically by name.
///
/// # Access Control
/// - `Admin` - Only admins can manage accounts
///
/// # Returns
/// - `200 OK` - Paginated list of accounts
/// - `403 Forbidden` - Signed in without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of accounts", body = crate::model::user::PaginatedUsersDto),
        (status = 403, description = "Admin role required", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: params.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// PUT /api/admin/users/{id}/role - Change an account's role.
///
/// Demoting the last remaining admin is refused.
///
/// # Access Control
/// - `Admin` - Only admins can manage accounts
///
/// # Returns
/// - `200 OK` - The account with its new role
/// - `403 Forbidden` - Signed in without the admin role
/// - `404 Not Found` - No account with that id
/// - `409 Conflict` - Would demote the last admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "The account with its new role", body = crate::model::user::UserDto),
        (status = 403, description = "Admin role required", body = crate::model::api::ErrorDto),
        (status = 404, description = "No account with that id", body = crate::model::api::ErrorDto),
        (status = 409, description = "Would demote the last admin", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(SetRoleParam {
            user_id,
            role: payload.role,
        })
        .await?;

    tracing::info!(
        "Admin {} set role of user {} to {}",
        admin.id,
        user.id,
        user.role.as_str()
    );

    Ok((StatusCode::OK, Json(user.into_dto())))
}
