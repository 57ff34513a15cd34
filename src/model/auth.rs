use serde::Deserialize;
use utoipa::ToSchema;

/// Credentials submitted by the sign-in form.
///
/// `callback` carries the path the user originally requested so a successful
/// sign-in can forward them back to it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
    pub callback: Option<String>,
}

/// Details submitted by the student registration form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}
