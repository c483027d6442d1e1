use serde::{Deserialize, Serialize};
use validator::Validate;

use otp_core::domain::entities::{User, UserRole};

/// Body of `POST /api/users`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Defaults to the plain user role when absent
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl CreateUserRequest {
    pub fn role(&self) -> UserRole {
        self.role.unwrap_or_default()
    }
}

/// Body of `POST /api/users/login`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login payload
///
/// The user serializes without its password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}
