//! DTOs for the public login and registration endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserItem;

/// Request to create an account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Request to exchange email and password for a credential.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Issued credential together with the account it belongs to.
///
/// `token` is an HS256 compact token valid for 24 hours; send it as
/// `Authorization: Bearer <token>`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserItem,
}
