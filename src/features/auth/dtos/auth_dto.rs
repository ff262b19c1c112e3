use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::accounts::dtos::UserDto;
use crate::features::accounts::models::{User, Village};
use crate::features::auth::services::IssuedTokens;
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for user registration
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(
        length(min = 3, max = 150, message = "Username must be 3-150 characters"),
        regex(
            path = "*USERNAME_REGEX",
            message = "Username may contain only letters, digits and underscores"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Password confirmation; must match `password`
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub password2: String,

    #[validate(length(max = 150, message = "First name must not exceed 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must not exceed 150 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub phone: Option<String>,

    pub village: Option<Village>,
}

/// Request DTO for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for token refresh
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,
}

/// Response DTO for register/login/refresh
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    /// JWT access token
    pub access: String,
    /// JWT refresh token
    pub refresh: String,
    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl AuthResponseDto {
    pub fn new(user: User, tokens: IssuedTokens) -> Self {
        Self {
            user: user.into(),
            access: tokens.access,
            refresh: tokens.refresh,
            expires_in: tokens.expires_in,
        }
    }
}
