use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::accounts::models::{User, Village};

/// Public representation of a user account.
/// `is_verified` is read-only: only an administrator can change it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub village: Option<Village>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            phone: u.phone,
            village: u.village,
            avatar_url: u.avatar_url,
            is_verified: u.is_verified,
            created_at: u.created_at,
        }
    }
}

/// Request DTO for profile updates; absent fields are left untouched
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 150, message = "First name must not exceed 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must not exceed 150 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub phone: Option<String>,

    pub village: Option<Village>,

    #[validate(length(max = 2000, message = "Avatar URL must not exceed 2000 characters"))]
    pub avatar_url: Option<String>,
}
