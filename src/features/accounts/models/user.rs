use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Village a user belongs to, matching the `user_village` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_village", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Village {
    Bunyakovo,
    Ryabtsevo,
}

impl Village {
    /// Human-readable label shown in notifications
    pub fn display_name(&self) -> &'static str {
        match self {
            Village::Bunyakovo => "Буняково",
            Village::Ryabtsevo => "Рябцево",
        }
    }
}

impl std::fmt::Display for Village {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Village::Bunyakovo => write!(f, "bunyakovo"),
            Village::Ryabtsevo => write!(f, "ryabtsevo"),
        }
    }
}

/// Database model for a portal user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub village: Option<Village>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name: first/last name when present, username otherwise
    #[allow(dead_code)]
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: "resident".to_string(),
            email: "resident@example.com".to_string(),
            password_hash: String::new(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: String::new(),
            village: Some(Village::Bunyakovo),
            avatar_url: None,
            is_verified: false,
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name_prefers_names() {
        assert_eq!(user("Ivan", "Petrov").full_name(), "Ivan Petrov");
        assert_eq!(user("Ivan", "").full_name(), "Ivan");
    }

    #[test]
    fn test_full_name_falls_back_to_username() {
        assert_eq!(user("", "").full_name(), "resident");
    }
}
