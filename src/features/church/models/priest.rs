use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a priest profile
#[derive(Debug, Clone, FromRow)]
pub struct Priest {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub biography: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
