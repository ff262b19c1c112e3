use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Directory category, matching the `phone_category` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "phone_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PhoneCategory {
    Emergency,
    Administration,
    Medical,
    Transport,
    Utility,
    Police,
    Other,
}

/// Database model for a useful phone directory entry
#[derive(Debug, Clone, FromRow)]
pub struct UsefulPhone {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub category: PhoneCategory,
    pub description: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
