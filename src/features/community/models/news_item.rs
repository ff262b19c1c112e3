use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Feed entry kind, matching the `news_type` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "news_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NewsType {
    News,
    Important,
}

/// Database model for a news/important-information entry.
/// `published_at` is stamped the first time the entry goes live and is never
/// reset afterwards, so re-activating keeps the original publication date.
#[derive(Debug, Clone, FromRow)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub news_type: NewsType,
    pub is_active: bool,
    pub priority: i32,
    pub author_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
