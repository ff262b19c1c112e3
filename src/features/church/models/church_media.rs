use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Photo or video, matching the `media_type` database enum.
/// Shared with the community gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

/// Database model for a church gallery item
#[derive(Debug, Clone, FromRow)]
pub struct ChurchMedia {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub media_type: MediaType,
    pub file_url: String,
    pub thumbnail_url: Option<String>,
    pub event_date: NaiveDate,
    pub priest_id: Option<Uuid>,
    pub is_published: bool,
    pub sort_order: i32,
    pub uploaded_by: Option<Uuid>,
    pub uploaded_at: DateTime<Utc>,
}

impl ChurchMedia {
    /// Photos double as their own thumbnail when none was uploaded
    pub fn effective_thumbnail(&self) -> Option<&str> {
        match (&self.thumbnail_url, self.media_type) {
            (Some(url), _) => Some(url),
            (None, MediaType::Photo) => Some(&self.file_url),
            (None, MediaType::Video) => None,
        }
    }
}
