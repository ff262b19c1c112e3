use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::church::models::MediaType;

/// Locality scope of a gallery item, matching the `media_village` database
/// enum. `All` marks content shared by both settlements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "media_village", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaVillage {
    Bunyakovo,
    Ryabtsevo,
    All,
}

/// Database model for a community gallery item
#[derive(Debug, Clone, FromRow)]
pub struct CommunityMedia {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub media_type: MediaType,
    pub file_url: String,
    pub thumbnail_url: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
    pub village: MediaVillage,
    pub uploaded_at: DateTime<Utc>,
}

impl CommunityMedia {
    /// Photos double as their own thumbnail when none was uploaded
    pub fn effective_thumbnail(&self) -> Option<&str> {
        match (&self.thumbnail_url, self.media_type) {
            (Some(url), _) => Some(url),
            (None, MediaType::Photo) => Some(&self.file_url),
            (None, MediaType::Video) => None,
        }
    }
}
