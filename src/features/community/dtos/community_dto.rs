use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::church::models::MediaType;
use crate::features::community::models::{
    CommunityMedia, MediaVillage, NewsItem, NewsType, PhoneCategory, UsefulPhone,
};

// =============================================================================
// NEWS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsItemDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub news_type: NewsType,
    pub is_active: bool,
    pub priority: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<NewsItem> for NewsItemDto {
    fn from(n: NewsItem) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            news_type: n.news_type,
            is_active: n.is_active,
            priority: n.priority,
            published_at: n.published_at,
            created_at: n.created_at,
        }
    }
}

/// Admin payload for creating or replacing a news entry
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewsItemPayloadDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub news_type: NewsType,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub priority: i32,
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommunityMediaDto {
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

impl From<CommunityMedia> for CommunityMediaDto {
    fn from(m: CommunityMedia) -> Self {
        let thumbnail_url = m.effective_thumbnail().map(str::to_string);
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            media_type: m.media_type,
            file_url: m.file_url,
            thumbnail_url,
            sort_order: m.sort_order,
            is_published: m.is_published,
            village: m.village,
            uploaded_at: m.uploaded_at,
        }
    }
}

/// Admin payload for creating or replacing a gallery item
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommunityMediaPayloadDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub media_type: MediaType,

    #[validate(length(min = 1, message = "File URL is required"))]
    pub file_url: String,

    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_true")]
    pub is_published: bool,

    pub village: MediaVillage,
}

/// Gallery filters: by media type and by village
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CommunityMediaQuery {
    pub media_type: Option<MediaType>,
    pub village: Option<MediaVillage>,
}

// =============================================================================
// USEFUL PHONES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsefulPhoneDto {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub category: PhoneCategory,
    pub description: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<UsefulPhone> for UsefulPhoneDto {
    fn from(p: UsefulPhone) -> Self {
        Self {
            id: p.id,
            name: p.name,
            phone: p.phone,
            category: p.category,
            description: p.description,
            is_active: p.is_active,
            sort_order: p.sort_order,
        }
    }
}

/// Admin payload for creating or replacing a directory entry
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UsefulPhonePayloadDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 20, message = "Phone must be 1-20 characters"),
        regex(path = "*crate::shared::validation::PHONE_REGEX", message = "Invalid phone number")
    )]
    pub phone: String,

    pub category: PhoneCategory,
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub sort_order: i32,
}

// =============================================================================
// BULK ACTIONS
// =============================================================================

/// Admin bulk visibility toggle for news and phones
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkActivateDto {
    pub ids: Vec<Uuid>,
    pub is_active: bool,
}

/// Admin bulk publish toggle for the gallery
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkPublishDto {
    pub ids: Vec<Uuid>,
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}
