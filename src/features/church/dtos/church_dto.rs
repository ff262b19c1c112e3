use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::church::models::{
    AnnouncementType, ChurchAnnouncement, ChurchMedia, MediaType, Priest, ServiceDay,
    ServiceSchedule,
};

// =============================================================================
// PRIESTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriestDto {
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
}

impl From<Priest> for PriestDto {
    fn from(p: Priest) -> Self {
        Self {
            id: p.id,
            name: p.name,
            title: p.title,
            phone: p.phone,
            email: p.email,
            photo_url: p.photo_url,
            biography: p.biography,
            is_active: p.is_active,
            sort_order: p.sort_order,
            created_at: p.created_at,
        }
    }
}

/// Admin payload for creating or replacing a priest profile
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PriestPayloadDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Title must not exceed 100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Phone must be 1-20 characters"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub photo_url: Option<String>,
    pub biography: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub sort_order: i32,
}

// =============================================================================
// SERVICE SCHEDULE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceScheduleDto {
    pub id: Uuid,
    pub day_of_week: ServiceDay,
    pub date: Option<NaiveDate>,
    pub service_name: String,
    pub starts_at: NaiveTime,
    pub description: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<ServiceSchedule> for ServiceScheduleDto {
    fn from(s: ServiceSchedule) -> Self {
        Self {
            id: s.id,
            day_of_week: s.day_of_week,
            date: s.date,
            service_name: s.service_name,
            starts_at: s.starts_at,
            description: s.description,
            is_active: s.is_active,
            sort_order: s.sort_order,
        }
    }
}

/// Admin payload for creating or replacing a schedule entry
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SchedulePayloadDto {
    pub day_of_week: ServiceDay,
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 200, message = "Service name must be 1-200 characters"))]
    pub service_name: String,

    pub starts_at: NaiveTime,
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub sort_order: i32,
}

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChurchAnnouncementDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub announcement_type: AnnouncementType,
    pub priest_id: Option<Uuid>,
    pub is_active: bool,
    pub priority: i32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ChurchAnnouncement> for ChurchAnnouncementDto {
    fn from(a: ChurchAnnouncement) -> Self {
        Self {
            id: a.id,
            title: a.title,
            content: a.content,
            announcement_type: a.announcement_type,
            priest_id: a.priest_id,
            is_active: a.is_active,
            priority: a.priority,
            valid_from: a.valid_from,
            valid_until: a.valid_until,
            created_at: a.created_at,
        }
    }
}

/// Admin payload for creating or replacing an announcement
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnnouncementPayloadDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub announcement_type: AnnouncementType,
    pub priest_id: Option<Uuid>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub priority: i32,

    /// Defaults to now when omitted
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChurchMediaDto {
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
    pub uploaded_at: DateTime<Utc>,
}

impl From<ChurchMedia> for ChurchMediaDto {
    fn from(m: ChurchMedia) -> Self {
        let thumbnail_url = m.effective_thumbnail().map(str::to_string);
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            media_type: m.media_type,
            file_url: m.file_url,
            thumbnail_url,
            event_date: m.event_date,
            priest_id: m.priest_id,
            is_published: m.is_published,
            sort_order: m.sort_order,
            uploaded_at: m.uploaded_at,
        }
    }
}

/// Admin payload for creating or replacing a gallery item.
/// New uploads stay unpublished until reviewed.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChurchMediaPayloadDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub description: Option<String>,
    pub media_type: MediaType,

    #[validate(length(min = 1, message = "File URL is required"))]
    pub file_url: String,

    pub thumbnail_url: Option<String>,
    pub event_date: NaiveDate,
    pub priest_id: Option<Uuid>,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub sort_order: i32,
}

/// Optional media type filter for gallery lists
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MediaFilterQuery {
    pub media_type: Option<MediaType>,
}

// =============================================================================
// BULK ACTIONS
// =============================================================================

/// Admin bulk visibility toggle for collections with an `is_active` flag
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkActivateDto {
    pub ids: Vec<Uuid>,
    pub is_active: bool,
}

/// Admin bulk publish toggle for the media gallery
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkPublishDto {
    pub ids: Vec<Uuid>,
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}
