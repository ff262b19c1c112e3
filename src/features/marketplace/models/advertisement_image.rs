use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an advertisement image.
/// Each listing holds at most three, ordered by `sort_order` (0 comes first).
#[derive(Debug, Clone, FromRow)]
pub struct AdvertisementImage {
    pub id: Uuid,
    pub advertisement_id: Uuid,
    pub image_url: String,
    pub sort_order: i32,
    pub uploaded_at: DateTime<Utc>,
}
