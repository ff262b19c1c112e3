use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Simple counter payload used by the console badges
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub count: i64,
}

/// Request DTO for bulk approval of pending listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkApproveDto {
    pub ids: Vec<Uuid>,
}

/// Request DTO for bulk rejection; one comment is shared by every listing
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkRejectDto {
    pub ids: Vec<Uuid>,

    #[validate(length(min = 1, message = "Rejection comment is required"))]
    pub comment: String,
}

/// Number of listings actually touched by a bulk moderation action
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkModerationResultDto {
    pub updated: u64,
}
