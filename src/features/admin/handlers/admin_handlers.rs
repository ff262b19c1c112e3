use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::accounts::dtos::UserDto;
use crate::features::accounts::services::UserService;
use crate::features::admin::dtos::{
    BulkApproveDto, BulkModerationResultDto, BulkRejectDto, CountDto,
};
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::ApiResponse;

/// State for the admin routes
#[derive(Clone)]
pub struct AdminState {
    pub admin: Arc<AdminService>,
    pub users: Arc<UserService>,
}

/// Number of users waiting for verification
#[utoipa::path(
    get,
    path = "/api/admin/unverified-users",
    responses(
        (status = 200, description = "Unverified user count", body = ApiResponse<CountDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn unverified_users_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AdminState>,
) -> Result<Json<ApiResponse<CountDto>>> {
    let count = state.admin.unverified_users_count().await?;
    Ok(Json(ApiResponse::success(
        Some(CountDto { count }),
        None,
        None,
    )))
}

/// Number of listings in the moderation queue (pending + rejected)
#[utoipa::path(
    get,
    path = "/api/admin/moderation-queue",
    responses(
        (status = 200, description = "Moderation queue size", body = ApiResponse<CountDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn moderation_queue_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AdminState>,
) -> Result<Json<ApiResponse<CountDto>>> {
    let count = state.admin.moderation_queue_count().await?;
    Ok(Json(ApiResponse::success(
        Some(CountDto { count }),
        None,
        None,
    )))
}

/// Mark a user as verified
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/verify",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User verified", body = ApiResponse<UserDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn verify_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserDto>>> {
    let user = state.users.set_verified(id, true).await?;
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

/// Revoke a user's verification
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/unverify",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Verification revoked", body = ApiResponse<UserDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn unverify_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserDto>>> {
    let user = state.users.set_verified(id, false).await?;
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

/// Approve every pending listing among the given ids
#[utoipa::path(
    post,
    path = "/api/admin/advertisements/approve",
    request_body = BulkApproveDto,
    responses(
        (status = 200, description = "Listings approved", body = ApiResponse<BulkModerationResultDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn bulk_approve_advertisements(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AdminState>,
    AppJson(dto): AppJson<BulkApproveDto>,
) -> Result<Json<ApiResponse<BulkModerationResultDto>>> {
    let updated = state.admin.bulk_approve(&dto.ids).await?;
    Ok(Json(ApiResponse::success(
        Some(BulkModerationResultDto { updated }),
        None,
        None,
    )))
}

/// Reject every pending listing among the given ids with one shared comment
#[utoipa::path(
    post,
    path = "/api/admin/advertisements/reject",
    request_body = BulkRejectDto,
    responses(
        (status = 200, description = "Listings rejected", body = ApiResponse<BulkModerationResultDto>),
        (status = 400, description = "Empty rejection comment"),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn bulk_reject_advertisements(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AdminState>,
    AppJson(dto): AppJson<BulkRejectDto>,
) -> Result<Json<ApiResponse<BulkModerationResultDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.admin.bulk_reject(&dto.ids, &dto.comment).await?;
    Ok(Json(ApiResponse::success(
        Some(BulkModerationResultDto { updated }),
        None,
        None,
    )))
}
