use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, MaybeUser};
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::marketplace::dtos::{
    AdvertisementListQuery, AdvertisementPayloadDto, AdvertisementResponseDto, RejectRequestDto,
};
use crate::features::marketplace::services::AdvertisementService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List advertisements: guests see only approved active listings,
/// signed-in users additionally see their own in any status
#[utoipa::path(
    get,
    path = "/api/marketplace/advertisements",
    params(AdvertisementListQuery, PaginationQuery),
    responses(
        (status = 200, description = "Listing feed", body = ApiResponse<Vec<AdvertisementResponseDto>>),
    ),
    tag = "marketplace"
)]
pub async fn list_advertisements(
    MaybeUser(viewer): MaybeUser,
    State(service): State<Arc<AdvertisementService>>,
    Query(query): Query<AdvertisementListQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdvertisementResponseDto>>>> {
    let (items, total) = service.list(viewer.as_ref(), &query, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get one advertisement; views are counted for approved listings
#[utoipa::path(
    get,
    path = "/api/marketplace/advertisements/{id}",
    params(("id" = Uuid, Path, description = "Advertisement ID")),
    responses(
        (status = 200, description = "Advertisement found", body = ApiResponse<AdvertisementResponseDto>),
        (status = 404, description = "Advertisement not found or not visible")
    ),
    tag = "marketplace"
)]
pub async fn get_advertisement(
    MaybeUser(viewer): MaybeUser,
    State(service): State<Arc<AdvertisementService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdvertisementResponseDto>>> {
    let ad = service.get(id, viewer.as_ref()).await?;
    Ok(Json(ApiResponse::success(Some(ad), None, None)))
}

/// Submit a new advertisement; it enters the moderation queue as pending
#[utoipa::path(
    post,
    path = "/api/marketplace/advertisements",
    request_body = AdvertisementPayloadDto,
    responses(
        (status = 201, description = "Advertisement submitted", body = ApiResponse<AdvertisementResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn create_advertisement(
    user: AuthenticatedUser,
    State(service): State<Arc<AdvertisementService>>,
    AppJson(dto): AppJson<AdvertisementPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<AdvertisementResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ad = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(ad),
            Some("Объявление отправлено на модерацию".to_string()),
            None,
        )),
    ))
}

/// Edit an own advertisement; any edit sends it back to moderation
#[utoipa::path(
    put,
    path = "/api/marketplace/advertisements/{id}",
    params(("id" = Uuid, Path, description = "Advertisement ID")),
    request_body = AdvertisementPayloadDto,
    responses(
        (status = 200, description = "Advertisement updated", body = ApiResponse<AdvertisementResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Advertisement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn update_advertisement(
    user: AuthenticatedUser,
    State(service): State<Arc<AdvertisementService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AdvertisementPayloadDto>,
) -> Result<Json<ApiResponse<AdvertisementResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ad = service.update(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(ad),
        Some("Объявление обновлено и отправлено на повторную модерацию".to_string()),
        None,
    )))
}

/// Delete an own advertisement
#[utoipa::path(
    delete,
    path = "/api/marketplace/advertisements/{id}",
    params(("id" = Uuid, Path, description = "Advertisement ID")),
    responses(
        (status = 204, description = "Advertisement deleted"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Advertisement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn delete_advertisement(
    user: AuthenticatedUser,
    State(service): State<Arc<AdvertisementService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's own advertisements (all statuses)
#[utoipa::path(
    get,
    path = "/api/marketplace/advertisements/my_ads",
    responses(
        (status = 200, description = "Own advertisements", body = ApiResponse<Vec<AdvertisementResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn my_ads(
    user: AuthenticatedUser,
    State(service): State<Arc<AdvertisementService>>,
) -> Result<Json<ApiResponse<Vec<AdvertisementResponseDto>>>> {
    let ads = service.list_by_author(&user).await?;
    Ok(Json(ApiResponse::success(Some(ads), None, None)))
}

/// Deactivate an own advertisement (hide it from the board)
#[utoipa::path(
    post,
    path = "/api/marketplace/advertisements/{id}/deactivate",
    params(("id" = Uuid, Path, description = "Advertisement ID")),
    responses(
        (status = 200, description = "Advertisement deactivated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Advertisement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn deactivate_advertisement(
    user: AuthenticatedUser,
    State(service): State<Arc<AdvertisementService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Uuid>>> {
    service.deactivate(&user, id).await?;
    Ok(Json(ApiResponse::success(
        Some(id),
        Some("Объявление деактивировано".to_string()),
        None,
    )))
}

/// Approve a pending advertisement (administrators only)
#[utoipa::path(
    post,
    path = "/api/marketplace/advertisements/{id}/approve",
    params(("id" = Uuid, Path, description = "Advertisement ID")),
    responses(
        (status = 200, description = "Advertisement approved", body = ApiResponse<AdvertisementResponseDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Advertisement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn approve_advertisement(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<AdvertisementService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdvertisementResponseDto>>> {
    let ad = service.approve(id).await?;
    Ok(Json(ApiResponse::success(
        Some(ad),
        Some("Объявление одобрено".to_string()),
        None,
    )))
}

/// Reject an advertisement with a mandatory comment (administrators only)
#[utoipa::path(
    post,
    path = "/api/marketplace/advertisements/{id}/reject",
    params(("id" = Uuid, Path, description = "Advertisement ID")),
    request_body = RejectRequestDto,
    responses(
        (status = 200, description = "Advertisement rejected", body = ApiResponse<AdvertisementResponseDto>),
        (status = 400, description = "Empty rejection comment"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Advertisement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "marketplace"
)]
pub async fn reject_advertisement(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<AdvertisementService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<RejectRequestDto>,
) -> Result<Json<ApiResponse<AdvertisementResponseDto>>> {
    let ad = service.reject(id, &dto.comment).await?;
    Ok(Json(ApiResponse::success(
        Some(ad),
        Some("Объявление отклонено".to_string()),
        None,
    )))
}
