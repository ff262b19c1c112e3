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
use crate::features::church::models::MediaType;
use crate::features::community::dtos::{
    BulkActivateDto, BulkPublishDto, CommunityMediaDto, CommunityMediaPayloadDto,
    CommunityMediaQuery, NewsItemDto, NewsItemPayloadDto, UsefulPhoneDto, UsefulPhonePayloadDto,
};
use crate::features::community::models::NewsType;
use crate::features::community::services::CommunityService;
use crate::shared::types::ApiResponse;

fn is_admin(viewer: &MaybeUser) -> bool {
    viewer.0.as_ref().is_some_and(|u| u.is_admin)
}

// =============================================================================
// NEWS
// =============================================================================

/// List the news feed (both kinds)
#[utoipa::path(
    get,
    path = "/api/community/news-items",
    responses(
        (status = 200, description = "News feed", body = ApiResponse<Vec<NewsItemDto>>),
    ),
    tag = "community"
)]
pub async fn list_news_items(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
) -> Result<Json<ApiResponse<Vec<NewsItemDto>>>> {
    let items = service.list_news(is_admin(&viewer), None, None).await?;
    Ok(Json(ApiResponse::success(
        Some(items.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Front-page news (top 5)
#[utoipa::path(
    get,
    path = "/api/community/news-items/news",
    responses(
        (status = 200, description = "Latest news", body = ApiResponse<Vec<NewsItemDto>>),
    ),
    tag = "community"
)]
pub async fn front_page_news(
    State(service): State<Arc<CommunityService>>,
) -> Result<Json<ApiResponse<Vec<NewsItemDto>>>> {
    let items = service.front_page_news(NewsType::News).await?;
    Ok(Json(ApiResponse::success(
        Some(items.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Front-page important information (top 5)
#[utoipa::path(
    get,
    path = "/api/community/news-items/important",
    responses(
        (status = 200, description = "Important information", body = ApiResponse<Vec<NewsItemDto>>),
    ),
    tag = "community"
)]
pub async fn front_page_important(
    State(service): State<Arc<CommunityService>>,
) -> Result<Json<ApiResponse<Vec<NewsItemDto>>>> {
    let items = service.front_page_news(NewsType::Important).await?;
    Ok(Json(ApiResponse::success(
        Some(items.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Get one feed entry
#[utoipa::path(
    get,
    path = "/api/community/news-items/{id}",
    params(("id" = Uuid, Path, description = "News item ID")),
    responses(
        (status = 200, description = "News item found", body = ApiResponse<NewsItemDto>),
        (status = 404, description = "News item not found")
    ),
    tag = "community"
)]
pub async fn get_news_item(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NewsItemDto>>> {
    let item = service.get_news_item(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(Some(item.into()), None, None)))
}

/// Create a feed entry (administrators only)
#[utoipa::path(
    post,
    path = "/api/community/news-items",
    request_body = NewsItemPayloadDto,
    responses(
        (status = 201, description = "News item created", body = ApiResponse<NewsItemDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn create_news_item(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    AppJson(dto): AppJson<NewsItemPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<NewsItemDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.create_news_item(admin.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(item.into()), None, None)),
    ))
}

/// Replace a feed entry (administrators only)
#[utoipa::path(
    put,
    path = "/api/community/news-items/{id}",
    params(("id" = Uuid, Path, description = "News item ID")),
    request_body = NewsItemPayloadDto,
    responses(
        (status = 200, description = "News item updated", body = ApiResponse<NewsItemDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "News item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn update_news_item(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<NewsItemPayloadDto>,
) -> Result<Json<ApiResponse<NewsItemDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.update_news_item(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(item.into()), None, None)))
}

/// Delete a feed entry (administrators only)
#[utoipa::path(
    delete,
    path = "/api/community/news-items/{id}",
    params(("id" = Uuid, Path, description = "News item ID")),
    responses(
        (status = 204, description = "News item deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "News item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn delete_news_item(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_news_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk show/hide feed entries (administrators only)
#[utoipa::path(
    post,
    path = "/api/community/news-items/set-active",
    request_body = BulkActivateDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn set_news_active(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    AppJson(dto): AppJson<BulkActivateDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service.set_news_active(&dto.ids, dto.is_active).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

// =============================================================================
// MEDIA
// =============================================================================

/// List the community gallery
#[utoipa::path(
    get,
    path = "/api/community/media",
    params(CommunityMediaQuery),
    responses(
        (status = 200, description = "Published media", body = ApiResponse<Vec<CommunityMediaDto>>),
    ),
    tag = "community"
)]
pub async fn list_community_media(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
    Query(filter): Query<CommunityMediaQuery>,
) -> Result<Json<ApiResponse<Vec<CommunityMediaDto>>>> {
    let media = service
        .list_media(is_admin(&viewer), filter.media_type, filter.village)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(media.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Only photos from the community gallery
#[utoipa::path(
    get,
    path = "/api/community/media/photos",
    params(CommunityMediaQuery),
    responses(
        (status = 200, description = "Published photos", body = ApiResponse<Vec<CommunityMediaDto>>),
    ),
    tag = "community"
)]
pub async fn community_media_photos(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
    Query(filter): Query<CommunityMediaQuery>,
) -> Result<Json<ApiResponse<Vec<CommunityMediaDto>>>> {
    let media = service
        .list_media(is_admin(&viewer), Some(MediaType::Photo), filter.village)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(media.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Only videos from the community gallery
#[utoipa::path(
    get,
    path = "/api/community/media/videos",
    params(CommunityMediaQuery),
    responses(
        (status = 200, description = "Published videos", body = ApiResponse<Vec<CommunityMediaDto>>),
    ),
    tag = "community"
)]
pub async fn community_media_videos(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
    Query(filter): Query<CommunityMediaQuery>,
) -> Result<Json<ApiResponse<Vec<CommunityMediaDto>>>> {
    let media = service
        .list_media(is_admin(&viewer), Some(MediaType::Video), filter.village)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(media.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Get one gallery item
#[utoipa::path(
    get,
    path = "/api/community/media/{id}",
    params(("id" = Uuid, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Media item found", body = ApiResponse<CommunityMediaDto>),
        (status = 404, description = "Media item not found")
    ),
    tag = "community"
)]
pub async fn get_community_media(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CommunityMediaDto>>> {
    let media = service.get_media(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(Some(media.into()), None, None)))
}

/// Add a gallery item (administrators only)
#[utoipa::path(
    post,
    path = "/api/community/media",
    request_body = CommunityMediaPayloadDto,
    responses(
        (status = 201, description = "Media item created", body = ApiResponse<CommunityMediaDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn create_community_media(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    AppJson(dto): AppJson<CommunityMediaPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommunityMediaDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let media = service.create_media(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(media.into()), None, None)),
    ))
}

/// Replace a gallery item (administrators only)
#[utoipa::path(
    put,
    path = "/api/community/media/{id}",
    params(("id" = Uuid, Path, description = "Media ID")),
    request_body = CommunityMediaPayloadDto,
    responses(
        (status = 200, description = "Media item updated", body = ApiResponse<CommunityMediaDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Media item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn update_community_media(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CommunityMediaPayloadDto>,
) -> Result<Json<ApiResponse<CommunityMediaDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let media = service.update_media(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(media.into()), None, None)))
}

/// Delete a gallery item (administrators only)
#[utoipa::path(
    delete,
    path = "/api/community/media/{id}",
    params(("id" = Uuid, Path, description = "Media ID")),
    responses(
        (status = 204, description = "Media item deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Media item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn delete_community_media(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_media(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk publish/unpublish gallery items (administrators only)
#[utoipa::path(
    post,
    path = "/api/community/media/set-published",
    request_body = BulkPublishDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn set_community_media_published(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    AppJson(dto): AppJson<BulkPublishDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service.set_media_published(&dto.ids, dto.is_published).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

// =============================================================================
// USEFUL PHONES
// =============================================================================

/// List the phone directory
#[utoipa::path(
    get,
    path = "/api/community/useful-phones",
    responses(
        (status = 200, description = "Phone directory", body = ApiResponse<Vec<UsefulPhoneDto>>),
    ),
    tag = "community"
)]
pub async fn list_useful_phones(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
) -> Result<Json<ApiResponse<Vec<UsefulPhoneDto>>>> {
    let phones = service.list_phones(is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(
        Some(phones.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Get one directory entry
#[utoipa::path(
    get,
    path = "/api/community/useful-phones/{id}",
    params(("id" = Uuid, Path, description = "Phone entry ID")),
    responses(
        (status = 200, description = "Phone entry found", body = ApiResponse<UsefulPhoneDto>),
        (status = 404, description = "Phone entry not found")
    ),
    tag = "community"
)]
pub async fn get_useful_phone(
    viewer: MaybeUser,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UsefulPhoneDto>>> {
    let phone = service.get_phone(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(Some(phone.into()), None, None)))
}

/// Create a directory entry (administrators only)
#[utoipa::path(
    post,
    path = "/api/community/useful-phones",
    request_body = UsefulPhonePayloadDto,
    responses(
        (status = 201, description = "Phone entry created", body = ApiResponse<UsefulPhoneDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn create_useful_phone(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    AppJson(dto): AppJson<UsefulPhonePayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<UsefulPhoneDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let phone = service.create_phone(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(phone.into()), None, None)),
    ))
}

/// Replace a directory entry (administrators only)
#[utoipa::path(
    put,
    path = "/api/community/useful-phones/{id}",
    params(("id" = Uuid, Path, description = "Phone entry ID")),
    request_body = UsefulPhonePayloadDto,
    responses(
        (status = 200, description = "Phone entry updated", body = ApiResponse<UsefulPhoneDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Phone entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn update_useful_phone(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UsefulPhonePayloadDto>,
) -> Result<Json<ApiResponse<UsefulPhoneDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let phone = service.update_phone(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(phone.into()), None, None)))
}

/// Delete a directory entry (administrators only)
#[utoipa::path(
    delete,
    path = "/api/community/useful-phones/{id}",
    params(("id" = Uuid, Path, description = "Phone entry ID")),
    responses(
        (status = 204, description = "Phone entry deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Phone entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn delete_useful_phone(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_phone(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk show/hide directory entries (administrators only)
#[utoipa::path(
    post,
    path = "/api/community/useful-phones/set-active",
    request_body = BulkActivateDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "community"
)]
pub async fn set_useful_phones_active(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CommunityService>>,
    AppJson(dto): AppJson<BulkActivateDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service.set_phones_active(&dto.ids, dto.is_active).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}
