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
use crate::features::church::dtos::{
    AnnouncementPayloadDto, BulkActivateDto, BulkPublishDto, ChurchAnnouncementDto,
    ChurchMediaDto, ChurchMediaPayloadDto, MediaFilterQuery, PriestDto, PriestPayloadDto,
    SchedulePayloadDto, ServiceScheduleDto,
};
use crate::features::church::models::MediaType;
use crate::features::church::services::ChurchService;
use crate::shared::types::ApiResponse;

fn is_admin(viewer: &MaybeUser) -> bool {
    viewer.0.as_ref().is_some_and(|u| u.is_admin)
}

// =============================================================================
// PRIESTS
// =============================================================================

/// List priests
#[utoipa::path(
    get,
    path = "/api/church/priests",
    responses(
        (status = 200, description = "Priests in display order", body = ApiResponse<Vec<PriestDto>>),
    ),
    tag = "church"
)]
pub async fn list_priests(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
) -> Result<Json<ApiResponse<Vec<PriestDto>>>> {
    let priests = service.list_priests(is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(
        Some(priests.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Get a priest profile
#[utoipa::path(
    get,
    path = "/api/church/priests/{id}",
    params(("id" = Uuid, Path, description = "Priest ID")),
    responses(
        (status = 200, description = "Priest found", body = ApiResponse<PriestDto>),
        (status = 404, description = "Priest not found")
    ),
    tag = "church"
)]
pub async fn get_priest(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PriestDto>>> {
    let priest = service.get_priest(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(Some(priest.into()), None, None)))
}

/// Create a priest profile (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/priests",
    request_body = PriestPayloadDto,
    responses(
        (status = 201, description = "Priest created", body = ApiResponse<PriestDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn create_priest(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<PriestPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<PriestDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let priest = service.create_priest(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(priest.into()), None, None)),
    ))
}

/// Replace a priest profile (administrators only)
#[utoipa::path(
    put,
    path = "/api/church/priests/{id}",
    params(("id" = Uuid, Path, description = "Priest ID")),
    request_body = PriestPayloadDto,
    responses(
        (status = 200, description = "Priest updated", body = ApiResponse<PriestDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Priest not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn update_priest(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<PriestPayloadDto>,
) -> Result<Json<ApiResponse<PriestDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let priest = service.update_priest(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(priest.into()), None, None)))
}

/// Delete a priest profile (administrators only)
#[utoipa::path(
    delete,
    path = "/api/church/priests/{id}",
    params(("id" = Uuid, Path, description = "Priest ID")),
    responses(
        (status = 204, description = "Priest deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Priest not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn delete_priest(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_priest(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk show/hide priests (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/priests/set-active",
    request_body = BulkActivateDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn set_priests_active(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<BulkActivateDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service.set_priests_active(&dto.ids, dto.is_active).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

// =============================================================================
// SERVICE SCHEDULE
// =============================================================================

/// List the service schedule
#[utoipa::path(
    get,
    path = "/api/church/schedule",
    responses(
        (status = 200, description = "Service schedule", body = ApiResponse<Vec<ServiceScheduleDto>>),
    ),
    tag = "church"
)]
pub async fn list_schedule(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
) -> Result<Json<ApiResponse<Vec<ServiceScheduleDto>>>> {
    let entries = service.list_schedule(is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(
        Some(entries.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Get one schedule entry
#[utoipa::path(
    get,
    path = "/api/church/schedule/{id}",
    params(("id" = Uuid, Path, description = "Schedule entry ID")),
    responses(
        (status = 200, description = "Schedule entry found", body = ApiResponse<ServiceScheduleDto>),
        (status = 404, description = "Schedule entry not found")
    ),
    tag = "church"
)]
pub async fn get_schedule_entry(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ServiceScheduleDto>>> {
    let entry = service.get_schedule_entry(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(Some(entry.into()), None, None)))
}

/// Create a schedule entry (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/schedule",
    request_body = SchedulePayloadDto,
    responses(
        (status = 201, description = "Schedule entry created", body = ApiResponse<ServiceScheduleDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn create_schedule_entry(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<SchedulePayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceScheduleDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = service.create_schedule_entry(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(entry.into()), None, None)),
    ))
}

/// Replace a schedule entry (administrators only)
#[utoipa::path(
    put,
    path = "/api/church/schedule/{id}",
    params(("id" = Uuid, Path, description = "Schedule entry ID")),
    request_body = SchedulePayloadDto,
    responses(
        (status = 200, description = "Schedule entry updated", body = ApiResponse<ServiceScheduleDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Schedule entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn update_schedule_entry(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SchedulePayloadDto>,
) -> Result<Json<ApiResponse<ServiceScheduleDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = service.update_schedule_entry(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(entry.into()), None, None)))
}

/// Delete a schedule entry (administrators only)
#[utoipa::path(
    delete,
    path = "/api/church/schedule/{id}",
    params(("id" = Uuid, Path, description = "Schedule entry ID")),
    responses(
        (status = 204, description = "Schedule entry deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Schedule entry not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn delete_schedule_entry(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_schedule_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk show/hide schedule entries (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/schedule/set-active",
    request_body = BulkActivateDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn set_schedule_active(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<BulkActivateDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service.set_schedule_active(&dto.ids, dto.is_active).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

/// List current announcements from the priest
#[utoipa::path(
    get,
    path = "/api/church/announcements",
    responses(
        (status = 200, description = "Current announcements", body = ApiResponse<Vec<ChurchAnnouncementDto>>),
    ),
    tag = "church"
)]
pub async fn list_announcements(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
) -> Result<Json<ApiResponse<Vec<ChurchAnnouncementDto>>>> {
    let announcements = service.list_announcements(is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(
        Some(announcements.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Get one announcement
#[utoipa::path(
    get,
    path = "/api/church/announcements/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement found", body = ApiResponse<ChurchAnnouncementDto>),
        (status = 404, description = "Announcement not found")
    ),
    tag = "church"
)]
pub async fn get_announcement(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChurchAnnouncementDto>>> {
    let announcement = service.get_announcement(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(
        Some(announcement.into()),
        None,
        None,
    )))
}

/// Create an announcement (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/announcements",
    request_body = AnnouncementPayloadDto,
    responses(
        (status = 201, description = "Announcement created", body = ApiResponse<ChurchAnnouncementDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn create_announcement(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<AnnouncementPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<ChurchAnnouncementDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let announcement = service.create_announcement(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(announcement.into()), None, None)),
    ))
}

/// Replace an announcement (administrators only)
#[utoipa::path(
    put,
    path = "/api/church/announcements/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    request_body = AnnouncementPayloadDto,
    responses(
        (status = 200, description = "Announcement updated", body = ApiResponse<ChurchAnnouncementDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Announcement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn update_announcement(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AnnouncementPayloadDto>,
) -> Result<Json<ApiResponse<ChurchAnnouncementDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let announcement = service.update_announcement(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(announcement.into()),
        None,
        None,
    )))
}

/// Delete an announcement (administrators only)
#[utoipa::path(
    delete,
    path = "/api/church/announcements/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Announcement not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn delete_announcement(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_announcement(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk show/hide announcements (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/announcements/set-active",
    request_body = BulkActivateDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn set_announcements_active(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<BulkActivateDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service
        .set_announcements_active(&dto.ids, dto.is_active)
        .await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

// =============================================================================
// MEDIA
// =============================================================================

/// List the church gallery
#[utoipa::path(
    get,
    path = "/api/church/media",
    params(MediaFilterQuery),
    responses(
        (status = 200, description = "Published media", body = ApiResponse<Vec<ChurchMediaDto>>),
    ),
    tag = "church"
)]
pub async fn list_church_media(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
    Query(filter): Query<MediaFilterQuery>,
) -> Result<Json<ApiResponse<Vec<ChurchMediaDto>>>> {
    let media = service
        .list_media(is_admin(&viewer), filter.media_type)
        .await?;
    Ok(Json(ApiResponse::success(
        Some(media.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Only photos from the church gallery
#[utoipa::path(
    get,
    path = "/api/church/media/photos",
    responses(
        (status = 200, description = "Published photos", body = ApiResponse<Vec<ChurchMediaDto>>),
    ),
    tag = "church"
)]
pub async fn church_media_photos(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
) -> Result<Json<ApiResponse<Vec<ChurchMediaDto>>>> {
    let media = service
        .list_media(is_admin(&viewer), Some(MediaType::Photo))
        .await?;
    Ok(Json(ApiResponse::success(
        Some(media.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Only videos from the church gallery
#[utoipa::path(
    get,
    path = "/api/church/media/videos",
    responses(
        (status = 200, description = "Published videos", body = ApiResponse<Vec<ChurchMediaDto>>),
    ),
    tag = "church"
)]
pub async fn church_media_videos(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
) -> Result<Json<ApiResponse<Vec<ChurchMediaDto>>>> {
    let media = service
        .list_media(is_admin(&viewer), Some(MediaType::Video))
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
    path = "/api/church/media/{id}",
    params(("id" = Uuid, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Media item found", body = ApiResponse<ChurchMediaDto>),
        (status = 404, description = "Media item not found")
    ),
    tag = "church"
)]
pub async fn get_church_media(
    viewer: MaybeUser,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChurchMediaDto>>> {
    let media = service.get_media(id, is_admin(&viewer)).await?;
    Ok(Json(ApiResponse::success(Some(media.into()), None, None)))
}

/// Add a gallery item (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/media",
    request_body = ChurchMediaPayloadDto,
    responses(
        (status = 201, description = "Media item created", body = ApiResponse<ChurchMediaDto>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn create_church_media(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<ChurchMediaPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<ChurchMediaDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let media = service.create_media(admin.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(media.into()), None, None)),
    ))
}

/// Replace a gallery item (administrators only)
#[utoipa::path(
    put,
    path = "/api/church/media/{id}",
    params(("id" = Uuid, Path, description = "Media ID")),
    request_body = ChurchMediaPayloadDto,
    responses(
        (status = 200, description = "Media item updated", body = ApiResponse<ChurchMediaDto>),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Media item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn update_church_media(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ChurchMediaPayloadDto>,
) -> Result<Json<ApiResponse<ChurchMediaDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let media = service.update_media(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(media.into()), None, None)))
}

/// Delete a gallery item (administrators only)
#[utoipa::path(
    delete,
    path = "/api/church/media/{id}",
    params(("id" = Uuid, Path, description = "Media ID")),
    responses(
        (status = 204, description = "Media item deleted"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Media item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn delete_church_media(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete_media(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk publish/unpublish gallery items (administrators only)
#[utoipa::path(
    post,
    path = "/api/church/media/set-published",
    request_body = BulkPublishDto,
    responses(
        (status = 200, description = "Number of updated rows", body = ApiResponse<u64>),
        (status = 403, description = "Administrator access required")
    ),
    security(("bearer_auth" = [])),
    tag = "church"
)]
pub async fn set_church_media_published(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ChurchService>>,
    AppJson(dto): AppJson<BulkPublishDto>,
) -> Result<Json<ApiResponse<u64>>> {
    let updated = service.set_media_published(&dto.ids, dto.is_published).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}
