use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::church::dtos::{
    AnnouncementPayloadDto, ChurchMediaPayloadDto, PriestPayloadDto, SchedulePayloadDto,
};
use crate::features::church::models::{
    ChurchAnnouncement, ChurchMedia, MediaType, Priest, ServiceSchedule,
};

const PRIEST_COLUMNS: &str = "id, name, title, phone, email, photo_url, biography, \
     is_active, sort_order, created_at, updated_at";

const SCHEDULE_COLUMNS: &str = "id, day_of_week, date, service_name, starts_at, description, \
     is_active, sort_order, created_at, updated_at";

const ANNOUNCEMENT_COLUMNS: &str = "id, title, content, announcement_type, priest_id, \
     is_active, priority, valid_from, valid_until, created_at, updated_at";

const MEDIA_COLUMNS: &str = "id, title, description, media_type, file_url, thumbnail_url, \
     event_date, priest_id, is_published, sort_order, uploaded_by, uploaded_at";

/// Service for the church content collections
pub struct ChurchService {
    pool: PgPool,
}

impl ChurchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // PRIESTS
    // =========================================================================

    /// Active priests in display order; admins also see inactive profiles
    pub async fn list_priests(&self, include_hidden: bool) -> Result<Vec<Priest>> {
        let query = format!(
            "SELECT {PRIEST_COLUMNS} FROM priests
             WHERE $1 OR is_active = TRUE
             ORDER BY sort_order, created_at DESC"
        );

        sqlx::query_as::<_, Priest>(&query)
            .bind(include_hidden)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list priests: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_priest(&self, id: Uuid, include_hidden: bool) -> Result<Priest> {
        let query = format!(
            "SELECT {PRIEST_COLUMNS} FROM priests
             WHERE id = $1 AND ($2 OR is_active = TRUE)"
        );

        sqlx::query_as::<_, Priest>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Priest '{}' not found", id)))
    }

    pub async fn create_priest(&self, dto: PriestPayloadDto) -> Result<Priest> {
        let query = format!(
            "INSERT INTO priests (name, title, phone, email, photo_url, biography, is_active, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {PRIEST_COLUMNS}"
        );

        let priest = sqlx::query_as::<_, Priest>(&query)
            .bind(&dto.name)
            .bind(dto.title.as_deref().unwrap_or("Настоятель храма"))
            .bind(&dto.phone)
            .bind(dto.email)
            .bind(dto.photo_url)
            .bind(dto.biography)
            .bind(dto.is_active)
            .bind(dto.sort_order)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create priest: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Priest created: id={}", priest.id);
        Ok(priest)
    }

    pub async fn update_priest(&self, id: Uuid, dto: PriestPayloadDto) -> Result<Priest> {
        let query = format!(
            "UPDATE priests
             SET name = $2, title = $3, phone = $4, email = $5, photo_url = $6,
                 biography = $7, is_active = $8, sort_order = $9, updated_at = NOW()
             WHERE id = $1
             RETURNING {PRIEST_COLUMNS}"
        );

        sqlx::query_as::<_, Priest>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.title.as_deref().unwrap_or("Настоятель храма"))
            .bind(&dto.phone)
            .bind(dto.email)
            .bind(dto.photo_url)
            .bind(dto.biography)
            .bind(dto.is_active)
            .bind(dto.sort_order)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Priest '{}' not found", id)))
    }

    pub async fn delete_priest(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "priests", id).await
    }

    pub async fn set_priests_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64> {
        set_flag(&self.pool, "priests", "is_active", ids, is_active).await
    }

    // =========================================================================
    // SERVICE SCHEDULE
    // =========================================================================

    /// Schedule ordered by date, weekday, manual order and start time
    pub async fn list_schedule(&self, include_hidden: bool) -> Result<Vec<ServiceSchedule>> {
        let query = format!(
            "SELECT {SCHEDULE_COLUMNS} FROM service_schedules
             WHERE $1 OR is_active = TRUE
             ORDER BY date, day_of_week, sort_order, starts_at"
        );

        sqlx::query_as::<_, ServiceSchedule>(&query)
            .bind(include_hidden)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list service schedule: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_schedule_entry(
        &self,
        id: Uuid,
        include_hidden: bool,
    ) -> Result<ServiceSchedule> {
        let query = format!(
            "SELECT {SCHEDULE_COLUMNS} FROM service_schedules
             WHERE id = $1 AND ($2 OR is_active = TRUE)"
        );

        sqlx::query_as::<_, ServiceSchedule>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Schedule entry '{}' not found", id)))
    }

    pub async fn create_schedule_entry(&self, dto: SchedulePayloadDto) -> Result<ServiceSchedule> {
        let query = format!(
            "INSERT INTO service_schedules
                 (day_of_week, date, service_name, starts_at, description, is_active, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SCHEDULE_COLUMNS}"
        );

        let entry = sqlx::query_as::<_, ServiceSchedule>(&query)
            .bind(dto.day_of_week)
            .bind(dto.date)
            .bind(&dto.service_name)
            .bind(dto.starts_at)
            .bind(dto.description)
            .bind(dto.is_active)
            .bind(dto.sort_order)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create schedule entry: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Schedule entry created: id={}", entry.id);
        Ok(entry)
    }

    pub async fn update_schedule_entry(
        &self,
        id: Uuid,
        dto: SchedulePayloadDto,
    ) -> Result<ServiceSchedule> {
        let query = format!(
            "UPDATE service_schedules
             SET day_of_week = $2, date = $3, service_name = $4, starts_at = $5,
                 description = $6, is_active = $7, sort_order = $8, updated_at = NOW()
             WHERE id = $1
             RETURNING {SCHEDULE_COLUMNS}"
        );

        sqlx::query_as::<_, ServiceSchedule>(&query)
            .bind(id)
            .bind(dto.day_of_week)
            .bind(dto.date)
            .bind(&dto.service_name)
            .bind(dto.starts_at)
            .bind(dto.description)
            .bind(dto.is_active)
            .bind(dto.sort_order)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Schedule entry '{}' not found", id)))
    }

    pub async fn delete_schedule_entry(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "service_schedules", id).await
    }

    pub async fn set_schedule_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64> {
        set_flag(&self.pool, "service_schedules", "is_active", ids, is_active).await
    }

    // =========================================================================
    // ANNOUNCEMENTS
    // =========================================================================

    /// Active announcements inside their validity window, most urgent first.
    /// Admins see everything, including expired and inactive entries.
    pub async fn list_announcements(
        &self,
        include_hidden: bool,
    ) -> Result<Vec<ChurchAnnouncement>> {
        let query = format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM church_announcements
             WHERE $1 OR (is_active = TRUE
                          AND valid_from <= NOW()
                          AND (valid_until IS NULL OR valid_until >= NOW()))
             ORDER BY priority DESC, created_at DESC"
        );

        sqlx::query_as::<_, ChurchAnnouncement>(&query)
            .bind(include_hidden)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list announcements: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_announcement(
        &self,
        id: Uuid,
        include_hidden: bool,
    ) -> Result<ChurchAnnouncement> {
        let query = format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM church_announcements
             WHERE id = $1
               AND ($2 OR (is_active = TRUE
                           AND valid_from <= NOW()
                           AND (valid_until IS NULL OR valid_until >= NOW())))"
        );

        sqlx::query_as::<_, ChurchAnnouncement>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Announcement '{}' not found", id)))
    }

    pub async fn create_announcement(
        &self,
        dto: AnnouncementPayloadDto,
    ) -> Result<ChurchAnnouncement> {
        let query = format!(
            "INSERT INTO church_announcements
                 (title, content, announcement_type, priest_id, is_active, priority,
                  valid_from, valid_until)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8)
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );

        let announcement = sqlx::query_as::<_, ChurchAnnouncement>(&query)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.announcement_type)
            .bind(dto.priest_id)
            .bind(dto.is_active)
            .bind(dto.priority)
            .bind(dto.valid_from)
            .bind(dto.valid_until)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create announcement: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Announcement created: id={}", announcement.id);
        Ok(announcement)
    }

    pub async fn update_announcement(
        &self,
        id: Uuid,
        dto: AnnouncementPayloadDto,
    ) -> Result<ChurchAnnouncement> {
        let query = format!(
            "UPDATE church_announcements
             SET title = $2, content = $3, announcement_type = $4, priest_id = $5,
                 is_active = $6, priority = $7, valid_from = COALESCE($8, valid_from),
                 valid_until = $9, updated_at = NOW()
             WHERE id = $1
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );

        sqlx::query_as::<_, ChurchAnnouncement>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.announcement_type)
            .bind(dto.priest_id)
            .bind(dto.is_active)
            .bind(dto.priority)
            .bind(dto.valid_from)
            .bind(dto.valid_until)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Announcement '{}' not found", id)))
    }

    pub async fn delete_announcement(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "church_announcements", id).await
    }

    pub async fn set_announcements_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64> {
        set_flag(&self.pool, "church_announcements", "is_active", ids, is_active).await
    }

    // =========================================================================
    // MEDIA
    // =========================================================================

    /// Published gallery items, newest events first
    pub async fn list_media(
        &self,
        include_hidden: bool,
        media_type: Option<MediaType>,
    ) -> Result<Vec<ChurchMedia>> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM church_media
             WHERE ($1 OR is_published = TRUE)
               AND ($2::media_type IS NULL OR media_type = $2)
             ORDER BY event_date DESC, sort_order DESC"
        );

        sqlx::query_as::<_, ChurchMedia>(&query)
            .bind(include_hidden)
            .bind(media_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list church media: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_media(&self, id: Uuid, include_hidden: bool) -> Result<ChurchMedia> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM church_media
             WHERE id = $1 AND ($2 OR is_published = TRUE)"
        );

        sqlx::query_as::<_, ChurchMedia>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Media item '{}' not found", id)))
    }

    pub async fn create_media(
        &self,
        uploaded_by: Uuid,
        dto: ChurchMediaPayloadDto,
    ) -> Result<ChurchMedia> {
        let query = format!(
            "INSERT INTO church_media
                 (title, description, media_type, file_url, thumbnail_url, event_date,
                  priest_id, is_published, sort_order, uploaded_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {MEDIA_COLUMNS}"
        );

        let media = sqlx::query_as::<_, ChurchMedia>(&query)
            .bind(&dto.title)
            .bind(dto.description)
            .bind(dto.media_type)
            .bind(&dto.file_url)
            .bind(dto.thumbnail_url)
            .bind(dto.event_date)
            .bind(dto.priest_id)
            .bind(dto.is_published)
            .bind(dto.sort_order)
            .bind(uploaded_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create church media: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Church media created: id={}", media.id);
        Ok(media)
    }

    pub async fn update_media(&self, id: Uuid, dto: ChurchMediaPayloadDto) -> Result<ChurchMedia> {
        let query = format!(
            "UPDATE church_media
             SET title = $2, description = $3, media_type = $4, file_url = $5,
                 thumbnail_url = $6, event_date = $7, priest_id = $8,
                 is_published = $9, sort_order = $10
             WHERE id = $1
             RETURNING {MEDIA_COLUMNS}"
        );

        sqlx::query_as::<_, ChurchMedia>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(dto.description)
            .bind(dto.media_type)
            .bind(&dto.file_url)
            .bind(dto.thumbnail_url)
            .bind(dto.event_date)
            .bind(dto.priest_id)
            .bind(dto.is_published)
            .bind(dto.sort_order)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Media item '{}' not found", id)))
    }

    pub async fn delete_media(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "church_media", id).await
    }

    pub async fn set_media_published(&self, ids: &[Uuid], is_published: bool) -> Result<u64> {
        set_flag(&self.pool, "church_media", "is_published", ids, is_published).await
    }
}

/// Delete one row, mapping a missing id to NotFound
async fn delete_by_id(pool: &PgPool, table: &str, id: Uuid) -> Result<()> {
    let query = format!("DELETE FROM {table} WHERE id = $1");

    let result = sqlx::query(&query)
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::Database)?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Record '{}' not found in {}",
            id, table
        )));
    }

    tracing::info!("Deleted from {}: id={}", table, id);
    Ok(())
}

/// Bulk visibility toggle shared by the content collections
async fn set_flag(
    pool: &PgPool,
    table: &str,
    column: &str,
    ids: &[Uuid],
    value: bool,
) -> Result<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let query = format!("UPDATE {table} SET {column} = $2 WHERE id = ANY($1)");

    let result = sqlx::query(&query)
        .bind(ids)
        .bind(value)
        .execute(pool)
        .await
        .map_err(AppError::Database)?;

    tracing::info!(
        "Bulk update on {}: {} = {} for {} row(s)",
        table,
        column,
        value,
        result.rows_affected()
    );

    Ok(result.rows_affected())
}
