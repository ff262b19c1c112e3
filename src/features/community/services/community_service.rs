use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::church::models::MediaType;
use crate::features::community::dtos::{
    CommunityMediaPayloadDto, NewsItemPayloadDto, UsefulPhonePayloadDto,
};
use crate::features::community::models::{CommunityMedia, MediaVillage, NewsItem, UsefulPhone};
use crate::features::community::models::NewsType;
use crate::shared::constants::FRONT_PAGE_NEWS_LIMIT;

const NEWS_COLUMNS: &str = "id, title, content, news_type, is_active, priority, author_id, \
     published_at, created_at, updated_at";

const MEDIA_COLUMNS: &str = "id, title, description, media_type, file_url, thumbnail_url, \
     sort_order, is_published, village, uploaded_at";

const PHONE_COLUMNS: &str = "id, name, phone, category, description, is_active, sort_order, \
     created_at, updated_at";

/// Service for the community content collections
pub struct CommunityService {
    pool: PgPool,
}

impl CommunityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // NEWS
    // =========================================================================

    /// Active feed entries, highest priority first, then newest publications
    pub async fn list_news(
        &self,
        include_hidden: bool,
        news_type: Option<NewsType>,
        limit: Option<i64>,
    ) -> Result<Vec<NewsItem>> {
        let query = format!(
            "SELECT {NEWS_COLUMNS} FROM news_items
             WHERE ($1 OR is_active = TRUE)
               AND ($2::news_type IS NULL OR news_type = $2)
             ORDER BY priority DESC, published_at DESC NULLS LAST
             LIMIT $3"
        );

        sqlx::query_as::<_, NewsItem>(&query)
            .bind(include_hidden)
            .bind(news_type)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list news items: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Front-page slice of one feed type (5 entries)
    pub async fn front_page_news(&self, news_type: NewsType) -> Result<Vec<NewsItem>> {
        self.list_news(false, Some(news_type), Some(FRONT_PAGE_NEWS_LIMIT))
            .await
    }

    pub async fn get_news_item(&self, id: Uuid, include_hidden: bool) -> Result<NewsItem> {
        let query = format!(
            "SELECT {NEWS_COLUMNS} FROM news_items
             WHERE id = $1 AND ($2 OR is_active = TRUE)"
        );

        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("News item '{}' not found", id)))
    }

    /// Create a feed entry; an active entry gets its publication date stamped
    pub async fn create_news_item(
        &self,
        author_id: Uuid,
        dto: NewsItemPayloadDto,
    ) -> Result<NewsItem> {
        let query = format!(
            "INSERT INTO news_items (title, content, news_type, is_active, priority, author_id,
                                     published_at)
             VALUES ($1, $2, $3, $4, $5, $6, CASE WHEN $4 THEN NOW() END)
             RETURNING {NEWS_COLUMNS}"
        );

        let item = sqlx::query_as::<_, NewsItem>(&query)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.news_type)
            .bind(dto.is_active)
            .bind(dto.priority)
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create news item: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("News item created: id={}", item.id);
        Ok(item)
    }

    /// Replace a feed entry. First activation stamps `published_at`;
    /// later edits keep the original publication date.
    pub async fn update_news_item(&self, id: Uuid, dto: NewsItemPayloadDto) -> Result<NewsItem> {
        let query = format!(
            "UPDATE news_items
             SET title = $2, content = $3, news_type = $4, is_active = $5, priority = $6,
                 published_at = CASE WHEN $5 AND published_at IS NULL THEN NOW()
                                     ELSE published_at END,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {NEWS_COLUMNS}"
        );

        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.news_type)
            .bind(dto.is_active)
            .bind(dto.priority)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("News item '{}' not found", id)))
    }

    pub async fn delete_news_item(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "news_items", id).await
    }

    /// Bulk toggle; activating entries stamps missing publication dates
    pub async fn set_news_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "UPDATE news_items
             SET is_active = $2,
                 published_at = CASE WHEN $2 AND published_at IS NULL THEN NOW()
                                     ELSE published_at END,
                 updated_at = NOW()
             WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(is_active)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!(
            "Bulk news toggle: is_active = {} for {} row(s)",
            is_active,
            result.rows_affected()
        );

        Ok(result.rows_affected())
    }

    // =========================================================================
    // MEDIA
    // =========================================================================

    /// Published gallery items in manual order, newest uploads first
    pub async fn list_media(
        &self,
        include_hidden: bool,
        media_type: Option<MediaType>,
        village: Option<MediaVillage>,
    ) -> Result<Vec<CommunityMedia>> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM community_media
             WHERE ($1 OR is_published = TRUE)
               AND ($2::media_type IS NULL OR media_type = $2)
               AND ($3::media_village IS NULL OR village = $3)
             ORDER BY sort_order, uploaded_at DESC"
        );

        sqlx::query_as::<_, CommunityMedia>(&query)
            .bind(include_hidden)
            .bind(media_type)
            .bind(village)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list community media: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_media(&self, id: Uuid, include_hidden: bool) -> Result<CommunityMedia> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM community_media
             WHERE id = $1 AND ($2 OR is_published = TRUE)"
        );

        sqlx::query_as::<_, CommunityMedia>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Media item '{}' not found", id)))
    }

    pub async fn create_media(&self, dto: CommunityMediaPayloadDto) -> Result<CommunityMedia> {
        let query = format!(
            "INSERT INTO community_media
                 (title, description, media_type, file_url, thumbnail_url, sort_order,
                  is_published, village)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {MEDIA_COLUMNS}"
        );

        let media = sqlx::query_as::<_, CommunityMedia>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.media_type)
            .bind(&dto.file_url)
            .bind(dto.thumbnail_url)
            .bind(dto.sort_order)
            .bind(dto.is_published)
            .bind(dto.village)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create community media: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Community media created: id={}", media.id);
        Ok(media)
    }

    pub async fn update_media(
        &self,
        id: Uuid,
        dto: CommunityMediaPayloadDto,
    ) -> Result<CommunityMedia> {
        let query = format!(
            "UPDATE community_media
             SET title = $2, description = $3, media_type = $4, file_url = $5,
                 thumbnail_url = $6, sort_order = $7, is_published = $8, village = $9
             WHERE id = $1
             RETURNING {MEDIA_COLUMNS}"
        );

        sqlx::query_as::<_, CommunityMedia>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.media_type)
            .bind(&dto.file_url)
            .bind(dto.thumbnail_url)
            .bind(dto.sort_order)
            .bind(dto.is_published)
            .bind(dto.village)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Media item '{}' not found", id)))
    }

    pub async fn delete_media(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "community_media", id).await
    }

    pub async fn set_media_published(&self, ids: &[Uuid], is_published: bool) -> Result<u64> {
        set_flag(&self.pool, "community_media", "is_published", ids, is_published).await
    }

    // =========================================================================
    // USEFUL PHONES
    // =========================================================================

    /// Directory in manual order, then by category and name
    pub async fn list_phones(&self, include_hidden: bool) -> Result<Vec<UsefulPhone>> {
        let query = format!(
            "SELECT {PHONE_COLUMNS} FROM useful_phones
             WHERE $1 OR is_active = TRUE
             ORDER BY sort_order, category, name"
        );

        sqlx::query_as::<_, UsefulPhone>(&query)
            .bind(include_hidden)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list useful phones: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_phone(&self, id: Uuid, include_hidden: bool) -> Result<UsefulPhone> {
        let query = format!(
            "SELECT {PHONE_COLUMNS} FROM useful_phones
             WHERE id = $1 AND ($2 OR is_active = TRUE)"
        );

        sqlx::query_as::<_, UsefulPhone>(&query)
            .bind(id)
            .bind(include_hidden)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Phone entry '{}' not found", id)))
    }

    pub async fn create_phone(&self, dto: UsefulPhonePayloadDto) -> Result<UsefulPhone> {
        let query = format!(
            "INSERT INTO useful_phones (name, phone, category, description, is_active, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {PHONE_COLUMNS}"
        );

        let entry = sqlx::query_as::<_, UsefulPhone>(&query)
            .bind(&dto.name)
            .bind(&dto.phone)
            .bind(dto.category)
            .bind(dto.description)
            .bind(dto.is_active)
            .bind(dto.sort_order)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create phone entry: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Phone entry created: id={}", entry.id);
        Ok(entry)
    }

    pub async fn update_phone(&self, id: Uuid, dto: UsefulPhonePayloadDto) -> Result<UsefulPhone> {
        let query = format!(
            "UPDATE useful_phones
             SET name = $2, phone = $3, category = $4, description = $5,
                 is_active = $6, sort_order = $7, updated_at = NOW()
             WHERE id = $1
             RETURNING {PHONE_COLUMNS}"
        );

        sqlx::query_as::<_, UsefulPhone>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.phone)
            .bind(dto.category)
            .bind(dto.description)
            .bind(dto.is_active)
            .bind(dto.sort_order)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Phone entry '{}' not found", id)))
    }

    pub async fn delete_phone(&self, id: Uuid) -> Result<()> {
        delete_by_id(&self.pool, "useful_phones", id).await
    }

    pub async fn set_phones_active(&self, ids: &[Uuid], is_active: bool) -> Result<u64> {
        set_flag(&self.pool, "useful_phones", "is_active", ids, is_active).await
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

/// Bulk visibility toggle shared by the community collections
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
