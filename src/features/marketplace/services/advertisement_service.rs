use std::collections::HashMap;
use std::sync::Arc;

use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::accounts::models::Village;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::marketplace::dtos::{
    AdvertisementAuthorDto, AdvertisementImageDto, AdvertisementListQuery,
    AdvertisementPayloadDto, AdvertisementResponseDto,
};
use crate::features::marketplace::models::{Advertisement, AdvertisementImage, ModerationStatus};
use crate::features::notifications::{AdminNotifier, ListingAction, ListingEvent};
use crate::shared::types::PaginationQuery;

const AD_COLUMNS: &str = "id, title, description, ad_type, price, phone, email, address, \
     author_id, village, moderation_status, moderation_comment, is_active, views, \
     created_at, updated_at";

/// Joined row: listing plus the author fields embedded in responses
#[derive(Debug, FromRow)]
struct AdvertisementRow {
    #[sqlx(flatten)]
    ad: Advertisement,
    author_username: String,
    author_email: String,
    author_first_name: String,
    author_last_name: String,
    author_phone: String,
    author_village: Option<Village>,
    author_is_verified: bool,
}

impl AdvertisementRow {
    fn author_dto(&self) -> AdvertisementAuthorDto {
        AdvertisementAuthorDto {
            id: self.ad.author_id,
            username: self.author_username.clone(),
            email: self.author_email.clone(),
            first_name: self.author_first_name.clone(),
            last_name: self.author_last_name.clone(),
            phone: self.author_phone.clone(),
            village: self.author_village,
            is_verified: self.author_is_verified,
        }
    }

    fn listing_event(&self, action: ListingAction) -> ListingEvent {
        ListingEvent {
            action,
            id: self.ad.id,
            title: self.ad.title.clone(),
            author_username: self.author_username.clone(),
            author_email: self.author_email.clone(),
            ad_type: self.ad.ad_type,
            village: self.ad.village,
            phone: self.ad.phone.clone(),
            created_at: self.ad.created_at,
        }
    }
}

/// Rows visible in lists: public listings, plus the caller's own when signed in
const VISIBILITY_CLAUSE: &str = "((a.is_active = TRUE AND a.moderation_status = 'approved') \
     OR ($1::uuid IS NOT NULL AND a.author_id = $1))";

fn base_query(suffix: &str) -> String {
    format!(
        "SELECT
            a.id, a.title, a.description, a.ad_type, a.price, a.phone, a.email, a.address,
            a.author_id, a.village, a.moderation_status, a.moderation_comment,
            a.is_active, a.views, a.created_at, a.updated_at,
            u.username AS author_username, u.email AS author_email,
            u.first_name AS author_first_name, u.last_name AS author_last_name,
            u.phone AS author_phone, u.village AS author_village,
            u.is_verified AS author_is_verified
         FROM advertisements a
         JOIN users u ON u.id = a.author_id
         {suffix}"
    )
}

/// Map the DRF-style `ordering` parameter onto a whitelisted ORDER BY clause
fn order_clause(ordering: Option<&str>) -> &'static str {
    match ordering.unwrap_or("-created_at") {
        "created_at" => "a.created_at ASC",
        "price" => "a.price ASC NULLS LAST",
        "-price" => "a.price DESC NULLS LAST",
        "views" => "a.views ASC",
        "-views" => "a.views DESC",
        _ => "a.created_at DESC",
    }
}

/// Service for the listing store and its moderation workflow
pub struct AdvertisementService {
    pool: PgPool,
    notifier: Arc<AdminNotifier>,
}

impl AdvertisementService {
    pub fn new(pool: PgPool, notifier: Arc<AdminNotifier>) -> Self {
        Self { pool, notifier }
    }

    // =========================================================================
    // AUTHOR OPERATIONS
    // =========================================================================

    /// Submit a new listing; it always enters the moderation queue as pending
    pub async fn create(
        &self,
        author: &AuthenticatedUser,
        dto: AdvertisementPayloadDto,
    ) -> Result<AdvertisementResponseDto> {
        dto.validate_listing_rules()?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let insert = format!(
            "INSERT INTO advertisements
                 (title, description, ad_type, price, phone, email, address, author_id, village)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {AD_COLUMNS}"
        );

        let ad = sqlx::query_as::<_, Advertisement>(&insert)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.ad_type)
            .bind(dto.price)
            .bind(dto.phone.as_deref().unwrap_or(""))
            .bind(dto.email.as_deref().unwrap_or(""))
            .bind(dto.address.as_deref().unwrap_or(""))
            .bind(author.id)
            .bind(dto.village)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert advertisement: {:?}", e);
                AppError::Database(e)
            })?;

        insert_images(&mut tx, ad.id, &dto.images).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Advertisement submitted for moderation: id={}, author={}",
            ad.id,
            author.username
        );

        let row = self.fetch_row(ad.id).await?;
        self.notifier
            .dispatch_listing(row.listing_event(ListingAction::Created));

        self.into_response(row).await
    }

    /// Author edit: replaces the listing fields and images, then puts the
    /// listing back into the moderation queue (pending, comment cleared,
    /// still active so it stays enrolled while hidden from the public list)
    pub async fn update(
        &self,
        caller: &AuthenticatedUser,
        id: Uuid,
        dto: AdvertisementPayloadDto,
    ) -> Result<AdvertisementResponseDto> {
        self.ensure_author(id, caller).await?;
        dto.validate_listing_rules()?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let update = format!(
            "UPDATE advertisements
             SET title = $2, description = $3, ad_type = $4, price = $5,
                 phone = $6, email = $7, address = $8, village = $9,
                 moderation_status = 'pending', moderation_comment = '',
                 is_active = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {AD_COLUMNS}"
        );

        sqlx::query_as::<_, Advertisement>(&update)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.ad_type)
            .bind(dto.price)
            .bind(dto.phone.as_deref().unwrap_or(""))
            .bind(dto.email.as_deref().unwrap_or(""))
            .bind(dto.address.as_deref().unwrap_or(""))
            .bind(dto.village)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update advertisement: {:?}", e);
                AppError::Database(e)
            })?;

        sqlx::query("DELETE FROM advertisement_images WHERE advertisement_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        insert_images(&mut tx, id, &dto.images).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Advertisement edited, back to moderation: id={}, author={}",
            id,
            caller.username
        );

        let row = self.fetch_row(id).await?;
        self.notifier
            .dispatch_listing(row.listing_event(ListingAction::Updated));

        self.into_response(row).await
    }

    /// Author takes the listing off the board
    pub async fn deactivate(&self, caller: &AuthenticatedUser, id: Uuid) -> Result<()> {
        self.ensure_author(id, caller).await?;

        sqlx::query(
            "UPDATE advertisements SET is_active = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!("Advertisement deactivated: id={}, author={}", id, caller.username);
        Ok(())
    }

    /// Author deletes the listing; images cascade in the database
    pub async fn delete(&self, caller: &AuthenticatedUser, id: Uuid) -> Result<()> {
        self.ensure_author(id, caller).await?;

        sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!("Advertisement deleted: id={}, author={}", id, caller.username);
        Ok(())
    }

    /// All of the caller's listings, any status
    pub async fn list_by_author(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<AdvertisementResponseDto>> {
        let query = base_query("WHERE a.author_id = $1 ORDER BY a.created_at DESC");

        let rows = sqlx::query_as::<_, AdvertisementRow>(&query)
            .bind(caller.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list own advertisements: {:?}", e);
                AppError::Database(e)
            })?;

        self.into_responses(rows).await
    }

    // =========================================================================
    // READ SIDE
    // =========================================================================

    /// Fetch one listing, respecting visibility, and count the view.
    /// The counter moves only for approved listings and the increment is a
    /// single atomic UPDATE so concurrent viewers never lose updates.
    pub async fn get(
        &self,
        id: Uuid,
        viewer: Option<&AuthenticatedUser>,
    ) -> Result<AdvertisementResponseDto> {
        let mut row = self.fetch_row(id).await?;

        let is_author = viewer.is_some_and(|v| v.id == row.ad.author_id);
        let is_admin = viewer.is_some_and(|v| v.is_admin);
        if !row.ad.is_publicly_visible() && !is_author && !is_admin {
            return Err(AppError::NotFound(format!(
                "Advertisement '{}' not found",
                id
            )));
        }

        if row.ad.moderation_status == ModerationStatus::Approved {
            let views = sqlx::query_scalar::<_, i32>(
                "UPDATE advertisements SET views = views + 1 WHERE id = $1 RETURNING views",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
            row.ad.views = views;
        }

        self.into_response(row).await
    }

    /// Listing feed: guests get only public listings, a signed-in caller
    /// additionally gets their own in any status. Filters narrow both sets.
    pub async fn list(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: &AdvertisementListQuery,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<AdvertisementResponseDto>, i64)> {
        let viewer_id = viewer.map(|v| v.id);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let filters = format!(
            "WHERE {VISIBILITY_CLAUSE}
               AND ($2::ad_type IS NULL OR a.ad_type = $2)
               AND ($3::ad_village IS NULL OR a.village = $3)
               AND ($4::text IS NULL
                    OR a.title ILIKE '%' || $4 || '%'
                    OR a.description ILIKE '%' || $4 || '%')"
        );

        let count_query = format!("SELECT COUNT(*) FROM advertisements a {filters}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(viewer_id)
            .bind(query.ad_type)
            .bind(query.village)
            .bind(search)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count advertisements: {:?}", e);
                AppError::Database(e)
            })?;

        let list_query = base_query(&format!(
            "{filters} ORDER BY {order} OFFSET $5 LIMIT $6",
            order = order_clause(query.ordering.as_deref())
        ));

        let rows = sqlx::query_as::<_, AdvertisementRow>(&list_query)
            .bind(viewer_id)
            .bind(query.ad_type)
            .bind(query.village)
            .bind(search)
            .bind(pagination.offset())
            .bind(pagination.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list advertisements: {:?}", e);
                AppError::Database(e)
            })?;

        let items = self.into_responses(rows).await?;
        Ok((items, total))
    }

    // =========================================================================
    // MODERATION (admin)
    // =========================================================================

    /// Approve a listing. Idempotent: approving twice leaves it approved.
    pub async fn approve(&self, id: Uuid) -> Result<AdvertisementResponseDto> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            "UPDATE advertisements
             SET moderation_status = 'approved', moderation_comment = '', updated_at = NOW()
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!(
                "Advertisement '{}' not found",
                id
            )));
        }

        tracing::info!("Advertisement approved: id={}", id);

        let row = self.fetch_row(id).await?;
        self.into_response(row).await
    }

    /// Reject a listing with a mandatory reason.
    /// Idempotent apart from the comment, which is overwritten.
    pub async fn reject(&self, id: Uuid, comment: &str) -> Result<AdvertisementResponseDto> {
        if comment.trim().is_empty() {
            return Err(AppError::Validation(
                "Укажите причину отклонения".to_string(),
            ));
        }

        let updated = sqlx::query_scalar::<_, Uuid>(
            "UPDATE advertisements
             SET moderation_status = 'rejected', moderation_comment = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!(
                "Advertisement '{}' not found",
                id
            )));
        }

        tracing::info!("Advertisement rejected: id={}", id);

        let row = self.fetch_row(id).await?;
        self.into_response(row).await
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Ownership check used by every author mutation
    async fn ensure_author(&self, id: Uuid, caller: &AuthenticatedUser) -> Result<()> {
        let author_id =
            sqlx::query_scalar::<_, Uuid>("SELECT author_id FROM advertisements WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Advertisement '{}' not found", id))
                })?;

        if author_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the author can modify this advertisement".to_string(),
            ));
        }

        Ok(())
    }

    async fn fetch_row(&self, id: Uuid) -> Result<AdvertisementRow> {
        let query = base_query("WHERE a.id = $1");

        sqlx::query_as::<_, AdvertisementRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get advertisement: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Advertisement '{}' not found", id)))
    }

    async fn images_for(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<AdvertisementImageDto>>> {
        let images = sqlx::query_as::<_, AdvertisementImage>(
            "SELECT id, advertisement_id, image_url, sort_order, uploaded_at
             FROM advertisement_images
             WHERE advertisement_id = ANY($1)
             ORDER BY sort_order, uploaded_at",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut grouped: HashMap<Uuid, Vec<AdvertisementImageDto>> = HashMap::new();
        for image in images {
            grouped
                .entry(image.advertisement_id)
                .or_default()
                .push(image.into());
        }
        Ok(grouped)
    }

    async fn into_response(&self, row: AdvertisementRow) -> Result<AdvertisementResponseDto> {
        let id = row.ad.id;
        let mut images = self.images_for(&[id]).await?;
        let author = row.author_dto();
        Ok(AdvertisementResponseDto::from_parts(
            row.ad,
            author,
            images.remove(&id).unwrap_or_default(),
        ))
    }

    async fn into_responses(
        &self,
        rows: Vec<AdvertisementRow>,
    ) -> Result<Vec<AdvertisementResponseDto>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.ad.id).collect();
        let mut images = self.images_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let author = row.author_dto();
                let ad_images = images.remove(&row.ad.id).unwrap_or_default();
                AdvertisementResponseDto::from_parts(row.ad, author, ad_images)
            })
            .collect())
    }
}

async fn insert_images(
    tx: &mut Transaction<'_, Postgres>,
    advertisement_id: Uuid,
    urls: &[String],
) -> Result<()> {
    for (position, url) in urls.iter().enumerate() {
        sqlx::query(
            "INSERT INTO advertisement_images (advertisement_id, image_url, sort_order)
             VALUES ($1, $2, $3)",
        )
        .bind(advertisement_id)
        .bind(url)
        .bind(position as i32)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert advertisement image: {:?}", e);
            AppError::Database(e)
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause_whitelist() {
        assert_eq!(order_clause(None), "a.created_at DESC");
        assert_eq!(order_clause(Some("created_at")), "a.created_at ASC");
        assert_eq!(order_clause(Some("-price")), "a.price DESC NULLS LAST");
        assert_eq!(order_clause(Some("views")), "a.views ASC");
        // Anything outside the whitelist falls back to the default
        assert_eq!(order_clause(Some("author_id; DROP TABLE")), "a.created_at DESC");
    }
}
