use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

/// Service for admin console queries and bulk moderation
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // COUNTERS
    // =========================================================================

    /// Users still waiting for verification
    pub async fn unverified_users_count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE is_verified = FALSE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count unverified users: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Listings needing moderation attention: new submissions plus rejected
    /// ones waiting for the author to fix and resubmit
    pub async fn moderation_queue_count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM advertisements
             WHERE moderation_status IN ('pending', 'rejected')",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count moderation queue: {:?}", e);
            AppError::Database(e)
        })
    }

    // =========================================================================
    // BULK MODERATION
    // =========================================================================

    /// Approve the pending listings among the given ids.
    /// Listings in other states are left untouched.
    pub async fn bulk_approve(&self, ids: &[Uuid]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "UPDATE advertisements
             SET moderation_status = 'approved', moderation_comment = '', updated_at = NOW()
             WHERE id = ANY($1) AND moderation_status = 'pending'",
        )
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!("Bulk approved {} advertisement(s)", result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Reject the pending listings among the given ids with a shared comment
    pub async fn bulk_reject(&self, ids: &[Uuid], comment: &str) -> Result<u64> {
        if comment.trim().is_empty() {
            return Err(AppError::Validation(
                "Укажите причину отклонения".to_string(),
            ));
        }

        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "UPDATE advertisements
             SET moderation_status = 'rejected', moderation_comment = $2, updated_at = NOW()
             WHERE id = ANY($1) AND moderation_status = 'pending'",
        )
        .bind(ids)
        .bind(comment)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!("Bulk rejected {} advertisement(s)", result.rows_affected());
        Ok(result.rows_affected())
    }
}
