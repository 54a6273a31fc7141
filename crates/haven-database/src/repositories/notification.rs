//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use haven_core::error::{AppError, ErrorKind};
use haven_core::result::AppResult;
use haven_core::types::pagination::PageRequest;
use haven_entity::notification::{Notification, NotificationDraft};

/// Repository for notification persistence.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one notification row.
    pub async fn insert(&self, user_id: Uuid, draft: &NotificationDraft) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications \
             (user_id, kind, title, message, inspection_id, listing_id, payment_id, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(user_id)
        .bind(draft.kind)
        .bind(&draft.title)
        .bind(&draft.message)
        .bind(draft.inspection_id)
        .bind(draft.listing_id)
        .bind(draft.payment_id)
        .bind(&draft.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Insert one row per recipient in a single batch statement.
    pub async fn insert_bulk(
        &self,
        user_ids: &[Uuid],
        draft: &NotificationDraft,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications \
             (user_id, kind, title, message, inspection_id, listing_id, payment_id, metadata) \
             SELECT u, $2, $3, $4, $5, $6, $7, $8 FROM UNNEST($1::uuid[]) AS u \
             RETURNING *",
        )
        .bind(user_ids)
        .bind(draft.kind)
        .bind(&draft.title)
        .bind(&draft.message)
        .bind(draft.inspection_id)
        .bind(draft.listing_id)
        .bind(draft.payment_id)
        .bind(&draft.metadata)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notifications", e)
        })
    }

    /// List a user's notifications, newest first.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark one notification as read. Returns `true` when a row matched.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE, read_at = NOW() \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(notification_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Dismiss (delete) one notification. Returns `true` when a row matched.
    pub async fn dismiss(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(notification_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to dismiss notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
