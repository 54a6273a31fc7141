//! Notification persistence seam.

use async_trait::async_trait;
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::types::pagination::PageRequest;
use haven_database::repositories::notification::NotificationRepository;
use haven_entity::notification::{Notification, NotificationDraft};

/// Persistence operations the notification service depends on.
///
/// The production implementation is [`NotificationRepository`]; unit tests
/// inject an in-memory fake so dispatch logic runs without a database.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert one notification row.
    async fn insert(&self, user_id: Uuid, draft: &NotificationDraft) -> AppResult<Notification>;

    /// Insert one row per recipient in a single batch.
    async fn insert_bulk(
        &self,
        user_ids: &[Uuid],
        draft: &NotificationDraft,
    ) -> AppResult<Vec<Notification>>;

    /// List a user's notifications, newest first.
    async fn find_by_user(&self, user_id: Uuid, page: PageRequest)
        -> AppResult<Vec<Notification>>;

    /// Count unread notifications for a user.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// Mark one notification as read. Returns `true` when a row matched.
    async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool>;

    /// Dismiss one notification. Returns `true` when a row matched.
    async fn dismiss(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn insert(&self, user_id: Uuid, draft: &NotificationDraft) -> AppResult<Notification> {
        NotificationRepository::insert(self, user_id, draft).await
    }

    async fn insert_bulk(
        &self,
        user_ids: &[Uuid],
        draft: &NotificationDraft,
    ) -> AppResult<Vec<Notification>> {
        NotificationRepository::insert_bulk(self, user_ids, draft).await
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<Vec<Notification>> {
        NotificationRepository::find_by_user(self, user_id, page).await
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        NotificationRepository::count_unread(self, user_id).await
    }

    async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        NotificationRepository::mark_read(self, notification_id, user_id).await
    }

    async fn dismiss(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        NotificationRepository::dismiss(self, notification_id, user_id).await
    }
}
