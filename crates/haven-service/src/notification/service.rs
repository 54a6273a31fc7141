//! Notification dispatch (persist + live push + email) and the user-facing
//! read API.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use haven_core::result::AppResult;
use haven_core::traits::{EmailMessage, LiveChannel, Mailer};
use haven_core::types::pagination::PageRequest;
use haven_core::AppError;
use haven_entity::notification::{Notification, NotificationDraft};
use haven_entity::user::User;
use haven_realtime::OutboundMessage;

use crate::context::RequestContext;
use crate::notification::store::NotificationStore;

/// Someone a notification can be delivered to.
#[derive(Debug, Clone)]
pub struct Recipient {
    /// Recipient user id.
    pub user_id: Uuid,
    /// Address for the email half of dispatch.
    pub email: String,
}

impl From<&User> for Recipient {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Dispatches notifications and serves a user's notification feed.
///
/// Dispatch always persists first. The live push and the email are
/// attempt-once side channels: their failures are logged and never roll
/// back the persisted row or surface to the caller.
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    live: Arc<dyn LiveChannel>,
    mailer: Arc<dyn Mailer>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        store: Arc<dyn NotificationStore>,
        live: Arc<dyn LiveChannel>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            store,
            live,
            mailer,
        }
    }

    /// Persist one notification, then push and email best-effort.
    pub async fn notify(
        &self,
        recipient: &Recipient,
        draft: NotificationDraft,
    ) -> AppResult<Notification> {
        let notification = self.store.insert(recipient.user_id, &draft).await?;

        let delivered = self.push(&notification).await;
        debug!(
            notification_id = %notification.id,
            user_id = %recipient.user_id,
            kind = %draft.kind,
            delivered,
            "Notification dispatched"
        );

        let email = EmailMessage::new(&recipient.email, &draft.title, &draft.message);
        if let Err(e) = self.mailer.send(email).await {
            warn!(
                user_id = %recipient.user_id,
                error = %e,
                "Failed to send notification email"
            );
        }

        Ok(notification)
    }

    /// Persist one row per recipient in a single batch, then push to
    /// whichever recipients are connected.
    ///
    /// Returns every persisted row. Push failures only lower the delivered
    /// count; there is no retry and no email for bulk fan-out.
    pub async fn notify_many(
        &self,
        user_ids: &[Uuid],
        draft: NotificationDraft,
    ) -> AppResult<Vec<Notification>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let notifications = self.store.insert_bulk(user_ids, &draft).await?;

        let mut delivered = 0usize;
        for notification in &notifications {
            if self.push(notification).await {
                delivered += 1;
            }
        }
        info!(
            kind = %draft.kind,
            recipients = notifications.len(),
            delivered,
            "Notification fan-out"
        );

        Ok(notifications)
    }

    /// Push one persisted notification over the live channel.
    async fn push(&self, notification: &Notification) -> bool {
        let envelope = OutboundMessage::Notification {
            notification: notification.clone(),
        };
        match serde_json::to_value(&envelope) {
            Ok(payload) => self.live.send(notification.user_id, payload).await,
            Err(e) => {
                warn!(
                    notification_id = %notification.id,
                    error = %e,
                    "Failed to serialize live push payload"
                );
                false
            }
        }
    }

    /// Lists the caller's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<Vec<Notification>> {
        self.store.find_by_user(ctx.user_id, page.clamped()).await
    }

    /// Counts the caller's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.store.count_unread(ctx.user_id).await
    }

    /// Marks one of the caller's notifications as read.
    ///
    /// Another user's row is indistinguishable from a missing one.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        if self.store.mark_read(notification_id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Notification not found"))
        }
    }

    /// Dismisses one of the caller's notifications.
    pub async fn dismiss(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        if self.store.dismiss(notification_id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Notification not found"))
        }
    }
}
