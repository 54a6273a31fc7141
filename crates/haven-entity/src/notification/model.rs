//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification delivered to one user.
///
/// The persisted row is the durable source of truth; the live push half
/// is a latency optimization with no delivery guarantee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Event category.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Related inspection, if any.
    pub inspection_id: Option<Uuid>,
    /// Related listing, if any.
    pub listing_id: Option<Uuid>,
    /// Related payment, if any.
    pub payment_id: Option<Uuid>,
    /// Opaque structured extras.
    pub metadata: Option<serde_json::Value>,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// When it was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// The writable fields of a notification, before persistence assigns
/// id/created_at. Also the unit of bulk fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDraft {
    /// Event category.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Related inspection, if any.
    pub inspection_id: Option<Uuid>,
    /// Related listing, if any.
    pub listing_id: Option<Uuid>,
    /// Related payment, if any.
    pub payment_id: Option<Uuid>,
    /// Opaque structured extras.
    pub metadata: Option<serde_json::Value>,
}

impl NotificationDraft {
    /// Create a draft with no resource references.
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            inspection_id: None,
            listing_id: None,
            payment_id: None,
            metadata: None,
        }
    }

    /// Attach an inspection reference.
    pub fn with_inspection(mut self, inspection_id: Uuid) -> Self {
        self.inspection_id = Some(inspection_id);
        self
    }

    /// Attach a listing reference.
    pub fn with_listing(mut self, listing_id: Uuid) -> Self {
        self.listing_id = Some(listing_id);
        self
    }

    /// Attach structured metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
