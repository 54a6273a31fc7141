//! Outbound message envelope for the live channel.

use serde::{Deserialize, Serialize};

use haven_entity::notification::Notification;

/// JSON envelope pushed over a live connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// A freshly persisted notification.
    Notification {
        /// The persisted row.
        notification: Notification,
    },
    /// Unread counter refresh.
    UnreadCount {
        /// Current unread count.
        count: i64,
    },
    /// Protocol-level error reported to the client.
    Error {
        /// Machine-readable code.
        code: String,
        /// Human-readable message.
        message: String,
    },
}
