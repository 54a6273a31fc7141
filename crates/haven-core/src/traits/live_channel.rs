//! Live push channel seam.

use async_trait::async_trait;
use uuid::Uuid;

/// Delivers payloads to currently connected users.
///
/// The production implementation is the WebSocket connection registry in
/// `haven-realtime`; tests inject fakes. Delivery is best-effort: the
/// persisted notification row is the durable source of truth and a `false`
/// return (user offline, channel full, socket gone) is never an error.
#[async_trait]
pub trait LiveChannel: Send + Sync {
    /// Attempt to push a payload to all of a user's live connections.
    ///
    /// Returns `true` if at least one connection accepted the payload.
    async fn send(&self, user_id: Uuid, payload: serde_json::Value) -> bool;

    /// Whether the user has at least one live connection.
    fn is_connected(&self, user_id: Uuid) -> bool;
}
