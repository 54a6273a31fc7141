//! Live connection registry — tracks which users are currently connected
//! and routes push payloads to their open sockets.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use haven_core::config::realtime::RealtimeConfig;
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_core::traits::LiveChannel;

/// One registered live connection.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// When the connection was registered.
    pub connected_at: DateTime<Utc>,
    tx: mpsc::Sender<String>,
}

impl ConnectionHandle {
    /// Queue a serialized payload on this connection.
    pub async fn send(&self, payload: String) -> AppResult<()> {
        self.tx
            .send(payload)
            .await
            .map_err(|_| AppError::internal("Connection channel closed"))
    }
}

/// Registry of all live connections, keyed by connection and by user.
///
/// This is the production [`LiveChannel`]: the notification dispatcher
/// pushes through it when the recipient happens to be online. Nothing here
/// is durable — the persisted notification row is the source of truth.
#[derive(Debug, Default)]
pub struct LiveConnectionRegistry {
    connections: DashMap<Uuid, Arc<ConnectionHandle>>,
    by_user: DashMap<Uuid, Vec<Uuid>>,
    config: RealtimeConfig,
}

impl LiveConnectionRegistry {
    /// Create a new registry.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            connections: DashMap::new(),
            by_user: DashMap::new(),
            config,
        }
    }

    /// Register a connection for a user.
    ///
    /// Returns the handle and the receiver side to forward into the socket.
    /// When the user is at the per-user connection limit the oldest
    /// connection is dropped.
    pub fn register(&self, user_id: Uuid) -> (Arc<ConnectionHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.config.channel_buffer_size);
        let handle = Arc::new(ConnectionHandle {
            id: Uuid::new_v4(),
            user_id,
            connected_at: Utc::now(),
            tx,
        });

        let mut conn_ids = self.by_user.entry(user_id).or_default();
        if conn_ids.len() >= self.config.max_connections_per_user {
            if let Some(oldest) = conn_ids.first().copied() {
                warn!(
                    user_id = %user_id,
                    count = conn_ids.len(),
                    "User at max connections, dropping oldest"
                );
                conn_ids.retain(|id| *id != oldest);
                self.connections.remove(&oldest);
            }
        }
        conn_ids.push(handle.id);
        drop(conn_ids);

        self.connections.insert(handle.id, Arc::clone(&handle));

        info!(
            conn_id = %handle.id,
            user_id = %user_id,
            "Live connection registered"
        );

        (handle, rx)
    }

    /// Unregister a connection.
    pub fn unregister(&self, conn_id: Uuid) {
        if let Some((_, handle)) = self.connections.remove(&conn_id) {
            if let Some(mut conn_ids) = self.by_user.get_mut(&handle.user_id) {
                conn_ids.retain(|id| *id != conn_id);
            }
            self.by_user
                .remove_if(&handle.user_id, |_, conn_ids| conn_ids.is_empty());

            info!(
                conn_id = %conn_id,
                user_id = %handle.user_id,
                "Live connection unregistered"
            );
        }
    }

    /// All handles for one user.
    fn user_handles(&self, user_id: Uuid) -> Vec<Arc<ConnectionHandle>> {
        self.by_user
            .get(&user_id)
            .map(|conn_ids| {
                conn_ids
                    .iter()
                    .filter_map(|id| self.connections.get(id).map(|h| Arc::clone(&h)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total open connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Unique connected users.
    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }
}

#[async_trait]
impl LiveChannel for LiveConnectionRegistry {
    async fn send(&self, user_id: Uuid, payload: serde_json::Value) -> bool {
        let handles = self.user_handles(user_id);
        if handles.is_empty() {
            return false;
        }

        let serialized = payload.to_string();
        let mut delivered = false;
        for handle in &handles {
            match handle.send(serialized.clone()).await {
                Ok(()) => delivered = true,
                Err(e) => {
                    debug!(
                        conn_id = %handle.id,
                        user_id = %user_id,
                        error = %e,
                        "Failed to push to live connection"
                    );
                }
            }
        }
        delivered
    }

    fn is_connected(&self, user_id: Uuid) -> bool {
        self.by_user
            .get(&user_id)
            .map(|conn_ids| !conn_ids.is_empty())
            .unwrap_or(false)
    }
}
