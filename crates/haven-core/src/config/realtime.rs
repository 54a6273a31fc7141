//! Live push channel configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-process live connection registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Buffer size of each per-connection outbound channel.
    #[serde(default = "default_buffer")]
    pub channel_buffer_size: usize,
    /// Maximum simultaneous connections per user; the oldest is replaced.
    #[serde(default = "default_max_per_user")]
    pub max_connections_per_user: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_buffer(),
            max_connections_per_user: default_max_per_user(),
        }
    }
}

fn default_buffer() -> usize {
    64
}

fn default_max_per_user() -> usize {
    5
}
