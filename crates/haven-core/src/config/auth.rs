//! Session authentication configuration.

use serde::{Deserialize, Serialize};

/// Session authentication settings.
///
/// Credential exchange lives in an external identity flow; the server only
/// validates opaque session tokens against the sessions table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the session cookie accepted alongside the Authorization header.
    #[serde(default = "default_cookie_name")]
    pub session_cookie: String,
    /// Session lifetime in hours, used when provisioning sessions.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: default_cookie_name(),
            session_ttl_hours: default_session_ttl(),
        }
    }
}

fn default_cookie_name() -> String {
    "haven_session".to_string()
}

fn default_session_ttl() -> i64 {
    72
}
