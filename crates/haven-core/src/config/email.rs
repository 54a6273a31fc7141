//! Outbound email configuration.

use serde::{Deserialize, Serialize};

/// Transactional email provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled. When false the no-op mailer is used.
    #[serde(default)]
    pub enabled: bool,
    /// Provider send endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Provider API key.
    #[serde(default)]
    pub api_key: String,
    /// From address for all outbound mail.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: default_api_url(),
            api_key: String::new(),
            from_address: default_from(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.mailprovider.example/v3/send".to_string()
}

fn default_from() -> String {
    "no-reply@havenmart.example".to_string()
}

fn default_timeout() -> u64 {
    10
}
