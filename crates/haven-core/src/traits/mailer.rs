//! Outbound email seam.

use async_trait::async_trait;

use crate::result::AppResult;

/// A single plain-text transactional email.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl EmailMessage {
    /// Create a new message.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Sends transactional email through a third-party provider.
///
/// Callers treat failures as non-fatal: errors are logged and never
/// surfaced to the HTTP response, and there is no retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message, attempt-once.
    async fn send(&self, message: EmailMessage) -> AppResult<()>;
}
