//! Transactional email over a JSON HTTP provider API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use haven_core::config::email::EmailConfig;
use haven_core::error::{AppError, ErrorKind};
use haven_core::result::AppResult;
use haven_core::traits::{EmailMessage, Mailer};

/// Sends mail through the configured provider's JSON send endpoint.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpMailer {
    /// Creates a mailer with a dedicated HTTP client.
    pub fn new(config: EmailConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build email client", e)
            })?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        let payload = serde_json::json!({
            "from": self.config.from_address,
            "to": message.to,
            "subject": message.subject,
            "text": message.body,
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Email provider request failed",
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Email provider returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

/// Drops every message; used when outbound email is disabled.
#[derive(Debug, Clone, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, message: EmailMessage) -> AppResult<()> {
        debug!(
            to = %message.to,
            subject = %message.subject,
            "Email disabled, dropping message"
        );
        Ok(())
    }
}

/// Builds the mailer matching the configuration.
pub fn mailer_from_config(config: &EmailConfig) -> AppResult<Arc<dyn Mailer>> {
    if config.enabled {
        Ok(Arc::new(HttpMailer::new(config.clone())?))
    } else {
        Ok(Arc::new(NoopMailer))
    }
}
