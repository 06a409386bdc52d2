//! HTTP-API mail delivery.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use rifa_core::config::mailer::MailerConfig;
use rifa_core::error::AppError;
use rifa_core::result::AppResult;

use super::sender::Mailer;

/// Sends mail through a transactional mail HTTP API.
///
/// Posts a JSON message to the configured endpoint with bearer auth.
#[derive(Debug)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

/// Wire shape accepted by the mail API.
#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpMailer {
    /// Create a new HTTP mailer from configuration.
    pub fn new(config: &MailerConfig) -> AppResult<Self> {
        if config.endpoint.is_empty() {
            return Err(AppError::configuration(
                "mailer.endpoint is required for the http provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    rifa_core::error::ErrorKind::Configuration,
                    "Failed to build mail HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            from: format!("{} <{}>", config.from_name, config.from_address),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = OutgoingMessage {
            from: &self.from,
            to,
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    rifa_core::error::ErrorKind::Notification,
                    format!("Mail API request failed: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(AppError::notification(format!(
                "Mail API returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
