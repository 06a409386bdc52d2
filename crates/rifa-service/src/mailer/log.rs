//! Log-only mail delivery.

use async_trait::async_trait;
use tracing::info;

use rifa_core::config::mailer::MailerConfig;
use rifa_core::result::AppResult;

use super::sender::Mailer;

/// Writes outgoing mail to the log instead of delivering it.
#[derive(Debug)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    /// Create a new log mailer from configuration.
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            from: config.from_address.clone(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        info!(from = %self.from, to = %to, subject = %subject, body = %body, "Outgoing email");
        Ok(())
    }
}
