//! Mailer trait and provider dispatch.

use async_trait::async_trait;

use rifa_core::config::mailer::MailerConfig;
use rifa_core::error::AppError;
use rifa_core::result::AppResult;

use super::http::HttpMailer;
use super::log::LogMailer;

/// Sends a single plain-text email.
///
/// Delivery is best-effort at every call site: a failed send maps to
/// `ErrorKind::Notification` and must never roll back the state change
/// it follows.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Send `body` to `to` with the given subject.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// Dispatcher over the configured delivery provider.
#[derive(Debug)]
pub enum MailerDispatch {
    /// Transactional mail HTTP API.
    Http(HttpMailer),
    /// Log-only delivery for dev and test runs.
    Log(LogMailer),
    /// No delivery at all.
    Disabled,
}

impl MailerDispatch {
    /// Create a dispatcher for the configured provider name.
    pub fn from_config(config: &MailerConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "http" => Ok(Self::Http(HttpMailer::new(config)?)),
            "log" => Ok(Self::Log(LogMailer::new(config))),
            "disabled" => Ok(Self::Disabled),
            other => Err(AppError::configuration(format!(
                "Unknown mailer provider: {other}"
            ))),
        }
    }

    /// Whether delivery is switched off entirely.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

#[async_trait]
impl Mailer for MailerDispatch {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        match self {
            Self::Http(inner) => inner.send(to, subject, body).await,
            Self::Log(inner) => inner.send(to, subject, body).await,
            Self::Disabled => Ok(()),
        }
    }
}
