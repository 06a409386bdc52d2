//! Outbound email configuration.

use serde::{Deserialize, Serialize};

/// Outbound email delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Delivery provider: `"http"`, `"log"`, or `"disabled"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// HTTP endpoint of the transactional mail API (`http` provider).
    #[serde(default)]
    pub endpoint: String,
    /// Bearer token for the mail API (`http` provider).
    #[serde(default)]
    pub api_key: String,
    /// Sender address placed on outgoing messages.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Request timeout in seconds for the mail API.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            api_key: String::new(),
            from_address: default_from_address(),
            from_name: default_from_name(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_from_address() -> String {
    "rifa@localhost".to_string()
}

fn default_from_name() -> String {
    "Rifa".to_string()
}

fn default_timeout() -> u64 {
    10
}
