//! Admin account configuration.

use serde::{Deserialize, Serialize};

/// Admin login settings.
///
/// The account list is loaded once at process start and injected into
/// the auth service; nothing else in the application reads it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Static admin accounts, compared by exact match.
    #[serde(default)]
    pub accounts: Vec<AdminAccount>,
}

/// A single static admin credential entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    /// Login name.
    pub username: String,
    /// Plain-text password, compared by exact match.
    pub password: String,
    /// Role label returned to the client, e.g. `"owner"` or `"staff"`.
    pub role: String,
}
