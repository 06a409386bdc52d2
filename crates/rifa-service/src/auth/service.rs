//! Admin login over config-injected accounts.

use tracing::warn;

use rifa_core::config::auth::AdminAccount;
use rifa_core::error::AppError;
use rifa_core::result::AppResult;

/// Checks admin credentials against the static account list.
///
/// The list is loaded from configuration once at process start and
/// injected here; nothing reads it as ambient state. Comparison is
/// exact match on both fields.
#[derive(Debug, Clone)]
pub struct AuthService {
    accounts: Vec<AdminAccount>,
}

impl AuthService {
    /// Create a new auth service over the given accounts.
    pub fn new(accounts: Vec<AdminAccount>) -> Self {
        Self { accounts }
    }

    /// Check a username/password pair, returning the matched account.
    pub fn login(&self, username: &str, password: &str) -> AppResult<&AdminAccount> {
        self.accounts
            .iter()
            .find(|account| account.username == username && account.password == password)
            .ok_or_else(|| {
                warn!(username = %username, "Rejected login attempt");
                AppError::unauthorized("Invalid credentials")
            })
    }
}
