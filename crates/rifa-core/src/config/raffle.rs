//! Raffle pool configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The bounded pool of ticket numbers this deployment sells from.
///
/// Early deployments ran `[0, 999]`; current ones run `[1, 150]`. The
/// range is inclusive on both ends and fixed for the lifetime of the
/// process — changing it mid-raffle would orphan sold numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// Lowest ticket number in the pool (inclusive).
    #[serde(default = "default_range_min")]
    pub range_min: i32,
    /// Highest ticket number in the pool (inclusive).
    #[serde(default = "default_range_max")]
    pub range_max: i32,
    /// Whether the free-entry sub-flow is open.
    #[serde(default = "default_true")]
    pub free_entry_enabled: bool,
}

impl RaffleConfig {
    /// Total number of tickets in the pool.
    pub fn pool_size(&self) -> usize {
        (self.range_max - self.range_min + 1) as usize
    }

    /// Check cross-field consistency of the configured range.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.range_min < 0 {
            return Err(AppError::configuration(format!(
                "raffle.range_min must be non-negative, got {}",
                self.range_min
            )));
        }
        if self.range_min > self.range_max {
            return Err(AppError::configuration(format!(
                "raffle range is empty: [{}, {}]",
                self.range_min, self.range_max
            )));
        }
        Ok(())
    }
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            range_min: default_range_min(),
            range_max: default_range_max(),
            free_entry_enabled: default_true(),
        }
    }
}

fn default_range_min() -> i32 {
    1
}

fn default_range_max() -> i32 {
    150
}

fn default_true() -> bool {
    true
}
