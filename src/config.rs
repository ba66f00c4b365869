//! Search engine configuration
//!
//! Configuration follows a builder pattern with upfront validation:
//! construct, adjust with consuming setters, then `build()` (or let the
//! coordinator validate on construction).

use crate::error::KeysweepError;
use serde::{Deserialize, Serialize};

/// Default number of keys a worker scans between progress reports
pub const DEFAULT_PROGRESS_INTERVAL_KEYS: u64 = 100_000;

/// Configuration for a [`SearchCoordinator`]
///
/// [`SearchCoordinator`]: crate::coordinator::SearchCoordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Keys scanned per worker between progress observations
    pub progress_interval_keys: u64,
    /// Whether workers emit progress observations at all
    pub progress_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_interval_keys: DEFAULT_PROGRESS_INTERVAL_KEYS,
            progress_enabled: true,
        }
    }
}

impl SearchConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of keys between progress observations
    pub fn progress_interval_keys(mut self, interval: u64) -> Self {
        self.progress_interval_keys = interval;
        self
    }

    /// Enable or disable progress reporting
    pub fn progress_enabled(mut self, enabled: bool) -> Self {
        self.progress_enabled = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), KeysweepError> {
        if self.progress_interval_keys == 0 {
            return Err(KeysweepError::config_error(
                "search_config.progress_interval_keys",
                "must be greater than 0",
                "Set an interval in keys (default 100000), or disable progress reporting instead",
            ));
        }
        Ok(())
    }

    /// Build the configuration after validation
    pub fn build(self) -> Result<Self, KeysweepError> {
        self.validate()?;
        Ok(self)
    }
}
