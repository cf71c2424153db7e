//! Analysis job polling configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default delay between status checks, in seconds.
const fn default_interval_secs() -> u64 {
    2
}

/// Default wall-clock ceiling measured from job submission, in seconds.
const fn default_timeout_secs() -> u64 {
    120
}

/// Default number of consecutive transport failures tolerated while polling.
const fn default_max_transient_errors() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Consecutive connection/timeout failures tolerated before polling gives up.
    /// API errors are never retried. `0` propagates the first failure.
    #[serde(default = "default_max_transient_errors")]
    pub max_transient_errors: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            timeout_secs: default_timeout_secs(),
            max_transient_errors: default_max_transient_errors(),
        }
    }
}

impl PollConfig {
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero interval or a ceiling
    /// shorter than one interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll.interval_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.timeout_secs < self.interval_secs {
            return Err(ConfigError::InvalidValue {
                field: "poll.timeout_secs".to_string(),
                reason: format!(
                    "must not be shorter than poll.interval_secs ({})",
                    self.interval_secs
                ),
            });
        }
        Ok(())
    }
}
