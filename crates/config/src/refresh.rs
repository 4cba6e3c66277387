//! Reload interval configuration.
//!
//! The widget re-reads its backing file periodically so that edits made in
//! an external editor show up without restarting. An interval of `0`
//! disables periodic reloads; manual refresh stays available.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default reload interval (5 minutes).
pub const DEFAULT_REFRESH_INTERVAL: u32 = 300;

/// Minimum allowed non-zero reload interval (10 seconds).
pub const MIN_REFRESH_INTERVAL: u32 = 10;

/// Maximum allowed reload interval (1 day).
pub const MAX_REFRESH_INTERVAL: u32 = 86_400;

/// Configuration for periodic reloads of the backing file.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use jot_config::RefreshConfig;
///
/// let config = RefreshConfig::default();
/// assert_eq!(config.interval(), Some(Duration::from_secs(300)));
///
/// assert_eq!(RefreshConfig::disabled().interval(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between reloads, or `0` to disable them.
    #[serde(default = "default_interval")]
    pub interval_secs: u32,
}

fn default_interval() -> u32 {
    DEFAULT_REFRESH_INTERVAL
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl RefreshConfig {
    /// Creates a configuration reloading every `interval_secs` seconds.
    #[must_use]
    pub fn with_interval(interval_secs: u32) -> Self {
        Self { interval_secs }
    }

    /// Creates a configuration with periodic reloads turned off.
    #[must_use]
    pub fn disabled() -> Self {
        Self { interval_secs: 0 }
    }

    /// Returns the reload period, or `None` when periodic reloads are off.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        (self.interval_secs > 0).then(|| Duration::from_secs(u64::from(self.interval_secs)))
    }

    /// Validates the interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is non-zero and outside
    /// [`MIN_REFRESH_INTERVAL`]..=[`MAX_REFRESH_INTERVAL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_config::RefreshConfig;
    ///
    /// assert!(RefreshConfig::with_interval(60).validate().is_ok());
    /// assert!(RefreshConfig::disabled().validate().is_ok());
    /// assert!(RefreshConfig::with_interval(5).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        match self.interval_secs {
            0 => Ok(()),
            secs if secs < MIN_REFRESH_INTERVAL => Err(ConfigError::InvalidRefreshInterval {
                reason: format!("{secs}s is below the minimum of {MIN_REFRESH_INTERVAL}s"),
            }),
            secs if secs > MAX_REFRESH_INTERVAL => Err(ConfigError::InvalidRefreshInterval {
                reason: format!("{secs}s exceeds the maximum of {MAX_REFRESH_INTERVAL}s"),
            }),
            _ => Ok(()),
        }
    }
}
