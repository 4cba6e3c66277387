//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct. A `Config` value is
//! built once at startup and handed to the widget explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::files::{find_config_file, read_config_file, user_config_dir};
use crate::refresh::RefreshConfig;

/// Default name of the todo file, relative to the user config directory.
pub const DEFAULT_FILENAME: &str = "todo.json";

/// Default panel title.
pub const DEFAULT_TITLE: &str = "Todo";

/// Configuration for the todo widget.
///
/// # Examples
///
/// ```
/// use jot_config::{Config, RefreshConfig};
///
/// let config = Config::default();
/// assert_eq!(config.filename, "todo.json");
/// assert!(config.enabled);
///
/// let config = Config {
///     filename: "/tmp/groceries.json".to_string(),
///     refresh: RefreshConfig::disabled(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the todo file.
    ///
    /// Absolute paths are used as-is; relative paths are resolved against
    /// the user config directory.
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Title shown in the panel border.
    #[serde(default = "default_title")]
    pub title: String,

    /// Whether the widget is active. A disabled widget never touches its file.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Periodic reload behavior.
    #[serde(default)]
    pub refresh: RefreshConfig,
}

fn default_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            title: default_title(),
            enabled: true,
            refresh: RefreshConfig::default(),
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default configuration pointing at `filename`.
    #[must_use]
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file name is blank or the refresh interval is
    /// out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_config::Config;
    ///
    /// assert!(Config::default().validate().is_ok());
    /// assert!(Config::with_filename("  ").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.filename.trim().is_empty() {
            return Err(ConfigError::InvalidFilename(self.filename.clone()));
        }
        self.refresh.validate()
    }

    /// Resolves the todo file path against the user config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative and the home directory
    /// cannot be determined.
    pub fn storage_path(&self) -> Result<PathBuf> {
        let path = Path::new(&self.filename);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(self.storage_path_in(user_config_dir()?))
    }

    /// Resolves the todo file path against an explicit base directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use jot_config::Config;
    ///
    /// let config = Config::with_filename("todo.json");
    /// assert_eq!(
    ///     config.storage_path_in("/home/me/.config/jot"),
    ///     Path::new("/home/me/.config/jot/todo.json"),
    /// );
    /// ```
    #[must_use]
    pub fn storage_path_in(&self, base: impl AsRef<Path>) -> PathBuf {
        // `join` keeps absolute file names untouched
        base.as_ref().join(&self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.filename, DEFAULT_FILENAME);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.enabled);
        assert_eq!(config.refresh, RefreshConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn blank_filename_is_invalid() {
        let config = Config::with_filename("");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFilename(_))
        ));
    }

    #[test]
    fn invalid_refresh_is_rejected() {
        let config = Config {
            refresh: RefreshConfig::with_interval(1),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRefreshInterval { .. })
        ));
    }

    #[test]
    fn relative_filename_resolves_under_base() {
        let config = Config::with_filename("lists/todo.json");
        assert_eq!(
            config.storage_path_in("/base"),
            Path::new("/base/lists/todo.json")
        );
    }

    #[test]
    fn absolute_filename_is_kept() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("todo.json");
        let config = Config::with_filename(absolute.to_string_lossy());

        assert_eq!(config.storage_path().unwrap(), absolute);
        assert_eq!(config.storage_path_in("/elsewhere"), absolute);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: Config =
            serde_json::from_str(r#"{"filename": "work.json", "enabled": false}"#).unwrap();
        assert_eq!(config.filename, "work.json");
        assert!(!config.enabled);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Where the list lives
                filename: "groceries.json",
                title: "Groceries",
                refresh: { interval_secs: 60 },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.filename, "groceries.json");
        assert_eq!(config.title, "Groceries");
        assert_eq!(config.refresh.interval_secs, 60);
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"refresh": {"interval_secs": 3}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
