//! Where configuration lives on disk, and how it is read.
//!
//! Config files go through a JSON5 parser, which also accepts plain JSON.
//! The first existing file among these wins:
//!
//! 1. `./jot.json5`, then `./jot.json`
//! 2. `<config dir>/jot/config.json5`, then `<config dir>/jot/config.json`
//!
//! where `<config dir>` is the platform configuration directory (for example
//! `~/.config` on Linux).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

const APP_DIR: &str = "jot";
const LOCAL_NAMES: [&str; 2] = ["jot.json5", "jot.json"];
const USER_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Lists every place a config file may live, most specific first.
fn candidates() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = LOCAL_NAMES.iter().map(PathBuf::from).collect();
    if let Ok(dir) = user_config_dir() {
        paths.extend(USER_NAMES.iter().map(|name| dir.join(name)));
    }
    paths
}

/// Returns the first config file that exists, or `None` when the built-in
/// defaults apply.
///
/// # Examples
///
/// ```no_run
/// use jot_config::files::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    candidates().into_iter().find(|path| path.is_file())
}

/// Returns `<config dir>/jot`, against which relative todo file names are
/// resolved.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has no config
/// directory.
pub fn user_config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir())
}

/// Returns `<data dir>/jot`, where the log file is written.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has no data
/// directory.
pub fn user_data_dir() -> Result<PathBuf> {
    app_dir(dirs::data_dir())
}

fn app_dir(base: Option<PathBuf>) -> Result<PathBuf> {
    base.map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Parses the JSON5 (or JSON) file at `path` into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not describe a `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    debug!(?path, "reading config file");
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&text)?)
}
