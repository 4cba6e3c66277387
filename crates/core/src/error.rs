//! Error types for storage, the document format, and the controller.

use std::path::PathBuf;

use jot_config::ConfigError;

/// Errors reported by a [`Storage`](crate::Storage) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Nothing is stored at the location.
    #[error("no todo file at {path}")]
    NotFound {
        /// The missing location.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The location being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Wraps an I/O error, classifying `NotFound` separately.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns `true` if the location simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors converting between bytes and checklist items.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file is not valid UTF-8.
    #[error("todo file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The file does not have the expected shape.
    #[error("malformed todo file: {0}")]
    Parse(#[from] serde_json5::Error),

    /// The items could not be serialized.
    #[error("failed to serialize todo list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors surfaced by the [`ChecklistController`](crate::ChecklistController).
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The configuration does not resolve to a usable todo file path.
    #[error("invalid todo configuration: {0}")]
    Config(#[from] ConfigError),

    /// The todo file could not be created at startup.
    #[error("failed to create todo file: {source}")]
    StorageInit {
        /// The underlying storage error.
        #[source]
        source: StorageError,
    },

    /// Reading the todo file failed for a reason other than absence.
    #[error("failed to read todo file: {source}")]
    Read {
        /// The underlying storage error.
        #[source]
        source: StorageError,
    },

    /// The todo file exists but could not be parsed.
    #[error("could not load {path}: {source}")]
    Deserialize {
        /// The file that failed to parse.
        path: PathBuf,
        /// The parse failure.
        #[source]
        source: DocumentError,
    },

    /// The todo list could not be serialized.
    #[error(transparent)]
    Serialize(DocumentError),

    /// Writing the todo file failed; the in-memory list is kept.
    #[error("failed to save todo file: {source}")]
    Write {
        /// The underlying storage error.
        #[source]
        source: StorageError,
    },

    /// Saving is refused because the file on disk could not be parsed.
    #[error("not saving over unreadable todo file {path}; fix or remove it, then refresh")]
    PersistBlocked {
        /// The unreadable file.
        path: PathBuf,
    },
}

impl ControllerError {
    /// Returns `true` if the widget cannot operate at all after this error.
    ///
    /// Hosts should disable the panel on fatal errors and keep running on
    /// the others.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::StorageInit { .. })
    }
}

/// A specialized Result type for controller operations.
pub type Result<T> = std::result::Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_classifies_not_found() {
        let err = StorageError::from_io(
            "/tmp/x",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());

        let err = StorageError::from_io(
            "/tmp/x",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn fatal_errors() {
        let init = ControllerError::StorageInit {
            source: StorageError::NotFound {
                path: PathBuf::from("/x"),
            },
        };
        assert!(init.is_fatal());

        let write = ControllerError::Write {
            source: StorageError::NotFound {
                path: PathBuf::from("/x"),
            },
        };
        assert!(!write.is_fatal());
    }
}
