//! One-line messages shown in the status bar.

use jot_core::ControllerError;

/// How prominently a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation of something the user asked for.
    Info,
    /// The list is usable but something needs attention.
    Warning,
    /// An operation failed.
    Error,
}

/// A status message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub text: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

impl From<&ControllerError> for Notice {
    /// An unreadable file is a warning: the panel keeps working, it only
    /// refuses to save. Everything else is an error.
    fn from(err: &ControllerError) -> Self {
        match err {
            ControllerError::Deserialize { .. } | ControllerError::PersistBlocked { .. } => {
                Self::warning(err.to_string())
            }
            _ => Self::error(err.to_string()),
        }
    }
}
