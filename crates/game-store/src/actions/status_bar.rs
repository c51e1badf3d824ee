//! Status Bar Actions
//!
//! Actions for the status bar - user feedback for operations.

use crate::state::StatusKind;

/// Actions for the status bar
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Show a new status message
    Push { kind: StatusKind, message: String },
    /// Clear all status messages
    Clear,
}

impl StatusBarAction {
    /// Create a success status action
    pub fn success(message: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    /// Create an error status action
    pub fn error(message: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Create an info status action
    pub fn info(message: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    /// Create a running status action
    pub fn running(message: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Running,
            message: message.into(),
        }
    }
}
