//! Status bar actions

use crate::state::StatusKind;

#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Push a new message
    Push {
        kind: StatusKind,
        message: String,
        source: String,
    },
}

impl StatusBarAction {
    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Info,
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn warning(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Warning,
            message: message.into(),
            source: source.into(),
        }
    }
}
