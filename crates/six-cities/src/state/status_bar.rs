//! Status Bar State

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// A request was rejected
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Operation or action that produced the message
    pub source: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - bounded history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Newest at the back
    pub messages: VecDeque<StatusMessage>,
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 50,
        }
    }
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Last rejection reason shown to the user
    pub fn latest_error(&self) -> Option<&StatusMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.kind == StatusKind::Error)
    }

    /// Push a new message, trimming the oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_trims_history() {
        let mut state = StatusBarState {
            max_history: 2,
            ..Default::default()
        };
        for i in 0..3 {
            state.push(StatusMessage::new(StatusKind::Info, format!("m{}", i), "test"));
        }
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.latest().map(|m| m.message.as_str()), Some("m2"));
    }

    #[test]
    fn test_latest_error_skips_newer_info() {
        let mut state = StatusBarState::default();
        state.push(StatusMessage::new(StatusKind::Error, "boom", "offers"));
        state.push(StatusMessage::new(StatusKind::Info, "hello", "user"));
        assert_eq!(state.latest_error().map(|m| m.message.as_str()), Some("boom"));
    }
}
