//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Operation that produced the message
    pub source: String,
    /// Older rejection still worth showing when a newer message hides it
    pub last_error: Option<String>,
    /// Colour based on the message kind
    pub message_style: Style,
    pub error_style: Style,
    pub bg_color: Color,
    /// Style for metadata (timestamp, source)
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);
        let error_style = Style::default().fg(theme.status_error);

        let Some(msg) = state.status_bar.latest() else {
            return Self {
                emoji: "👋",
                message: "Welcome to six cities".to_string(),
                timestamp: String::new(),
                source: String::new(),
                last_error: None,
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                error_style,
                bg_color: theme.bg_primary,
                metadata_style,
            };
        };

        let fg_color = match msg.kind {
            StatusKind::Success => theme.status_success,
            StatusKind::Error => theme.status_error,
            StatusKind::Warning => theme.status_warning,
            StatusKind::Info => theme.status_info,
        };
        let last_error = match msg.kind {
            StatusKind::Error => None,
            _ => state
                .status_bar
                .latest_error()
                .map(|e| format!("last error: {}", e.message)),
        };

        Self {
            emoji: msg.kind.emoji(),
            message: msg.message.clone(),
            timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
            source: msg.source.clone(),
            last_error,
            message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            error_style,
            bg_color: theme.bg_primary,
            metadata_style,
        }
    }
}
