//! Colour palette and prebuilt styles for the six-cities terminal views

use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Listing decorations
    pub premium: Color,
    pub favorite: Color,
    pub rating: Color,
    pub price: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Map markers
    pub marker_default: Color,
    pub marker_active: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::SKY.c400,
            accent_secondary: tailwind::SKY.c600,

            premium: tailwind::AMBER.c400,
            favorite: tailwind::ORANGE.c500,
            rating: tailwind::YELLOW.c400,
            price: tailwind::EMERALD.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            marker_default: tailwind::SKY.c300,
            marker_active: tailwind::ORANGE.c500,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Enter" in "Enter open")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the active city tab
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive city tabs
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the row under the cursor
    pub fn list_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal rows
    pub fn list_row(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the "Premium" badge
    pub fn premium_badge(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.premium)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the bookmark marker of favorited offers
    pub fn favorite_marker(&self) -> Style {
        Style::default()
            .fg(self.favorite)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for rating stars
    pub fn rating_stars(&self) -> Style {
        Style::default().fg(self.rating)
    }

    /// Style for prices
    pub fn price(&self) -> Style {
        Style::default()
            .fg(self.price)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
