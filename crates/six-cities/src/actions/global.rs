//! Global actions

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Startup: check the stored session and load offers
    Bootstrap,
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
}
