//! Global actions - not tied to any specific view
//!
//! These actions affect the application as a whole.

use ratatui::crossterm::event::KeyEvent;

use crate::routes::Route;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Show another view
    Navigate(Route),
    /// Return to the previously shown view
    Back,
    /// Quit the application
    Quit,
}
