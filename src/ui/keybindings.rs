// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    Enter,
    Back,
    Quit,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right => NavigationAction::Enter,
        KeyCode::Left | KeyCode::Esc => NavigationAction::Back,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}
