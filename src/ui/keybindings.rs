// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    SwitchView,
    TogglePause,
    Faster,
    Slower,
    Quit,
    None,
}

/// Convert a key event to a view action.
pub fn key_to_action(key: &KeyEvent) -> ViewAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return ViewAction::Quit;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Char('w') => ViewAction::SwitchView,
        KeyCode::Char(' ') => ViewAction::TogglePause,
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => ViewAction::Faster,
        KeyCode::Down | KeyCode::Char('-') => ViewAction::Slower,
        KeyCode::Char('q') | KeyCode::Esc => ViewAction::Quit,
        _ => ViewAction::None,
    }
}
