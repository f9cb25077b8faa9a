// src/ui/mod.rs
//! UI module - terminal preview rendering and input.

pub mod keybindings;
pub mod layout;
pub mod tui;
pub mod widgets;

// Re-export main entry point
pub use tui::run;
