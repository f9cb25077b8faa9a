// src/app/mod.rs
//! Application module - preview state and the synthetic signal feeding it.

pub mod signal;
pub mod state;

// Re-export the App struct
pub use signal::SignalGenerator;
pub use state::{App, ViewMode};
