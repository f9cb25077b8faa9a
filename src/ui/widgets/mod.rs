// src/ui/widgets/mod.rs
//! Custom widgets for the preview UI.

pub mod pixels;
pub mod status;

// Re-export widget rendering functions
pub use pixels::{HalfBlocks, render_pixels};
pub use status::{StatusLine, render_status};
