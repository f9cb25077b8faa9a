// src/render/mod.rs
//! Pixel-level rendering: colors, gradients, the spectrum painter and the
//! canvas it paints into.

pub mod canvas;
pub mod color;
pub mod gradient;
pub mod painter;

// Re-export commonly used types
pub use canvas::Canvas;
pub use color::{Color, PEAK_BRIGHTNESS, mix_colors};
pub use gradient::{Gradient, compute_gradient};
pub use painter::{paint_spectrum, threshold_row};
