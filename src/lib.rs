// src/lib.rs
//! spectrum-paint - software renderer for real-time audio spectrum frames.
//!
//! The core is [`render`]: gradient lookup tables built from a few color
//! stops, and [`render::paint_spectrum`], which turns one magnitude per column
//! into a bar image with a peak trace. [`view`] wraps those into resizable
//! spectrum and waterfall views, and [`ffi`] exposes the core over a C ABI.
//! [`app`] and [`ui`] drive the terminal preview binary.

pub mod app;
pub mod config;
pub mod error;
pub mod ffi;
pub mod render;
pub mod ui;
pub mod view;

pub use error::{PaintError, Result};
pub use render::{Canvas, Color, Gradient, compute_gradient, mix_colors, paint_spectrum};
