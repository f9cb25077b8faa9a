// src/view/mod.rs
//! Views pair a canvas with the lookup tables needed to paint it.

pub mod spectrum;
pub mod waterfall;

pub use spectrum::SpectrumView;
pub use waterfall::{WaterfallView, paint_waterfall_row};
