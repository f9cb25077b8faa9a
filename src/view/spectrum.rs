// src/view/spectrum.rs
//! Bar-style spectrum view.

use crate::config::SpectrumSettings;
use crate::error::Result;
use crate::render::gradient::check_stops;
use crate::render::{Canvas, Gradient, paint_spectrum};

/// Owns the two gradients and the canvas for the bar view.
///
/// Gradients are sized to the canvas height on every resize, so a frame can
/// be painted straight from them.
#[derive(Debug, Clone)]
pub struct SpectrumView {
    foreground: Gradient,
    background: Gradient,
    canvas: Canvas,
}

impl SpectrumView {
    pub fn new(settings: &SpectrumSettings) -> Result<Self> {
        Ok(Self {
            foreground: Gradient::new(settings.foreground_colors.clone())?,
            background: Gradient::new(settings.background_colors.clone())?,
            canvas: Canvas::default(),
        })
    }

    /// Resize the canvas and both gradients. On error the view is unchanged.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let canvas = Canvas::new(width, height)?;
        let mut foreground = self.foreground.clone();
        foreground.resize(height)?;
        let mut background = self.background.clone();
        background.resize(height)?;

        self.canvas = canvas;
        self.foreground = foreground;
        self.background = background;
        Ok(())
    }

    /// Swap in new colors, keeping the current size. Both stop lists are
    /// checked before either gradient changes.
    pub fn set_colors(&mut self, settings: &SpectrumSettings) -> Result<()> {
        check_stops(&settings.foreground_colors)?;
        check_stops(&settings.background_colors)?;
        self.foreground.set_stops(settings.foreground_colors.clone())?;
        self.background.set_stops(settings.background_colors.clone())
    }

    /// Paint one frame. `data` must hold one magnitude per canvas column.
    pub fn render(&mut self, data: &[u16]) -> Result<()> {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        paint_spectrum(
            width,
            height,
            self.canvas.pixels_mut(),
            data,
            self.foreground.colors(),
            self.background.colors(),
        )
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn foreground(&self) -> &Gradient {
        &self.foreground
    }

    pub fn background(&self) -> &Gradient {
        &self.background
    }
}
