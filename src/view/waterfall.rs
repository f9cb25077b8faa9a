// src/view/waterfall.rs
//! Scrolling waterfall view: one canvas row per frame.

use crate::config::WaterfallSettings;
use crate::error::{PaintError, Result, expect_len};
use crate::render::painter::MAGNITUDE_SCALE;
use crate::render::{Canvas, Color, Gradient};

/// Entries in the waterfall's color lookup table.
pub const LOOKUP_SIZE: usize = 256;

/// Map each magnitude through `lookup` into `row`.
///
/// The lookup index is `magnitude * lookup.len() / 65536`, so a 256-entry
/// table uses the magnitude's high byte.
pub fn paint_waterfall_row(row: &mut [Color], data: &[u16], lookup: &[Color]) -> Result<()> {
    expect_len("magnitude", row.len(), data.len())?;
    if lookup.is_empty() {
        return Err(PaintError::BufferSize {
            what: "lookup",
            expected: LOOKUP_SIZE,
            got: 0,
        });
    }
    let entries = lookup.len() as u64;
    for (px, &magnitude) in row.iter_mut().zip(data) {
        *px = lookup[(magnitude as u64 * entries / MAGNITUDE_SCALE) as usize];
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct WaterfallView {
    lookup: Gradient,
    canvas: Canvas,
    /// Row the next frame is written to.
    line: usize,
    frames: usize,
}

impl WaterfallView {
    pub fn new(settings: &WaterfallSettings) -> Result<Self> {
        Ok(Self {
            lookup: Gradient::with_len(settings.colors.clone(), LOOKUP_SIZE)?,
            canvas: Canvas::default(),
            line: 0,
            frames: 0,
        })
    }

    /// Resize and clear the history.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.canvas.resize(width, height)?;
        self.line = 0;
        self.frames = 0;
        Ok(())
    }

    pub fn set_colors(&mut self, settings: &WaterfallSettings) -> Result<()> {
        self.lookup.set_stops(settings.colors.clone())
    }

    /// Write one frame into the next row, wrapping at the bottom.
    pub fn render(&mut self, data: &[u16]) -> Result<()> {
        expect_len("magnitude", self.canvas.width(), data.len())?;
        let height = self.canvas.height();
        let Some(row) = self.canvas.row_mut(self.line) else {
            return Ok(());
        };
        paint_waterfall_row(row, data, self.lookup.colors())?;
        self.line = (self.line + 1) % height;
        self.frames = self.frames.saturating_add(1);
        Ok(())
    }

    /// Row holding the latest frame, if any frame was rendered since the last
    /// resize.
    pub fn newest_row(&self) -> Option<usize> {
        let height = self.canvas.height();
        if self.frames == 0 || height == 0 {
            return None;
        }
        Some((self.line + height - 1) % height)
    }

    /// Canvas rows ordered from the latest frame back to the oldest.
    pub fn rows_newest_first(&self) -> impl Iterator<Item = &[Color]> {
        let height = self.canvas.height();
        let newest = self.newest_row().unwrap_or(0);
        (0..height).filter_map(move |age| self.canvas.row((newest + height - age) % height))
    }

    pub fn lookup(&self) -> &[Color] {
        self.lookup.colors()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}
