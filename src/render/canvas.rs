// src/render/canvas.rs
//! Owned image buffer that the views paint into.

use image::RgbaImage;
use tracing::debug;

use super::color::Color;
use crate::error::{PaintError, Result, area};

/// A `width x height` row-major color buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let mut canvas = Self::default();
        canvas.resize(width, height)?;
        Ok(canvas)
    }

    /// Reallocate for new dimensions. Every pixel is reset to
    /// `Color::default()`.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        let len = area(width, height)?;
        self.pixels = vec![Color::default(); len];
        self.width = width;
        self.height = height;
        debug!(width, height, "canvas resized");
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(x + y * self.width).copied()
    }

    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> Option<&mut [Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get_mut(start..start + self.width)
    }

    /// Rows from top to bottom, `height` of them even when the width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// The pixels as a packed RGBA byte stream.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an [`RgbaImage`].
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let overflow = PaintError::DimensionsOverflow {
            width: self.width,
            height: self.height,
        };
        let (Ok(width), Ok(height)) = (u32::try_from(self.width), u32::try_from(self.height))
        else {
            return Err(overflow);
        };
        RgbaImage::from_raw(width, height, self.as_bytes().to_vec()).ok_or(overflow)
    }
}
