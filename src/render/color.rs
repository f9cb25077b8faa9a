// src/render/color.rs
//! RGBA pixel value and the per-channel blend primitives.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Brightness given to the red, green and blue channels of a peak marker.
pub const PEAK_BRIGHTNESS: u8 = 255;

/// One 8-bit RGBA pixel.
///
/// The field order is part of the C layout: a slice of colors is a packed
/// RGBA byte stream (see [`bytemuck::cast_slice`]).
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
#[serde(from = "ColorRepr", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Stops may be written as `[r, g, b]` (opaque) or `[r, g, b, a]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Color::rgb(r, g, b),
            ColorRepr::Rgba([r, g, b, a]) => Color::new(r, g, b, a),
        }
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Blend `self` with `other`, giving `self` a weight of `self_percent`.
    #[inline]
    pub fn mix(self, other: Color, self_percent: f32) -> Color {
        mix_colors(self, other, self_percent)
    }

    /// Same color with red, green and blue replaced by `brightness`.
    #[inline]
    pub fn with_brightness(self, brightness: u8) -> Color {
        Color {
            r: brightness,
            g: brightness,
            b: brightness,
            a: self.a,
        }
    }

    /// In-place form of [`Color::with_brightness`]. Alpha is left alone.
    #[inline]
    pub fn set_brightness(&mut self, brightness: u8) {
        *self = self.with_brightness(brightness);
    }

    /// True when red, green and blue all equal `brightness`.
    pub fn is_grey(&self, brightness: u8) -> bool {
        self.r == brightness && self.g == brightness && self.b == brightness
    }
}

#[inline]
fn mix_channel(a: u8, b: u8, a_percent: f32, b_percent: f32) -> u8 {
    // `as` truncates toward zero; out-of-range weights saturate
    (a as f32 * a_percent + b as f32 * b_percent) as u8
}

/// Linear blend of two colors: each channel (alpha included) is
/// `a * a_percent + b * (1 - a_percent)`, truncated to `u8`.
pub fn mix_colors(a: Color, b: Color, a_percent: f32) -> Color {
    let b_percent = 1.0 - a_percent;
    Color {
        r: mix_channel(a.r, b.r, a_percent, b_percent),
        g: mix_channel(a.g, b.g, a_percent, b_percent),
        b: mix_channel(a.b, b.b, a_percent, b_percent),
        a: mix_channel(a.a, b.a, a_percent, b_percent),
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color::new(r, g, b, a)
    }
}
