// src/render/painter.rs
//! Spectrum frame painter: one gradient bar per column plus a peak trace
//! connecting neighbouring columns.

use tracing::trace;

use super::color::{Color, PEAK_BRIGHTNESS};
use crate::error::{Result, area, expect_len};

/// Full-scale magnitudes map onto `height` rows through a divide by this.
pub const MAGNITUDE_SCALE: u64 = 65536;

/// Row that splits a column into background (above) and foreground (below).
///
/// Always `< height` for a non-zero height, since `magnitude <= 65535`.
#[inline]
pub fn threshold_row(magnitude: u16, height: usize) -> usize {
    (magnitude as u64 * height as u64 / MAGNITUDE_SCALE) as usize
}

/// Paint one spectrum frame into `image`.
///
/// `image` is row-major with stride `width`, so pixel `(x, y)` is
/// `image[x + y * width]`. `data` holds one magnitude per column and both
/// gradients hold one color per row.
///
/// For every column, rows `[0, value)` take the background gradient and rows
/// `[value, height)` the foreground gradient. A greyscale trace is then drawn
/// from `value` to the previous column's threshold, both ends included. The
/// first column seeds the previous threshold from itself, so it only gets its
/// own boundary pixel.
///
/// All sizes are checked before the first write.
pub fn paint_spectrum(
    width: usize,
    height: usize,
    image: &mut [Color],
    data: &[u16],
    foreground: &[Color],
    background: &[Color],
) -> Result<()> {
    expect_len("image", area(width, height)?, image.len())?;
    expect_len("magnitude", width, data.len())?;
    expect_len("foreground gradient", height, foreground.len())?;
    expect_len("background gradient", height, background.len())?;

    if width == 0 || height == 0 {
        return Ok(());
    }

    let mut value_previous = 0;
    for (x, &magnitude) in data.iter().enumerate() {
        let value = threshold_row(magnitude, height);
        if x == 0 {
            value_previous = value;
        }

        for y in 0..value {
            image[x + y * width] = background[y];
        }
        for y in value..height {
            image[x + y * width] = foreground[y];
        }

        trace_peak(image, width, x, value, value_previous);
        value_previous = value;
    }

    trace!(width, height, "spectrum frame painted");
    Ok(())
}

/// Mark column `x` from row `from` through row `to`, inclusive.
fn trace_peak(image: &mut [Color], width: usize, x: usize, from: usize, to: usize) {
    let step: isize = if to > from { 1 } else { -1 };
    let mut y = from;
    while y != to {
        image[x + y * width].set_brightness(PEAK_BRIGHTNESS);
        y = y.wrapping_add_signed(step);
    }
    image[x + y * width].set_brightness(PEAK_BRIGHTNESS);
}
