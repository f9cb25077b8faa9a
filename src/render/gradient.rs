// src/render/gradient.rs
//! Gradient lookup tables built from a short list of color stops.

use tracing::debug;

use super::color::{Color, mix_colors};
use crate::error::{PaintError, Result};

/// Interpolation reads `src[index + 1]`, so a gradient needs two stops.
pub const MIN_STOPS: usize = 2;

/// Fails with [`PaintError::TooFewStops`] when `stops` cannot form a gradient.
pub fn check_stops(stops: &[Color]) -> Result<()> {
    if stops.len() < MIN_STOPS {
        return Err(PaintError::TooFewStops { got: stops.len() });
    }
    Ok(())
}

/// Fill `dst` with a piecewise-linear interpolation across all of `src`.
///
/// Entry `i` sits at fractional stop position `i / dst.len() * (src.len() - 1)`
/// and is the lower stop faded toward the next one by the fractional part.
/// The position never reaches the last stop, so `dst[0] == src[0]` and the
/// final entry only approaches `src[src.len() - 1]`.
///
/// An empty `dst` is a no-op. Fewer than two stops is rejected before any
/// write.
pub fn compute_gradient(dst: &mut [Color], src: &[Color]) -> Result<()> {
    if dst.is_empty() {
        return Ok(());
    }
    check_stops(src)?;

    let dst_len = dst.len() as f32;
    let spans = (src.len() - 1) as f32;
    let last_pair = src.len() - 2;

    for (i, out) in dst.iter_mut().enumerate() {
        let interp = (i as f32 / dst_len) * spans;
        // f32 loses (n-1)/n < 1 for very long tables
        let index = (interp as usize).min(last_pair);
        let forward = interp - index as f32;
        *out = mix_colors(src[index + 1], src[index], forward);
    }
    Ok(())
}

/// A set of color stops together with the lookup table computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
    colors: Vec<Color>,
}

impl Gradient {
    /// Create a gradient with an empty table. Call [`Gradient::resize`] before
    /// sampling it.
    pub fn new(stops: Vec<Color>) -> Result<Self> {
        check_stops(&stops)?;
        Ok(Self {
            stops,
            colors: Vec::new(),
        })
    }

    /// Create a gradient and compute a table of `len` entries right away.
    pub fn with_len(stops: Vec<Color>, len: usize) -> Result<Self> {
        let mut gradient = Self::new(stops)?;
        gradient.resize(len)?;
        Ok(gradient)
    }

    /// Recompute the table at a new length.
    pub fn resize(&mut self, len: usize) -> Result<()> {
        let mut colors = vec![Color::default(); len];
        compute_gradient(&mut colors, &self.stops)?;
        debug!(len, stops = self.stops.len(), "gradient resized");
        self.colors = colors;
        Ok(())
    }

    /// Replace the stops and recompute the table at its current length.
    pub fn set_stops(&mut self, stops: Vec<Color>) -> Result<()> {
        check_stops(&stops)?;
        self.stops = stops;
        let len = self.colors.len();
        self.resize(len)
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The computed lookup table.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::rgb(0, 0, 0);
    const WHITE: Color = Color::rgb(255, 255, 255);

    #[test]
    fn two_entry_gradient_starts_at_first_stop() {
        let mut dst = [Color::default(); 2];
        compute_gradient(&mut dst, &[BLACK, WHITE]).unwrap();
        assert_eq!(dst[0], BLACK);
        // halfway, truncated
        assert_eq!(dst[1], Color::rgb(127, 127, 127));
    }

    #[test]
    fn last_entry_approaches_final_stop() {
        let mut dst = vec![Color::default(); 256];
        compute_gradient(&mut dst, &[BLACK, WHITE]).unwrap();
        let last = dst[255];
        // 255/256 of the way there
        assert_eq!(last.r, 254);
        assert_eq!(last.a, 255);
    }

    #[test]
    fn channels_never_decrease_along_a_rising_gradient() {
        let stops = [BLACK, Color::rgb(100, 50, 0), WHITE];
        let mut dst = vec![Color::default(); 97];
        compute_gradient(&mut dst, &stops).unwrap();
        for pair in dst.windows(2) {
            assert!(pair[1].r >= pair[0].r, "{:?} -> {:?}", pair[0], pair[1]);
            assert!(pair[1].g >= pair[0].g, "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn hits_middle_stop_exactly() {
        let mid = Color::rgb(10, 200, 30);
        let mut dst = [Color::default(); 4];
        compute_gradient(&mut dst, &[BLACK, mid, WHITE]).unwrap();
        // i = 2 -> interp = 1.0
        assert_eq!(dst[2], mid);
    }

    #[test]
    fn empty_destination_is_a_noop() {
        let mut dst: [Color; 0] = [];
        assert!(compute_gradient(&mut dst, &[BLACK]).is_ok());
    }

    #[test]
    fn rejects_single_stop_without_writing() {
        let mut dst = [Color::rgb(9, 9, 9); 3];
        let err = compute_gradient(&mut dst, &[WHITE]).unwrap_err();
        assert!(matches!(err, PaintError::TooFewStops { got: 1 }));
        assert!(dst.iter().all(|c| *c == Color::rgb(9, 9, 9)));
    }

    #[test]
    fn gradient_tracks_resizes_and_stop_changes() {
        let mut gradient = Gradient::new(vec![BLACK, WHITE]).unwrap();
        assert!(gradient.is_empty());

        gradient.resize(8).unwrap();
        assert_eq!(gradient.len(), 8);
        assert_eq!(gradient.colors()[0], BLACK);

        gradient.set_stops(vec![WHITE, BLACK]).unwrap();
        assert_eq!(gradient.len(), 8);
        assert_eq!(gradient.colors()[0], WHITE);

        assert!(gradient.set_stops(vec![WHITE]).is_err());
        assert_eq!(gradient.stops(), &[WHITE, BLACK]);
    }
}
