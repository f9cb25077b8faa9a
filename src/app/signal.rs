// src/app/signal.rs
//! Synthetic magnitude source for the preview.
//!
//! Audio capture and spectral analysis live outside this crate, so the
//! preview animates a few moving bumps instead and smooths them the way a
//! real analyzer would.

/// Slowest and fastest animation speed multipliers.
pub const SPEED_RANGE: (f32, f32) = (0.25, 4.0);

/// Turn a level in `[0, 1]` (1 = loud) into a magnitude whose threshold row
/// sits `level` of the way up from the bottom of the canvas.
#[inline]
pub fn level_to_magnitude(level: f32) -> u16 {
    ((1.0 - level.clamp(0.0, 1.0)) * u16::MAX as f32) as u16
}

/// Animated spectrum-like levels with per-column smoothing.
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    /// Animation clock in seconds
    time: f32,
    /// Multiplier applied to elapsed time
    speed: f32,
    /// Smoothed level per column
    smoothed: Vec<f32>,
    /// Smoothing factor (0.0 = no smoothing, 1.0 = frozen)
    smoothing_factor: f32,
}

impl SignalGenerator {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            smoothed: Vec::new(),
            smoothing_factor: 0.6,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt.max(0.0) * self.speed;
    }

    /// Raw level at a horizontal position in `[0, 1)`.
    fn level_at(&self, position: f32) -> f32 {
        let t = self.time;
        let bass = (-position * 6.0).exp() * (0.6 + 0.4 * (t * 2.1).sin().abs());
        let center = 0.5 + 0.4 * (t * 0.37).sin();
        let sweep = 0.7 * (-((position - center) / 0.04).powi(2)).exp();
        let ripple = 0.08 * ((position * 40.0 + t * 3.0).sin() * 0.5 + 0.5);
        (bass + sweep + ripple).clamp(0.0, 1.0)
    }

    /// Write one frame of magnitudes, one per element of `out`.
    pub fn fill(&mut self, out: &mut [u16]) {
        if self.smoothed.len() != out.len() {
            self.smoothed = vec![0.0; out.len()];
        }
        let columns = out.len().max(1) as f32;
        for (i, magnitude) in out.iter_mut().enumerate() {
            let level = self.level_at(i as f32 / columns);
            let smoothed = &mut self.smoothed[i];
            *smoothed = self.smoothing_factor * *smoothed + (1.0 - self.smoothing_factor) * level;
            *magnitude = level_to_magnitude(*smoothed);
        }
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
