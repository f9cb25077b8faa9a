// src/app/state.rs
//! Application state management.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use tracing::debug;

use crate::{
    app::signal::SignalGenerator,
    config::Settings,
    ui::{
        keybindings::{ViewAction, key_to_action},
        layout::compute_layout,
        widgets::{StatusLine, render_pixels, render_status},
    },
    view::{SpectrumView, WaterfallView},
};

/// Step applied to the animation speed by the faster/slower keys.
const SPEED_STEP: f32 = 1.25;

/// Which view the preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Spectrum,
    Waterfall,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Spectrum => ViewMode::Waterfall,
            ViewMode::Waterfall => ViewMode::Spectrum,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Spectrum => "1: Spectrum",
            ViewMode::Waterfall => "2: Waterfall",
        }
    }
}

/// Main application state.
pub struct App {
    /// View currently on screen
    pub mode: ViewMode,
    /// Frozen animation
    pub paused: bool,
    /// Frames painted since startup
    pub frames_rendered: u64,

    spectrum: SpectrumView,
    waterfall: WaterfallView,
    signal: SignalGenerator,
    /// Magnitudes for the current frame, one per canvas column
    frame: Vec<u16>,
    /// Canvas size in pixels
    size: (usize, usize),
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            mode: ViewMode::Spectrum,
            paused: false,
            frames_rendered: 0,
            spectrum: SpectrumView::new(&settings.spectrum)?,
            waterfall: WaterfallView::new(&settings.waterfall)?,
            signal: SignalGenerator::new(),
            frame: Vec::new(),
            size: (0, 0),
        })
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            ViewAction::SwitchView => self.mode = self.mode.toggle(),
            ViewAction::TogglePause => self.paused = !self.paused,
            ViewAction::Faster => self.signal.set_speed(self.signal.speed() * SPEED_STEP),
            ViewAction::Slower => self.signal.set_speed(self.signal.speed() / SPEED_STEP),
            ViewAction::Quit => return true,
            ViewAction::None => {}
        }
        false
    }

    /// Match both canvases to a new pixel size. Unchanged sizes are a no-op.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if self.size == (width, height) {
            return Ok(());
        }
        debug!(width, height, "preview resized");
        self.spectrum.resize(width, height)?;
        self.waterfall.resize(width, height)?;
        self.frame = vec![0; width];
        self.size = (width, height);
        Ok(())
    }

    /// Advance the signal and paint a frame into both views.
    pub fn tick(&mut self, dt: f32) -> Result<()> {
        if self.paused {
            return Ok(());
        }
        self.signal.advance(dt);
        self.signal.fill(&mut self.frame);
        self.spectrum.render(&self.frame)?;
        self.waterfall.render(&self.frame)?;
        self.frames_rendered += 1;
        Ok(())
    }

    pub fn spectrum(&self) -> &SpectrumView {
        &self.spectrum
    }

    pub fn waterfall(&self) -> &WaterfallView {
        &self.waterfall
    }

    /// Draw the application UI.
    pub fn draw(&self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());

        match self.mode {
            ViewMode::Spectrum => render_pixels(
                f,
                layout.view_area,
                self.mode.title(),
                self.spectrum.canvas().rows(),
            ),
            ViewMode::Waterfall => render_pixels(
                f,
                layout.view_area,
                self.mode.title(),
                self.waterfall.rows_newest_first(),
            ),
        }

        render_status(
            f,
            layout.status_area,
            &StatusLine {
                size: self.size,
                frames: self.frames_rendered,
                speed: self.signal.speed(),
                paused: self.paused,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tick_paints_both_views() {
        let mut app = App::new(&Settings::default()).unwrap();
        app.resize(12, 10).unwrap();
        app.tick(0.05).unwrap();

        assert_eq!(app.frames_rendered, 1);
        assert!(
            app.spectrum()
                .canvas()
                .pixels()
                .iter()
                .all(|c| *c != Color::default())
        );
        assert_eq!(app.waterfall().newest_row(), Some(0));
    }

    #[test]
    fn paused_app_skips_frames() {
        let mut app = App::new(&Settings::default()).unwrap();
        app.resize(4, 4).unwrap();
        assert!(!app.on_key(press(KeyCode::Char(' '))));
        app.tick(0.05).unwrap();
        assert_eq!(app.frames_rendered, 0);
    }

    #[test]
    fn keys_switch_view_and_quit() {
        let mut app = App::new(&Settings::default()).unwrap();
        app.on_key(press(KeyCode::Tab));
        assert_eq!(app.mode, ViewMode::Waterfall);
        app.on_key(press(KeyCode::Tab));
        assert_eq!(app.mode, ViewMode::Spectrum);
        assert!(app.on_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn resize_to_empty_canvas_still_ticks() {
        let mut app = App::new(&Settings::default()).unwrap();
        app.resize(0, 0).unwrap();
        app.tick(0.05).unwrap();
        assert_eq!(app.frames_rendered, 1);
    }
}
