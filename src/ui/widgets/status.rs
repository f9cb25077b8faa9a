// src/ui/widgets/status.rs
//! One-line status bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Values shown in the status bar.
pub struct StatusLine {
    pub size: (usize, usize),
    pub frames: u64,
    pub speed: f32,
    pub paused: bool,
}

impl StatusLine {
    fn line(&self) -> Line<'static> {
        let (width, height) = self.size;
        let state = if self.paused { "paused" } else { "live" };
        Line::from(vec![
            Span::styled(format!(" {state} "), Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(format!(
                " {width}x{height}px | frame {} | speed x{:.2} | Tab: view  Space: pause  +/-: speed  q: quit",
                self.frames, self.speed
            )),
        ])
    }
}

/// Render the status bar.
pub fn render_status(f: &mut Frame<'_>, area: Rect, status: &StatusLine) {
    f.render_widget(Paragraph::new(status.line()), area);
}
