// src/ui/layout.rs
//! Layout computation for the preview.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Bordered block holding the painted canvas
    pub view_area: Rect,
    /// One-line status bar at the bottom
    pub status_area: Rect,
}

/// Split the terminal into the view and the status bar.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    ComputedLayout {
        view_area: chunks[0],
        status_area: chunks[1],
    }
}

/// Canvas size in pixels for a view area. Each terminal cell shows two
/// pixel rows, top half as foreground and bottom half as background.
pub fn canvas_size(view_area: Rect) -> (usize, usize) {
    let inner = Block::default().borders(Borders::ALL).inner(view_area);
    (inner.width as usize, inner.height as usize * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_takes_the_last_row() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_area, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.view_area, Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn canvas_uses_two_pixels_per_cell() {
        assert_eq!(canvas_size(Rect::new(0, 0, 80, 23)), (78, 42));
        assert_eq!(canvas_size(Rect::new(0, 0, 1, 1)), (0, 0));
    }
}
