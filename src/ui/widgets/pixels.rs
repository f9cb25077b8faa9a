// src/ui/widgets/pixels.rs
//! Shows a painted canvas in the terminal with half-block cells.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color as TermColor,
    widgets::{Block, Borders, Widget},
};

use crate::render::Color;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Pixel rows drawn two per terminal row.
pub struct HalfBlocks<'a> {
    rows: Vec<&'a [Color]>,
}

impl<'a> HalfBlocks<'a> {
    pub fn new(rows: impl IntoIterator<Item = &'a [Color]>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

impl Widget for HalfBlocks<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (cy, pair) in self.rows.chunks(2).take(area.height as usize).enumerate() {
            let top = pair[0];
            let bottom = pair.get(1).copied();
            for (cx, &px) in top.iter().take(area.width as usize).enumerate() {
                let pos = Position::new(area.x + cx as u16, area.y + cy as u16);
                let Some(cell) = buf.cell_mut(pos) else {
                    continue;
                };
                cell.set_char(HALF_BLOCK).set_fg(term_color(px));
                if let Some(&below) = bottom.and_then(|row| row.get(cx)) {
                    cell.set_bg(term_color(below));
                }
            }
        }
    }
}

/// Render pixel rows inside a titled, bordered block.
pub fn render_pixels<'a>(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    rows: impl Iterator<Item = &'a [Color]>,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(HalfBlocks::new(rows), inner);
}
