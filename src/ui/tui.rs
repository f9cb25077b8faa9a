// src/ui/tui.rs
//! Terminal setup and the preview event loop.

use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;

use crate::{
    app::App,
    config::Settings,
    ui::layout::{canvas_size, compute_layout},
};

/// Roughly 30 frames per second.
const TICK_RATE: Duration = Duration::from_millis(33);

/// Run the preview until the user quits. The terminal is restored even when
/// the loop fails.
pub fn run(settings: &Settings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = App::new(settings).and_then(|mut app| event_loop(&mut terminal, &mut app));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let size = terminal.size()?;
        let layout = compute_layout(Rect::new(0, 0, size.width, size.height));
        let (width, height) = canvas_size(layout.view_area);
        app.resize(width, height)?;

        terminal.draw(|f| app.draw(f))?;

        let timeout = TICK_RATE.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.on_key(key) {
                    info!(frames = app.frames_rendered, "preview closed");
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            app.tick(dt)?;
        }
    }
}
