// src/main.rs
//! Terminal preview for spectrum-paint.
//!
//! Colors can be overridden with a JSON settings document in the
//! `SPECTRUM_PAINT_SETTINGS` environment variable. Logs go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use spectrum_paint::{config::Settings, ui};
use tracing_subscriber::EnvFilter;

const SETTINGS_ENV: &str = "SPECTRUM_PAINT_SETTINGS";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match std::env::var(SETTINGS_ENV) {
        Ok(json) => {
            Settings::from_json(&json).with_context(|| format!("parsing {SETTINGS_ENV}"))?
        }
        Err(_) => Settings::default(),
    };

    ui::run(&settings)
}
