use std::env;
use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::app::View;
use crate::config::{Settings, ViewSetting};

/// Map the configured startup view onto the app model.
pub fn initial_view(settings: &Settings) -> View {
    match settings.ui.initial_view {
        ViewSetting::Home => View::Home,
        ViewSetting::Search => View::Search,
        ViewSetting::Library => View::Library,
    }
}

/// Set up `tracing` when `VIVACE_LOG` holds a filter (e.g. `debug` or
/// `vivace=trace`). Output goes to `vivace.log` in the working directory
/// so the alternate-screen TUI stays clean; without the variable, no
/// subscriber is installed and events are dropped.
pub fn init_logging() {
    let Ok(filter) = env::var("VIVACE_LOG") else {
        return;
    };
    if filter.trim().is_empty() {
        return;
    }

    let file = match File::create("vivace.log") {
        Ok(f) => f,
        Err(e) => {
            eprintln!("vivace: cannot open vivace.log, logging disabled: {e}");
            return;
        }
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("vivace: logging already initialized");
    }
}
