use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::library;
use crate::player::PlayerController;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    startup::init_logging();
    let settings = settings::load_settings();

    let playlist = library::sample_playlist();
    let (engine, backend_events) =
        AudioEngine::new(Duration::from_millis(settings.audio.tick_ms.max(1)));
    let mut controller =
        PlayerController::new(playlist, engine, settings.playback.default_volume);
    let state_changes = controller.subscribe();
    let mut app = App::new(startup::initial_view(&settings));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &backend_events,
        &state_changes,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    controller.backend().shutdown();

    run_result
}
