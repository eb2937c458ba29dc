use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, View};
use crate::config;
use crate::player::{BackendEvent, MediaBackend, PlayerController};
use crate::ui;

enum Action {
    None,
    Redraw,
    Quit,
}

/// Main terminal event loop: routes backend notifications into the
/// playback core, redraws when the core announces a change and dispatches
/// key input. Returns `Ok(())` when shutdown is requested.
pub fn run<B: MediaBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlayerController<B>,
    backend_events: &Receiver<BackendEvent>,
    state_changes: &Receiver<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dirty = true;

    loop {
        while let Ok(event) = backend_events.try_recv() {
            controller.handle_backend_event(event);
        }

        if state_changes.try_iter().count() > 0 {
            dirty = true;
        }

        if dirty {
            app.clamp_cursor(controller.playlist());
            terminal.draw(|frame| {
                ui::draw(
                    frame,
                    app,
                    controller.playlist(),
                    controller.state(),
                    controller.current_track(),
                )
            })?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key_event(key, settings, app, controller) {
                    Action::Quit => break,
                    Action::Redraw => dirty = true,
                    Action::None => {}
                }
            }
        }
    }

    Ok(())
}

fn handle_key_event<B: MediaBackend>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlayerController<B>,
) -> Action {
    if app.search_input {
        return handle_search_input(key, app, controller);
    }

    match key.code {
        KeyCode::Char('q') => return Action::Quit,

        KeyCode::Char('1') => app.set_view(View::Home),
        KeyCode::Char('2') => app.set_view(View::Search),
        KeyCode::Char('3') => app.set_view(View::Library),
        KeyCode::Char('/') => app.enter_search_input(),

        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(controller.playlist()),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),

        KeyCode::Enter => play_selected(app, controller),

        KeyCode::Char(' ') | KeyCode::Char('p') => controller.toggle_play_pause(),
        KeyCode::Char('l') => controller.next(),
        KeyCode::Char('h') => controller.previous(),

        KeyCode::Char('L') | KeyCode::Right => scrub(controller, settings.controls.scrub_seconds as f64),
        KeyCode::Char('H') | KeyCode::Left => scrub(controller, -(settings.controls.scrub_seconds as f64)),

        KeyCode::Char('+') | KeyCode::Char('=') => {
            let volume = controller.state().volume + settings.controls.volume_step;
            controller.set_volume(volume);
        }
        KeyCode::Char('-') => {
            let volume = controller.state().volume - settings.controls.volume_step;
            controller.set_volume(volume);
        }
        KeyCode::Char('m') => controller.toggle_mute(),

        KeyCode::Char('s') if app.view == View::Library => {
            app.cycle_sort_field(controller.playlist());
        }
        KeyCode::Esc if app.view == View::Search => app.clear_search(),

        _ => return Action::None,
    }

    Action::Redraw
}

fn handle_search_input<B: MediaBackend>(
    key: KeyEvent,
    app: &mut App,
    controller: &mut PlayerController<B>,
) -> Action {
    match key.code {
        KeyCode::Esc => app.exit_search_input(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_query.clear();
            app.cursor = 0;
        }
        KeyCode::Enter => {
            app.exit_search_input();
            play_selected(app, controller);
        }
        KeyCode::Down => app.cursor_down(controller.playlist()),
        KeyCode::Up => app.cursor_up(),
        KeyCode::Char(c) if !c.is_control() => app.push_search_char(c),
        _ => return Action::None,
    }

    Action::Redraw
}

fn play_selected<B: MediaBackend>(app: &App, controller: &mut PlayerController<B>) {
    if let Some(index) = app.selected_index(controller.playlist()) {
        if let Err(err) = controller.select_track(index) {
            // Visible indices come from the playlist, so this only fires
            // if the list changed mid-dispatch.
            tracing::warn!(%err, "could not play selected track");
        }
    }
}

fn scrub<B: MediaBackend>(controller: &mut PlayerController<B>, delta: f64) {
    let position = controller.state().position_secs + delta;
    controller.seek(position);
}
