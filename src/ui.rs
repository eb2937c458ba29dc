//! UI rendering: sidebar, the active main view and the transport bar.
//!
//! Everything here is a pure function of the app state plus the playback
//! snapshot; drawing never mutates either.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, View};
use crate::library::{Playlist, Track, format_time, library_stats};
use crate::player::PlaybackState;

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    playlist: &Playlist,
    state: &PlaybackState,
    current: Option<&Track>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(5)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(1)])
        .split(rows[0]);

    draw_sidebar(frame, app, columns[0]);

    match app.view {
        View::Home => draw_home(frame, app, playlist, current, columns[1]),
        View::Search => draw_search(frame, app, playlist, current, columns[1]),
        View::Library => draw_library(frame, app, playlist, current, columns[1]),
    }

    draw_transport(frame, state, current, rows[1]);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|view| {
            let marker = if *view == app.view { "> " } else { "  " };
            let line = format!("{marker}{}", view.label());
            if *view == app.view {
                ListItem::new(line).style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" vivace ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 1,
                bottom: 0,
            }),
    );
    frame.render_widget(list, area);
}

fn draw_home(frame: &mut Frame, app: &App, playlist: &Playlist, current: Option<&Track>, area: Rect) {
    let albums = playlist.albums();
    let shelf_height = (albums.len() as u16 + 2).min(8);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(shelf_height),
            Constraint::Min(1),
        ])
        .split(area);

    let header = Paragraph::new(format!(
        "{}\nReady to discover some amazing music?",
        greeting()
    ))
    .block(Block::default().borders(Borders::NONE).padding(Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }));
    frame.render_widget(header, chunks[0]);

    let shelf_items: Vec<ListItem> = albums
        .iter()
        .map(|group| {
            ListItem::new(format!(
                "{} - {} ({} tracks)",
                group.album,
                group.artist,
                group.track_indices.len()
            ))
        })
        .collect();
    let shelf =
        List::new(shelf_items).block(Block::default().borders(Borders::ALL).title(" albums "));
    frame.render_widget(shelf, chunks[1]);

    draw_track_list(frame, app, playlist, current, chunks[2], " all tracks ");
}

fn draw_search(
    frame: &mut Frame,
    app: &App,
    playlist: &Playlist,
    current: Option<&Track>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let cursor = if app.search_input { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", app.search_query, cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(if app.search_input {
                " search (esc done, ctrl-u clear) "
            } else {
                " search (/ to type) "
            }),
    );
    frame.render_widget(input, chunks[0]);

    if app.search_query.trim().is_empty() {
        // No query: show the browse shelf, not an (empty) result list.
        let albums = playlist.albums();
        let items: Vec<ListItem> = albums
            .iter()
            .map(|group| ListItem::new(format!("{} - {}", group.album, group.artist)))
            .collect();
        let browse =
            List::new(items).block(Block::default().borders(Borders::ALL).title(" browse all "));
        frame.render_widget(browse, chunks[1]);
    } else if app.visible_indices(playlist).is_empty() {
        let empty = Paragraph::new(format!("No results found for \"{}\"", app.search_query.trim()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" results "))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, chunks[1]);
    } else {
        draw_track_list(frame, app, playlist, current, chunks[1], " results ");
    }
}

fn draw_library(
    frame: &mut Frame,
    app: &App,
    playlist: &Playlist,
    current: Option<&Track>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let stats = library_stats(playlist);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[0]);

    let card = |value: String, label: &str| {
        Paragraph::new(format!("{value}\n{label}"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };
    frame.render_widget(card(stats.tracks.to_string(), "songs"), cards[0]);
    frame.render_widget(card(stats.artists.to_string(), "artists"), cards[1]);
    frame.render_widget(card(stats.albums.to_string(), "albums"), cards[2]);
    frame.render_widget(card(stats.total_duration_text(), "total"), cards[3]);

    let title = format!(" your library | sort: {} (s cycles) ", app.sort_field.label());
    draw_track_list(frame, app, playlist, current, chunks[1], &title);
}

fn draw_track_list(
    frame: &mut Frame,
    app: &App,
    playlist: &Playlist,
    current: Option<&Track>,
    area: Rect,
    title: &str,
) {
    let visible = app.visible_indices(playlist);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|&i| {
            // Unwrap-free: visible indices come straight from the playlist.
            let Some(track) = playlist.get(i) else {
                return ListItem::new(String::new());
            };
            let playing = current.map(|c| c.id == track.id).unwrap_or(false);
            let marker = if playing { "♪ " } else { "  " };
            let line = format!(
                "{marker}{:<28} {:<20} {:<16} {:>5}",
                track.title,
                track.artist,
                track.album,
                format_time(f64::from(track.duration_secs)),
            );
            if playing {
                ListItem::new(line).style(Style::default().bold())
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ratatui::widgets::ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(app.cursor.min(visible.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_transport(frame: &mut Frame, state: &PlaybackState, current: Option<&Track>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let line = match current {
        Some(track) => {
            let glyph = if state.playing { "▶" } else { "⏸" };
            let mut text = format!(" {glyph} {} - {}", track.title, track.artist);
            if state.backend_failed {
                text.push_str("  [playback unavailable, enter retries]");
            }
            text
        }
        None => " nothing selected | enter plays the highlighted track".to_string(),
    };
    frame.render_widget(Paragraph::new(line), chunks[0]);

    let gauge = Gauge::default()
        .ratio(state.progress())
        .label(format!(
            "{} / {}",
            format_time(state.position_secs),
            format_time(state.duration_secs),
        ))
        .use_unicode(true);
    frame.render_widget(gauge, chunks[1]);

    let volume = (state.volume * 100.0).round() as u32;
    let filled = (state.volume * 10.0).round() as usize;
    let bar: String = "█".repeat(filled.min(10)) + &"─".repeat(10usize.saturating_sub(filled));
    let controls =
        " space play/pause | h/l prev/next | H/L seek | -/+ vol | m mute | 1/2/3 views | q quit";
    frame.render_widget(
        Paragraph::new(format!(" vol {bar} {volume:>3}% {controls}")),
        chunks[2],
    );
}

/// Time-of-day greeting for the Home header. Falls back to evening when
/// the local offset cannot be determined.
fn greeting() -> &'static str {
    let hour = time::OffsetDateTime::now_local()
        .map(|t| t.hour())
        .unwrap_or(19);
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
