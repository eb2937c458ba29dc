//! The built-in sample catalog.
//!
//! There is no real library scanning; playback runs over this static set
//! of tracks, the same way the UI is meant to be exercised without any
//! backing store.

use super::model::{Playlist, Track};

/// Build the sample playlist loaded at startup.
pub fn sample_playlist() -> Playlist {
    Playlist::new(sample_tracks())
}

fn sample_tracks() -> Vec<Track> {
    let t = |id, title: &str, artist: &str, album: &str, duration_secs, source: &str| Track {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration_secs,
        source: source.to_string(),
    };

    vec![
        t(1, "Opening Theme", "The Midnight Quartet", "City Lights", 180, "sample://city-lights/01"),
        t(2, "Neon Rain", "The Midnight Quartet", "City Lights", 210, "sample://city-lights/02"),
        t(3, "Last Train Home", "The Midnight Quartet", "City Lights", 195, "sample://city-lights/03"),
        t(4, "Blue in Motion", "Ada Vereen", "Jazz Classics", 252, "sample://jazz-classics/01"),
        t(5, "Velvet Hour", "Ada Vereen", "Jazz Classics", 234, "sample://jazz-classics/02"),
        t(6, "Smoke and Satin", "Ada Vereen Trio", "Jazz Classics", 276, "sample://jazz-classics/03"),
        t(7, "Granite Sky", "Northern Drift", "Fjordland", 224, "sample://fjordland/01"),
        t(8, "Meltwater", "Northern Drift", "Fjordland", 248, "sample://fjordland/02"),
        t(9, "Pulse Width", "Carrier Wave", "Oscillations", 201, "sample://oscillations/01"),
        t(10, "Sine Garden", "Carrier Wave", "Oscillations", 189, "sample://oscillations/02"),
        t(11, "Saw Ahead", "Carrier Wave", "Oscillations", 215, "sample://oscillations/03"),
        t(12, "Coda", "The Midnight Quartet", "City Lights", 167, "sample://city-lights/04"),
    ]
}
