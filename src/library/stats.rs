//! Aggregate library stats shown on the Library view header cards.
//!
//! These are pure reductions over the playlist, recomputed on demand;
//! nothing here is cached, so there is no invalidation to get wrong.

use std::collections::HashSet;

use super::format::format_total_duration;
use super::model::Playlist;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStats {
    pub tracks: usize,
    pub artists: usize,
    pub albums: usize,
    pub total_secs: u64,
}

impl LibraryStats {
    /// Total duration as `"Hh Mm"` or `"Mm"`.
    pub fn total_duration_text(&self) -> String {
        format_total_duration(self.total_secs)
    }
}

pub fn library_stats(playlist: &Playlist) -> LibraryStats {
    let artists: HashSet<&str> = playlist.iter().map(|t| t.artist.as_str()).collect();
    let albums: HashSet<&str> = playlist.iter().map(|t| t.album.as_str()).collect();

    LibraryStats {
        tracks: playlist.len(),
        artists: artists.len(),
        albums: albums.len(),
        total_secs: playlist.iter().map(|t| u64::from(t.duration_secs)).sum(),
    }
}
