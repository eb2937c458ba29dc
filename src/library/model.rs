use std::cmp::Ordering;
use std::collections::HashSet;

/// Stable identifier for a track, unique within a playlist.
pub type TrackId = u32;

/// An immutable catalog entry. Tracks are created once when the playlist
/// is built and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Declared length in whole seconds.
    pub duration_secs: u32,
    /// Opaque locator the playback backend resolves to audio.
    pub source: String,
}

/// Field to sort the library view by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    Title,
    Artist,
    Album,
    Duration,
}

impl SortField {
    /// Cycle `Title -> Artist -> Album -> Duration -> Title`.
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Artist,
            Self::Artist => Self::Album,
            Self::Album => Self::Duration,
            Self::Duration => Self::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Duration => "duration",
        }
    }
}

/// An ordered sequence of tracks. Insertion order is the browse order;
/// nothing here resorts implicitly.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Build a playlist, keeping the first occurrence of each track id so
    /// the unique-id invariant always holds.
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut seen: HashSet<TrackId> = HashSet::with_capacity(tracks.len());
        let mut kept = Vec::with_capacity(tracks.len());
        for track in tracks {
            if seen.insert(track.id) {
                kept.push(track);
            } else {
                tracing::warn!(id = track.id, title = %track.title, "dropping duplicate track id");
            }
        }
        Self { tracks: kept }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Return track indices stably sorted by `field`. String fields compare
    /// case-insensitively; browse order breaks ties.
    pub fn sorted_by(&self, field: SortField) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.tracks.len()).collect();
        indices.sort_by(|&a, &b| {
            let (ta, tb) = (&self.tracks[a], &self.tracks[b]);
            match field {
                SortField::Title => cmp_ci(&ta.title, &tb.title),
                SortField::Artist => cmp_ci(&ta.artist, &tb.artist),
                SortField::Album => cmp_ci(&ta.album, &tb.album),
                SortField::Duration => ta.duration_secs.cmp(&tb.duration_secs),
            }
        });
        indices
    }

    /// Group tracks by album, in first-seen order. Used by the Home view
    /// album shelf.
    pub fn albums(&self) -> Vec<AlbumGroup<'_>> {
        let mut groups: Vec<AlbumGroup<'_>> = Vec::new();
        for (i, track) in self.tracks.iter().enumerate() {
            match groups.iter_mut().find(|g| g.album == track.album) {
                Some(group) => group.track_indices.push(i),
                None => groups.push(AlbumGroup {
                    album: &track.album,
                    artist: &track.artist,
                    track_indices: vec![i],
                }),
            }
        }
        groups
    }
}

/// One album shelf entry: the album name, the artist of its first track
/// and the indices of its tracks in browse order.
#[derive(Debug, PartialEq)]
pub struct AlbumGroup<'a> {
    pub album: &'a str,
    pub artist: &'a str,
    pub track_indices: Vec<usize>,
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
