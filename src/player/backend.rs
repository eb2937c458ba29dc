//! The media-backend contract consumed by the playback core.
//!
//! The backend is an opaque playback primitive: the controller issues
//! transport commands through [`MediaBackend`] and receives asynchronous
//! [`BackendEvent`] notifications in return. Every notification names the
//! track it refers to so late events from a superseded load can be told
//! apart from events for the current track.

use crate::library::{Track, TrackId};

/// Transport commands the core issues to its playback backend. All calls
/// are fire-and-forget; completion is reported through [`BackendEvent`]s.
pub trait MediaBackend {
    /// Begin preparing `track` for playback. Supersedes any in-flight load.
    fn load(&mut self, track: &Track);
    /// Start or resume the currently loaded track.
    fn play(&mut self);
    /// Pause the currently loaded track.
    fn pause(&mut self);
    /// Jump to an absolute position in seconds.
    fn set_position(&mut self, seconds: f64);
    /// Apply a volume level in `[0, 1]`.
    fn set_volume(&mut self, level: f32);
}

/// Notifications emitted by the backend, tagged with the track they
/// describe. Events may arrive at arbitrary times relative to user
/// actions; the controller discards any whose track is no longer current.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// Periodic progress report while playing.
    PositionAdvanced { track: TrackId, seconds: f64 },
    /// Duration became known, once per successful load.
    MetadataReady { track: TrackId, duration_secs: f64 },
    /// Playback reached the end of the track.
    Ended { track: TrackId },
    /// The source could not be prepared for playback.
    LoadFailed { track: TrackId, reason: String },
}
