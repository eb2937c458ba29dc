use std::sync::mpsc::{self, Receiver, Sender};

use thiserror::Error;

use crate::library::{Playlist, Track};

use super::backend::{BackendEvent, MediaBackend};
use super::state::PlaybackState;

/// Errors for operations that require a track to exist at a given index.
///
/// Out-of-range volume and seek inputs are clamped rather than rejected:
/// an interactive slider cannot produce them, so they do not warrant hard
/// failures. Backend failures are likewise not errors here; they surface
/// as the passive `backend_failed` state flag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("track index {index} out of range for playlist of {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("playlist is empty")]
    EmptyPlaylist,
}

/// The playback core. Owns the playlist, the mutable [`PlaybackState`]
/// and the backend handle; every mutation goes through the operations
/// below and ends with a change notification to subscribers.
pub struct PlayerController<B: MediaBackend> {
    playlist: Playlist,
    state: PlaybackState,
    backend: B,
    /// Last non-zero volume, restored by `toggle_mute`.
    last_volume: f32,
    subscribers: Vec<Sender<()>>,
}

impl<B: MediaBackend> PlayerController<B> {
    pub fn new(playlist: Playlist, mut backend: B, default_volume: f32) -> Self {
        let state = PlaybackState::new(default_volume);
        backend.set_volume(state.volume);
        let last_volume = if state.volume > 0.0 { state.volume } else { 0.7 };
        Self {
            playlist,
            state,
            backend,
            last_volume,
            subscribers: Vec::new(),
        }
    }

    /// Read-only snapshot of the playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Access to the backend handle (runtime shutdown, test inspection).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.current.and_then(|i| self.playlist.get(i))
    }

    /// Subscribe to state-change notifications. The render layer re-reads
    /// the snapshot whenever a `()` arrives; it never mutates state itself.
    pub fn subscribe(&mut self) -> Receiver<()> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Select the track at `index` and start playing it from the top.
    ///
    /// Exactly one track is current afterwards; a previously playing track
    /// is implicitly superseded, including any in-flight load.
    pub fn select_track(&mut self, index: usize) -> Result<(), PlayerError> {
        if self.playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        let Some(track) = self.playlist.get(index) else {
            return Err(PlayerError::OutOfRange {
                index,
                len: self.playlist.len(),
            });
        };

        tracing::debug!(index, id = track.id, title = %track.title, "select track");
        let track = track.clone();

        self.state.current = Some(index);
        self.state.playing = true;
        self.state.position_secs = 0.0;
        // Unknown until the backend reports metadata for the new track.
        self.state.duration_secs = 0.0;
        self.state.backend_failed = false;

        self.backend.load(&track);
        self.backend.play();
        self.notify();
        Ok(())
    }

    /// Flip play/pause. A no-op while nothing is selected, mirroring a
    /// disabled transport control rather than erroring.
    pub fn toggle_play_pause(&mut self) {
        if self.state.current.is_none() {
            return;
        }

        self.state.playing = !self.state.playing;
        if self.state.playing {
            self.backend.play();
        } else {
            self.backend.pause();
        }
        self.notify();
    }

    /// Jump to `seconds`, clamped to `[0, duration]`. No-op while nothing
    /// is selected.
    pub fn seek(&mut self, seconds: f64) {
        if self.state.current.is_none() {
            return;
        }

        let clamped = seconds.clamp(0.0, self.state.duration_secs.max(0.0));
        self.state.position_secs = clamped;
        self.backend.set_position(clamped);
        self.notify();
    }

    /// Set the volume, clamped to `[0, 1]`, applied immediately regardless
    /// of play state.
    pub fn set_volume(&mut self, level: f32) {
        let clamped = level.clamp(0.0, 1.0);
        if clamped > 0.0 {
            self.last_volume = clamped;
        }
        self.state.volume = clamped;
        self.backend.set_volume(clamped);
        self.notify();
    }

    /// Drop the volume to zero, or restore the last non-zero volume.
    pub fn toggle_mute(&mut self) {
        if self.state.volume > 0.0 {
            self.set_volume(0.0);
        } else {
            self.set_volume(self.last_volume);
        }
    }

    /// Advance to the next track, wrapping to index 0 after the last.
    /// Also the auto-advance action when the backend reports the current
    /// track ended.
    pub fn next(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        let base = self.state.current.unwrap_or(0);
        let index = (base + 1) % self.playlist.len();
        // In range by construction.
        let _ = self.select_track(index);
    }

    /// Step back one track, wrapping to the last index before index 0.
    pub fn previous(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        let base = self.state.current.unwrap_or(0);
        let index = if base == 0 {
            self.playlist.len() - 1
        } else {
            base - 1
        };
        let _ = self.select_track(index);
    }

    /// Route a backend notification into the state.
    ///
    /// Events are tagged with the track they describe; anything referring
    /// to a track that is no longer current is discarded so a late report
    /// from a superseded load cannot clobber the new track's state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        let current_id = self.current_track().map(|t| t.id);

        match event {
            BackendEvent::PositionAdvanced { track, seconds } => {
                if Some(track) != current_id {
                    return;
                }
                self.state.position_secs = seconds;
                self.notify();
            }
            BackendEvent::MetadataReady {
                track,
                duration_secs,
            } => {
                if Some(track) != current_id {
                    tracing::debug!(track, "ignoring stale metadata");
                    return;
                }
                self.state.duration_secs = duration_secs;
                self.notify();
            }
            BackendEvent::Ended { track } => {
                if Some(track) != current_id {
                    return;
                }
                self.next();
            }
            BackendEvent::LoadFailed { track, reason } => {
                if Some(track) != current_id {
                    return;
                }
                tracing::warn!(track, %reason, "backend failed to load track");
                self.state.playing = false;
                self.state.backend_failed = true;
                self.notify();
            }
        }
    }

    fn notify(&mut self) {
        self.subscribers.retain(|tx| tx.send(()).is_ok());
    }
}
