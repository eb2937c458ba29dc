use crate::library::{Track, TrackId};
use crate::player::BackendEvent;

/// Pure transport state machine behind the simulated backend.
///
/// The thread feeds it commands and elapsed wall time; it answers with the
/// backend events the core expects. Keeping it free of clocks and channels
/// is what makes the timing behavior testable.
pub(super) struct Transport {
    current: Option<Loaded>,
    playing: bool,
    position: f64,
    volume: f32,
}

struct Loaded {
    id: TrackId,
    duration: f64,
    /// Metadata is reported on the first tick after the load, modeling a
    /// backend that parses headers asynchronously.
    metadata_pending: bool,
    ended: bool,
}

impl Transport {
    pub(super) fn new() -> Self {
        Self {
            current: None,
            playing: false,
            position: 0.0,
            volume: 1.0,
        }
    }

    /// Prepare `track` for playback. An empty locator cannot be resolved
    /// and fails the load; anything else is accepted.
    pub(super) fn load(&mut self, track: &Track) -> Vec<BackendEvent> {
        self.playing = false;
        self.position = 0.0;

        if track.source.trim().is_empty() {
            self.current = None;
            return vec![BackendEvent::LoadFailed {
                track: track.id,
                reason: format!("empty source locator for track {}", track.id),
            }];
        }

        self.current = Some(Loaded {
            id: track.id,
            duration: f64::from(track.duration_secs),
            metadata_pending: true,
            ended: false,
        });
        Vec::new()
    }

    pub(super) fn play(&mut self) {
        if let Some(loaded) = &self.current {
            if !loaded.ended {
                self.playing = true;
            }
        }
    }

    pub(super) fn pause(&mut self) {
        self.playing = false;
    }

    pub(super) fn set_position(&mut self, seconds: f64) {
        if let Some(loaded) = &mut self.current {
            self.position = seconds.clamp(0.0, loaded.duration);
            // Seeking back from the end revives the track.
            if self.position < loaded.duration {
                loaded.ended = false;
            }
        }
    }

    pub(super) fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
    }

    #[cfg(test)]
    pub(super) fn volume(&self) -> f32 {
        self.volume
    }

    /// Advance the clock by `dt` seconds and collect whatever happened:
    /// pending metadata, a progress report while playing, and end-of-track
    /// exactly once when the position reaches the duration.
    pub(super) fn tick(&mut self, dt: f64) -> Vec<BackendEvent> {
        let Some(loaded) = &mut self.current else {
            return Vec::new();
        };

        let mut events = Vec::new();

        if loaded.metadata_pending {
            loaded.metadata_pending = false;
            events.push(BackendEvent::MetadataReady {
                track: loaded.id,
                duration_secs: loaded.duration,
            });
        }

        if self.playing {
            self.position += dt;
            if self.position >= loaded.duration && !loaded.ended {
                self.position = loaded.duration;
                self.playing = false;
                loaded.ended = true;
                events.push(BackendEvent::PositionAdvanced {
                    track: loaded.id,
                    seconds: self.position,
                });
                events.push(BackendEvent::Ended { track: loaded.id });
            } else {
                events.push(BackendEvent::PositionAdvanced {
                    track: loaded.id,
                    seconds: self.position,
                });
            }
        }

        events
    }
}
