/// Snapshot of the playback core, handed read-only to the render layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    /// Index of the selected track, `None` until the first selection.
    /// Once a track has been selected there is no transition back to
    /// `None`: pausing keeps the track current.
    pub current: Option<usize>,
    /// Meaningful only while `current` is set; always false otherwise.
    pub playing: bool,
    /// Volume in `[0, 1]`.
    pub volume: f32,
    /// Position within the current track, in `[0, duration_secs]`.
    pub position_secs: f64,
    /// Last duration reported by the backend; 0 means not yet known
    /// (transiently, right after a track change).
    pub duration_secs: f64,
    /// Set when the backend could not load the current track. The track
    /// stays selected so the user can retry; playback simply is not
    /// running.
    pub backend_failed: bool,
}

impl PlaybackState {
    pub fn new(volume: f32) -> Self {
        Self {
            current: None,
            playing: false,
            volume: volume.clamp(0.0, 1.0),
            position_secs: 0.0,
            duration_secs: 0.0,
            backend_failed: false,
        }
    }

    /// Fraction of the current track already played, in `[0, 1]`.
    /// Exactly 0 while the duration is unknown.
    pub fn progress(&self) -> f64 {
        if self.duration_secs > 0.0 {
            (self.position_secs / self.duration_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
