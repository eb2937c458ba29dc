use crate::library::Track;

/// Commands sent from the playback core to the audio thread.
#[derive(Debug)]
pub enum AudioCmd {
    /// Prepare the given track for playback, superseding any current one.
    Load(Track),
    /// Start or resume the loaded track.
    Play,
    /// Pause the loaded track.
    Pause,
    /// Jump to an absolute position in seconds.
    SetPosition(f64),
    /// Apply a volume level in `[0, 1]`.
    SetVolume(f32),
    /// Shut the audio thread down.
    Quit,
}
