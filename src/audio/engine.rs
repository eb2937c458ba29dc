use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::library::Track;
use crate::player::{BackendEvent, MediaBackend};

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// Handle to the audio thread. Implements [`MediaBackend`] by forwarding
/// commands over the channel; the paired event receiver is handed to the
/// runtime so it can route notifications into the playback core.
pub struct AudioEngine {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioEngine {
    /// Spawn the audio thread with the given progress tick and return the
    /// engine plus the backend event stream.
    pub fn new(tick: Duration) -> (Self, Receiver<BackendEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<BackendEvent>();
        let join = spawn_audio_thread(rx, event_tx, tick);

        (
            Self {
                tx,
                join: Mutex::new(Some(join)),
            },
            event_rx,
        )
    }

    fn send(&self, cmd: AudioCmd) {
        // The thread only goes away on Quit; a send failure after that is
        // harmless during shutdown.
        let _ = self.tx.send(cmd);
    }

    /// Stop the audio thread and wait for it to finish.
    pub fn shutdown(&self) {
        self.send(AudioCmd::Quit);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}

impl MediaBackend for AudioEngine {
    fn load(&mut self, track: &Track) {
        self.send(AudioCmd::Load(track.clone()));
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn set_position(&mut self, seconds: f64) {
        self.send(AudioCmd::SetPosition(seconds));
    }

    fn set_volume(&mut self, level: f32) {
        self.send(AudioCmd::SetVolume(level));
    }
}

impl Drop for AudioEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
