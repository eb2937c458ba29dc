use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::player::BackendEvent;

use super::transport::Transport;
use super::types::AudioCmd;

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<BackendEvent>,
    tick: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut transport = Transport::new();
        let mut last_tick = Instant::now();

        loop {
            match rx.recv_timeout(tick) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load(track) => {
                        // A fresh load restarts the clock for the new track.
                        last_tick = Instant::now();
                        for ev in transport.load(&track) {
                            let _ = events.send(ev);
                        }
                    }
                    AudioCmd::Play => transport.play(),
                    AudioCmd::Pause => transport.pause(),
                    AudioCmd::SetPosition(seconds) => transport.set_position(seconds),
                    AudioCmd::SetVolume(level) => transport.set_volume(level),
                    AudioCmd::Quit => break,
                },
                Err(RecvTimeoutError::Timeout) => {
                    let now = Instant::now();
                    let dt = now.duration_since(last_tick).as_secs_f64();
                    last_tick = now;

                    for ev in transport.tick(dt) {
                        if events.send(ev).is_err() {
                            // Core went away; nothing left to report to.
                            return;
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
