//! Simulated playback backend.
//!
//! There is no real audio decoding here: the catalog is sample data, so
//! the backend "plays" a track by advancing a clock against its declared
//! duration. The transport state machine is pure (`audio::transport`);
//! a worker thread drives it in real time and reports progress, metadata
//! and end-of-track back to the playback core over a channel.

mod engine;
mod thread;
mod transport;
mod types;

pub use engine::*;
pub use types::*;
