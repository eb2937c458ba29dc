//! Playback core: the single source of truth for what is selected,
//! whether it is playing and where we are in it.
//!
//! The controller lives in `player::controller`, the state snapshot in
//! `player::state` and the media-backend contract in `player::backend`.

mod backend;
mod controller;
mod state;

pub use backend::*;
pub use controller::*;
pub use state::*;

#[cfg(test)]
mod tests;
