//! Application module: UI-side state for the sidebar navigation, the
//! search box and the library view. Playback state lives in `player`.

mod model;

pub use model::*;
