//! Track catalog: the `Track`/`Playlist` model, search, stats and the
//! built-in sample library.

mod format;
mod model;
mod sample;
mod search;
mod stats;

pub use format::*;
pub use model::*;
pub use sample::*;
pub use search::*;
pub use stats::*;

#[cfg(test)]
mod tests;
