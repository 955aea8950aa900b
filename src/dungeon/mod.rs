//! Dungeons: level-gated boss encounters.

pub mod types;

pub use types::*;
