//! Cyborg Clicker - terminal idle clicker.
//!
//! The library holds the progression engine and everything it needs; the
//! binary adds the terminal front-end.

pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod items;
pub mod utils;

pub use crate::core::engine::{Command, ProgressionEngine};
pub use crate::core::events::{GameEvent, SoundCue};
pub use crate::core::game_state::{GameState, Snapshot};
