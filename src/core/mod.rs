//! Core game state, engine and progression rules.

#![allow(unused_imports)]

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod game_logic;
pub mod game_state;
pub mod offline;
pub mod scheduler;

pub use constants::*;
pub use engine::{Command, ProgressionEngine};
pub use error::ActionError;
pub use events::{GameEvent, SoundCue};
pub use game_logic::*;
pub use game_state::*;
pub use offline::*;
pub use scheduler::{Scheduler, TaskKind};
