//! Events emitted by engine commands.
//!
//! The presentation layer maps these to damage numbers, popups, sounds and
//! redraws. The engine never touches UI types directly.

use super::game_state::Snapshot;
use crate::combat::logic::KillRewards;
use crate::items::types::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Attack,
    Upgrade,
}

/// A single thing that happened while running a command or timer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Player hit the enemy.
    DamageNumber { value: u64, is_crit: bool },

    /// The current enemy died and rewards were paid out.
    EnemyDefeated {
        name: String,
        level: u32,
        rewards: KillRewards,
    },

    /// One level gained. A kill that pays for several levels emits one per level.
    LevelUp { new_level: u32 },

    /// An item was added to the inventory.
    LootFound(Item),

    /// A line appended to the game log.
    Log(String),

    Sound(SoundCue),

    /// The recurring auto-attack trigger was armed.
    AutoAttackStarted,

    /// A snapshot is ready to be written to storage.
    SaveRequested(Snapshot),

    /// Something the UI displays changed; redraw from the engine state.
    StateChanged,
}

impl GameEvent {
    pub fn is_level_up(&self) -> bool {
        matches!(self, GameEvent::LevelUp { .. })
    }
}
