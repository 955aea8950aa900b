use super::constants::{BASE_MAX_XP, MAX_ENERGY, SAVE_FILE_VERSION};
use crate::character::player::Player;
use crate::character::upgrades::Upgrades;
use crate::combat::types::{first_enemy, Enemy};
use serde::{Deserialize, Serialize};

/// The authoritative numeric game state: everything that is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub enemy: Enemy,
    pub upgrades: Upgrades,
}

impl GameState {
    /// Creates a new game state with default values
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            enemy: first_enemy(),
            upgrades: Upgrades::new(),
        }
    }

    /// Builds the persisted form of this state.
    pub fn snapshot(&self, timestamp_ms: i64) -> Snapshot {
        Snapshot {
            version: SAVE_FILE_VERSION,
            player: self.player.clone(),
            enemy: self.enemy.clone(),
            upgrades: self.upgrades,
            timestamp: timestamp_ms,
        }
    }

    /// Repairs values that a hand-edited or damaged save could carry.
    ///
    /// Returns true if anything had to change. Only a zero XP threshold is
    /// reset here; XP at or over the threshold is paid out as level-ups by
    /// the engine right after.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;

        if self.player.energy > MAX_ENERGY {
            self.player.energy = MAX_ENERGY;
            changed = true;
        }
        if self.player.max_xp == 0 {
            self.player.max_xp = BASE_MAX_XP;
            changed = true;
        }
        if self.player.level == 0 {
            self.player.level = 1;
            changed = true;
        }
        if self.enemy.hp > self.enemy.max_hp {
            self.enemy.hp = self.enemy.max_hp;
            changed = true;
        }

        changed
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized engine state, written on autosave and on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub player: Player,
    pub enemy: Enemy,
    pub upgrades: Upgrades,
    /// Epoch milliseconds at the moment the snapshot was taken.
    pub timestamp: i64,
}

impl Snapshot {
    pub fn into_state(self) -> GameState {
        GameState {
            player: self.player,
            enemy: self.enemy,
            upgrades: self.upgrades,
        }
    }
}
