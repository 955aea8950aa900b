use crate::core::constants::*;
use crate::items::equipment::Equipment;
use crate::items::generation::{starter_armor, starter_weapon};
use crate::items::types::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive damage interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Uniform integer roll in `[min, max]`. A collapsed or inverted range
    /// always rolls `min`.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    /// XP toward the next level, always below `max_xp` between commands.
    pub xp: u64,
    /// XP needed for the next level-up.
    pub max_xp: u64,
    /// Base roll before weapon bonus and damage upgrades.
    pub damage: DamageRange,
    pub defense: u32,
    /// Base speed times the speed upgrade factor. Display only; the
    /// auto-attack period is derived from the upgrade directly.
    pub attack_speed: f64,
    /// Percent chance (0-100) for an attack to crit.
    pub crit_chance: f64,
    /// Spent on upgrades.
    pub credits: u64,
    /// One point per attack, capped at `MAX_ENERGY`.
    pub energy: u32,
    /// Dropped by kills and shown in the stats panel.
    pub nanobots: u64,
    #[serde(default)]
    pub equipment: Equipment,
    /// Unequipped items in pickup order.
    #[serde(default)]
    pub inventory: Vec<Item>,
}

impl Player {
    /// Creates a fresh level 1 player wearing the starter weapon and armor.
    pub fn new() -> Self {
        Self {
            level: BASE_PLAYER_LEVEL,
            xp: 0,
            max_xp: BASE_MAX_XP,
            damage: DamageRange::new(BASE_DAMAGE_MIN, BASE_DAMAGE_MAX),
            defense: BASE_DEFENSE,
            attack_speed: BASE_ATTACK_SPEED,
            crit_chance: BASE_CRIT_CHANCE_PERCENT,
            credits: 0,
            energy: MAX_ENERGY,
            nanobots: 0,
            equipment: Equipment {
                weapon: Some(starter_weapon()),
                armor: Some(starter_armor()),
                module: None,
            },
            inventory: Vec::new(),
        }
    }

    /// Defense including the equipped armor.
    pub fn effective_defense(&self) -> u32 {
        self.defense + self.equipment.armor_bonus()
    }

    /// Adds energy up to the cap, returning how much was actually gained.
    pub fn restore_energy(&mut self, amount: u32) -> u32 {
        let before = self.energy;
        self.energy = (self.energy + amount).min(MAX_ENERGY);
        self.energy - before
    }

    pub fn xp_percent(&self) -> f64 {
        if self.max_xp == 0 {
            return 0.0;
        }
        self.xp as f64 / self.max_xp as f64 * 100.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
