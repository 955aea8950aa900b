use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::player::DamageRange;
use crate::core::constants::*;

pub const ENEMY_NAMES: [&str; 6] = [
    "Роботизированный Страж",
    "Кибер-Патрульный",
    "Нано-Защитник",
    "Плазменный Дрон",
    "Механический Охотник",
    "Синтетический Солдат",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    /// Drives stat scaling and kill rewards.
    pub level: u32,
    /// Never above `max_hp`; zero means defeated.
    pub hp: u64,
    pub max_hp: u64,
    /// Saved with the enemy. Enemies do not attack back.
    pub damage: DamageRange,
    /// Scales with level like the other stats but does not reduce hits.
    pub defense: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtracts damage, clamping at zero.
    pub fn take_damage(&mut self, amount: u64) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64 * 100.0
    }
}

/// `floor(base * growth^(level - 1))`
pub fn scaled_stat(base: f64, growth: f64, level: u32) -> f64 {
    (base * growth.powi(level.saturating_sub(1) as i32)).floor()
}

fn build_enemy(
    name: String,
    level: u32,
    hp_multiplier: f64,
    damage_bases: (f64, f64),
    defense_base: f64,
) -> Enemy {
    let exponent = level.saturating_sub(1) as i32;
    let hp = (ENEMY_BASE_HP * ENEMY_HP_GROWTH.powi(exponent) * hp_multiplier).floor() as u64;

    Enemy {
        name,
        level,
        hp,
        max_hp: hp,
        damage: DamageRange::new(
            scaled_stat(damage_bases.0, ENEMY_DAMAGE_GROWTH, level) as u32,
            scaled_stat(damage_bases.1, ENEMY_DAMAGE_GROWTH, level) as u32,
        ),
        defense: scaled_stat(defense_base, ENEMY_DEFENSE_GROWTH, level) as u32,
    }
}

/// Regular enemy stats for `level`.
pub fn enemy_for_level(name: String, level: u32) -> Enemy {
    build_enemy(
        name,
        level,
        1.0,
        (ENEMY_BASE_DAMAGE_MIN, ENEMY_BASE_DAMAGE_MAX),
        ENEMY_BASE_DEFENSE,
    )
}

/// Boss stats: regular hp curve times `hp_multiplier`, heavier damage and defense bases.
pub fn generate_boss(name: &str, level: u32, hp_multiplier: f64) -> Enemy {
    build_enemy(
        name.to_string(),
        level,
        hp_multiplier,
        (BOSS_BASE_DAMAGE_MIN, BOSS_BASE_DAMAGE_MAX),
        BOSS_BASE_DEFENSE,
    )
}

/// The enemy every new game opens against.
pub fn first_enemy() -> Enemy {
    enemy_for_level(ENEMY_NAMES[0].to_string(), 1)
}

/// `max(1, player_level - 2 + randomInt(0, 4))`
pub fn roll_enemy_level(player_level: u32, rng: &mut impl Rng) -> u32 {
    let offset = rng.gen_range(0..=ENEMY_LEVEL_SPREAD) as i64;
    let level = player_level as i64 - ENEMY_LEVEL_OFFSET_BELOW as i64 + offset;
    level.max(1) as u32
}

pub fn generate_enemy_name(rng: &mut impl Rng) -> String {
    ENEMY_NAMES[rng.gen_range(0..ENEMY_NAMES.len())].to_string()
}

/// Generates the next regular enemy around the player's level.
pub fn generate_enemy(player_level: u32, rng: &mut impl Rng) -> Enemy {
    let level = roll_enemy_level(player_level, rng);
    let name = generate_enemy_name(rng);
    enemy_for_level(name, level)
}
