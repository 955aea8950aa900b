//! Migration of browser-game exports.
//!
//! The browser game stored `{player, enemy, upgrades, timestamp}` as camelCase
//! JSON with no version tag. Every number was a JS double, item ids were
//! `Date.now() + Math.random()`, and the starter equipment was shaped
//! `{name, damage}` / `{name, defense}` instead of a full item.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::persistence::SaveError;
use crate::character::player::{DamageRange, Player};
use crate::character::upgrades::{Upgrade, Upgrades};
use crate::combat::types::Enemy;
use crate::core::constants::SAVE_FILE_VERSION;
use crate::core::game_state::Snapshot;
use crate::items::equipment::Equipment;
use crate::items::types::{Item, ItemType, Rarity};

#[derive(Debug, Deserialize)]
struct LegacySnapshot {
    player: LegacyPlayer,
    enemy: LegacyEnemy,
    upgrades: LegacyUpgrades,
    #[serde(default)]
    timestamp: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LegacyRange {
    min: f64,
    max: f64,
}

impl From<LegacyRange> for DamageRange {
    fn from(range: LegacyRange) -> Self {
        DamageRange::new(range.min as u32, range.max as u32)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyPlayer {
    level: f64,
    xp: f64,
    #[serde(rename = "maxXP")]
    max_xp: f64,
    damage: LegacyRange,
    defense: f64,
    attack_speed: f64,
    crit_chance: f64,
    credits: f64,
    energy: f64,
    nanobots: f64,
    #[serde(default)]
    equipment: LegacyEquipment,
    #[serde(default)]
    inventory: Vec<LegacyItem>,
}

#[derive(Debug, Default, Deserialize)]
struct LegacyEquipment {
    #[serde(default)]
    weapon: Option<LegacyItem>,
    #[serde(default)]
    armor: Option<LegacyItem>,
    #[serde(default)]
    module: Option<LegacyItem>,
}

/// Either a generated item or a starter `{name, damage}` / `{name, defense}` stub.
#[derive(Debug, Deserialize)]
struct LegacyItem {
    name: String,
    #[serde(rename = "type", default)]
    item_type: Option<ItemType>,
    #[serde(default)]
    rarity: Option<Rarity>,
    #[serde(default)]
    level: Option<f64>,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    damage: Option<f64>,
    #[serde(default)]
    defense: Option<f64>,
}

impl LegacyItem {
    /// `slot_type` fills in the type for starter stubs that never had one.
    fn migrate(self, slot_type: Option<ItemType>) -> Option<Item> {
        let item_type = self.item_type.or(slot_type)?;
        let value = self.value.or(self.damage).or(self.defense).unwrap_or(0.0);

        Some(Item {
            id: Uuid::new_v4(),
            name: self.name,
            item_type,
            rarity: self.rarity.unwrap_or(Rarity::Common),
            level: self.level.map_or(1, |l| l as u32),
            value: value as u32,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyEnemy {
    name: String,
    level: f64,
    hp: f64,
    #[serde(rename = "maxHP")]
    max_hp: f64,
    damage: LegacyRange,
    defense: f64,
}

#[derive(Debug, Deserialize)]
struct LegacyUpgrade {
    level: f64,
    cost: f64,
    multiplier: f64,
}

impl From<LegacyUpgrade> for Upgrade {
    fn from(upgrade: LegacyUpgrade) -> Self {
        Upgrade {
            level: upgrade.level as u32,
            cost: upgrade.cost as u64,
            multiplier: upgrade.multiplier,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyUpgrades {
    damage: LegacyUpgrade,
    speed: LegacyUpgrade,
    auto_clicker: LegacyUpgrade,
    drones: LegacyUpgrade,
}

/// Converts an untagged browser export into a current snapshot.
///
/// Fractional values are truncated toward zero and negatives clamp to zero.
/// Items whose type cannot be determined are dropped.
pub fn migrate_legacy(value: Value) -> Result<Snapshot, SaveError> {
    let legacy: LegacySnapshot = serde_json::from_value(value)?;
    let p = legacy.player;
    let e = legacy.enemy;
    let u = legacy.upgrades;

    let inventory: Vec<Item> = p
        .inventory
        .into_iter()
        .filter_map(|item| item.migrate(None))
        .collect();

    let equipment = Equipment {
        weapon: p
            .equipment
            .weapon
            .and_then(|i| i.migrate(Some(ItemType::Weapon))),
        armor: p
            .equipment
            .armor
            .and_then(|i| i.migrate(Some(ItemType::Armor))),
        module: p
            .equipment
            .module
            .and_then(|i| i.migrate(Some(ItemType::Module))),
    };

    let player = Player {
        level: p.level as u32,
        xp: p.xp as u64,
        max_xp: p.max_xp as u64,
        damage: p.damage.into(),
        defense: p.defense as u32,
        attack_speed: p.attack_speed,
        crit_chance: p.crit_chance,
        credits: p.credits as u64,
        energy: p.energy as u32,
        nanobots: p.nanobots as u64,
        equipment,
        inventory,
    };

    let enemy = Enemy {
        name: e.name,
        level: e.level as u32,
        hp: e.hp as u64,
        max_hp: e.max_hp as u64,
        damage: e.damage.into(),
        defense: e.defense as u32,
    };

    let upgrades = Upgrades {
        damage: u.damage.into(),
        speed: u.speed.into(),
        auto_clicker: u.auto_clicker.into(),
        drones: u.drones.into(),
    };

    info!(
        level = player.level,
        items = player.inventory.len(),
        "migrated legacy save"
    );

    Ok(Snapshot {
        version: SAVE_FILE_VERSION,
        player,
        enemy,
        upgrades,
        timestamp: legacy.timestamp as i64,
    })
}
