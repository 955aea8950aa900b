use crate::core::constants::UPGRADE_COST_GROWTH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeType {
    Damage,
    Speed,
    AutoClicker,
    Drones,
}

impl UpgradeType {
    pub fn all() -> [UpgradeType; 4] {
        [
            UpgradeType::Damage,
            UpgradeType::Speed,
            UpgradeType::AutoClicker,
            UpgradeType::Drones,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeType::Damage => "damage",
            UpgradeType::Speed => "speed",
            UpgradeType::AutoClicker => "autoClicker",
            UpgradeType::Drones => "drones",
        }
    }

    /// Maps the 1-4 shortcut keys onto upgrade types.
    pub fn from_shortcut(key: char) -> Option<UpgradeType> {
        match key {
            '1' => Some(UpgradeType::Damage),
            '2' => Some(UpgradeType::Speed),
            '3' => Some(UpgradeType::AutoClicker),
            '4' => Some(UpgradeType::Drones),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub level: u32,
    pub cost: u64,
    pub multiplier: f64,
}

impl Upgrade {
    pub fn new(cost: u64, multiplier: f64) -> Self {
        Self {
            level: 0,
            cost,
            multiplier,
        }
    }

    /// Effective multiplier: `multiplier ^ level`.
    pub fn factor(&self) -> f64 {
        self.multiplier.powi(self.level as i32)
    }

    /// Applies a paid purchase: one more level and a ×1.5 (floored) price.
    /// The price always rises by at least one credit, so a tiny cost from a
    /// damaged save cannot stay flat or free.
    pub fn advance(&mut self) {
        self.level += 1;
        let grown = (self.cost as f64 * UPGRADE_COST_GROWTH).floor() as u64;
        self.cost = grown.max(self.cost.saturating_add(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Upgrades {
    pub damage: Upgrade,
    pub speed: Upgrade,
    pub auto_clicker: Upgrade,
    pub drones: Upgrade,
}

impl Upgrades {
    pub fn new() -> Self {
        Self {
            damage: Upgrade::new(50, 1.2),
            speed: Upgrade::new(75, 1.15),
            auto_clicker: Upgrade::new(200, 1.5),
            drones: Upgrade::new(500, 2.0),
        }
    }

    pub fn get(&self, upgrade_type: UpgradeType) -> &Upgrade {
        match upgrade_type {
            UpgradeType::Damage => &self.damage,
            UpgradeType::Speed => &self.speed,
            UpgradeType::AutoClicker => &self.auto_clicker,
            UpgradeType::Drones => &self.drones,
        }
    }

    pub fn get_mut(&mut self, upgrade_type: UpgradeType) -> &mut Upgrade {
        match upgrade_type {
            UpgradeType::Damage => &mut self.damage,
            UpgradeType::Speed => &mut self.speed,
            UpgradeType::AutoClicker => &mut self.auto_clicker,
            UpgradeType::Drones => &mut self.drones,
        }
    }

    pub fn auto_attack_unlocked(&self) -> bool {
        self.auto_clicker.level > 0
    }
}

impl Default for Upgrades {
    fn default() -> Self {
        Self::new()
    }
}
