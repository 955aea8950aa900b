use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Module,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Module,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Module => "Module",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Module,
    Consumable,
}

impl ItemType {
    pub fn all() -> [ItemType; 4] {
        [
            ItemType::Weapon,
            ItemType::Armor,
            ItemType::Module,
            ItemType::Consumable,
        ]
    }

    /// The equipment slot this item occupies, or `None` for consumables.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemType::Weapon => Some(EquipmentSlot::Weapon),
            ItemType::Armor => Some(EquipmentSlot::Armor),
            ItemType::Module => Some(EquipmentSlot::Module),
            ItemType::Consumable => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ItemType::Weapon => "⚔",
            ItemType::Armor => "🛡",
            ItemType::Module => "🔧",
            ItemType::Consumable => "💊",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Module => "module",
            ItemType::Consumable => "consumable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Scales item value with rarity.
    pub fn value_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.2,
            Rarity::Legendary => 3.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub level: u32,
    pub value: u32,
}

impl Item {
    pub fn icon(&self) -> &'static str {
        self.item_type.icon()
    }
}
