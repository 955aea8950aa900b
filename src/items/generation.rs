use super::types::{Item, ItemType, Rarity};
use crate::core::constants::{ITEM_NAME_LEVEL_PREFIX, ITEM_VALUE_PER_LEVEL};
use rand::Rng;
use uuid::Uuid;

const WEAPON_NAMES: [&str; 4] = [
    "Плазменный Клинок",
    "Лазерная Винтовка",
    "Нейро-Меч",
    "Квантовый Бластер",
];
const ARMOR_NAMES: [&str; 4] = [
    "Нано-Броня",
    "Силовой Экзоскелет",
    "Энергетический Щит",
    "Кибер-Костюм",
];
const MODULE_NAMES: [&str; 4] = [
    "Ускоритель",
    "Усилитель Крита",
    "Генератор Энергии",
    "Нано-Процессор",
];
const CONSUMABLE_NAMES: [&str; 4] = [
    "Энергетический Напиток",
    "Нано-Ремонтный Набор",
    "Стимулятор",
    "Кредит-Чип",
];

pub const STARTER_WEAPON_NAME: &str = "Базовый Плазменный Меч";
pub const STARTER_WEAPON_VALUE: u32 = 5;
pub const STARTER_ARMOR_NAME: &str = "Кибер-броня Mk I";
pub const STARTER_ARMOR_VALUE: u32 = 3;

pub fn base_names(item_type: ItemType) -> &'static [&'static str] {
    match item_type {
        ItemType::Weapon => &WEAPON_NAMES,
        ItemType::Armor => &ARMOR_NAMES,
        ItemType::Module => &MODULE_NAMES,
        ItemType::Consumable => &CONSUMABLE_NAMES,
    }
}

/// Item value: floor(level * 10 * rarity multiplier).
pub fn item_value(level: u32, rarity: Rarity) -> u32 {
    (level as f64 * ITEM_VALUE_PER_LEVEL * rarity.value_multiplier()).floor() as u32
}

/// Generate an item of the given type, rarity and level with a random base name.
pub fn generate_item(item_type: ItemType, rarity: Rarity, level: u32, rng: &mut impl Rng) -> Item {
    let names = base_names(item_type);
    let base_name = names[rng.gen_range(0..names.len())];

    Item {
        id: Uuid::new_v4(),
        name: format!("{} {}{}", base_name, ITEM_NAME_LEVEL_PREFIX, level),
        item_type,
        rarity,
        level,
        value: item_value(level, rarity),
    }
}

fn starter_item(name: &str, item_type: ItemType, value: u32) -> Item {
    Item {
        id: Uuid::new_v4(),
        name: name.to_string(),
        item_type,
        rarity: Rarity::Common,
        level: 1,
        value,
    }
}

pub fn starter_weapon() -> Item {
    starter_item(STARTER_WEAPON_NAME, ItemType::Weapon, STARTER_WEAPON_VALUE)
}

pub fn starter_armor() -> Item {
    starter_item(STARTER_ARMOR_NAME, ItemType::Armor, STARTER_ARMOR_VALUE)
}

/// Items a brand new game starts with in the inventory.
pub fn starting_inventory(rng: &mut impl Rng) -> Vec<Item> {
    vec![
        generate_item(ItemType::Consumable, Rarity::Common, 1, rng),
        generate_item(ItemType::Weapon, Rarity::Rare, 2, rng),
    ]
}
