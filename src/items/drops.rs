use super::generation::generate_item;
use super::types::{Item, ItemType, Rarity};
use crate::core::constants::LOOT_DROP_CHANCE;
use rand::Rng;

/// Drop weights, highest rarity first.
///
/// Sampling walks this order, so on an exact boundary the rarer tier wins.
pub const RARITY_WEIGHTS: [(Rarity, f64); 4] = [
    (Rarity::Legendary, 3.0),
    (Rarity::Epic, 12.0),
    (Rarity::Rare, 25.0),
    (Rarity::Common, 60.0),
];

/// Sample a rarity from an ordered weight table.
///
/// The roll is scaled to the table's total weight, so tables that do not sum
/// to 100 still produce a proportional distribution. An empty or all-zero
/// table yields `Rarity::Common`.
pub fn roll_rarity_from(weights: &[(Rarity, f64)], rng: &mut impl Rng) -> Rarity {
    let total: f64 = weights.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return Rarity::Common;
    }

    let roll = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (rarity, weight) in weights {
        cumulative += weight.max(0.0);
        if roll <= cumulative {
            return *rarity;
        }
    }

    // Float rounding can leave the roll a hair past the last boundary.
    weights
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map_or(Rarity::Common, |(r, _)| *r)
}

pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    roll_rarity_from(&RARITY_WEIGHTS, rng)
}

pub fn roll_item_type(rng: &mut impl Rng) -> ItemType {
    let types = ItemType::all();
    types[rng.gen_range(0..types.len())]
}

/// Roll the post-kill loot chance; on success generate an item at `level`.
pub fn try_drop_loot(level: u32, rng: &mut impl Rng) -> Option<Item> {
    if rng.gen::<f64>() >= LOOT_DROP_CHANCE {
        return None;
    }

    let rarity = roll_rarity(rng);
    let item_type = roll_item_type(rng);
    Some(generate_item(item_type, rarity, level, rng))
}
