use super::types::{EquipmentSlot, Item};
use serde::{Deserialize, Serialize};

/// Player equipment slots.
///
/// New slots need `#[serde(default)]` so older snapshots keep loading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub armor: Option<Item>,
    #[serde(default)]
    pub module: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Module => self.module.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Module => &mut self.module,
        }
    }

    /// Puts `item` into `slot`, returning whatever was there before.
    pub fn replace(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Flat damage added to every attack by the equipped weapon.
    pub fn weapon_bonus(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |w| w.value)
    }

    pub fn armor_bonus(&self) -> u32 {
        self.armor.as_ref().map_or(0, |a| a.value)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.module]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{ItemType, Rarity};
    use super::*;
    use uuid::Uuid;

    fn create_test_item(item_type: ItemType, value: u32) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            item_type,
            rarity: Rarity::Common,
            level: 1,
            value,
        }
    }

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert!(eq.weapon.is_none());
        assert_eq!(eq.iter_equipped().count(), 0);
        assert_eq!(eq.weapon_bonus(), 0);
    }

    #[test]
    fn test_replace_returns_previous_item() {
        let mut eq = Equipment::new();
        let first = create_test_item(ItemType::Weapon, 5);
        let second = create_test_item(ItemType::Weapon, 20);

        assert!(eq.replace(EquipmentSlot::Weapon, first.clone()).is_none());
        let previous = eq.replace(EquipmentSlot::Weapon, second.clone());

        assert_eq!(previous, Some(first));
        assert_eq!(eq.get(EquipmentSlot::Weapon), Some(&second));
        assert_eq!(eq.weapon_bonus(), 20);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut eq = Equipment::new();
        eq.replace(EquipmentSlot::Weapon, create_test_item(ItemType::Weapon, 5));
        eq.replace(EquipmentSlot::Armor, create_test_item(ItemType::Armor, 3));

        assert_eq!(eq.iter_equipped().count(), 2);
        assert_eq!(eq.armor_bonus(), 3);
        assert!(eq.take(EquipmentSlot::Module).is_none());
        assert!(eq.take(EquipmentSlot::Armor).is_some());
        assert_eq!(eq.iter_equipped().count(), 1);
    }
}
