use crate::combat::types::{generate_boss, Enemy};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossDefinition {
    pub name: &'static str,
    pub level: u32,
    pub hp_multiplier: f64,
}

impl BossDefinition {
    pub fn spawn(&self) -> Enemy {
        generate_boss(self.name, self.level, self.hp_multiplier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DungeonDefinition {
    pub id: u32,
    pub name: &'static str,
    pub required_level: u32,
    pub boss: BossDefinition,
}

pub static DUNGEONS: [DungeonDefinition; 2] = [
    DungeonDefinition {
        id: 1,
        name: "Заброшенная Фабрика",
        required_level: 5,
        boss: BossDefinition {
            name: "Фабричный Надзиратель",
            level: 8,
            hp_multiplier: 3.0,
        },
    },
    DungeonDefinition {
        id: 2,
        name: "Неоновые Трущобы",
        required_level: 15,
        boss: BossDefinition {
            name: "Неоновый Король",
            level: 18,
            hp_multiplier: 5.0,
        },
    },
];

pub fn get_dungeon(id: u32) -> Option<&'static DungeonDefinition> {
    DUNGEONS.iter().find(|d| d.id == id)
}
