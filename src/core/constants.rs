// Timers
pub const TICK_INTERVAL_MS: u64 = 50;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 10;
pub const ENERGY_REGEN_INTERVAL_SECONDS: u64 = 3;
pub const AUTO_ATTACK_INTERVAL_MS: u64 = 2000;
pub const MIN_AUTO_ATTACK_INTERVAL_MS: u64 = 250;

// Energy
pub const MAX_ENERGY: u32 = 100;
pub const ENERGY_PER_ATTACK: u32 = 1;
pub const ENERGY_REGEN_AMOUNT: u32 = 2;
pub const CONSUMABLE_ENERGY_RESTORE: u32 = 25;

// Player defaults
pub const BASE_PLAYER_LEVEL: u32 = 1;
pub const BASE_MAX_XP: u64 = 100;
pub const BASE_DAMAGE_MIN: u32 = 10;
pub const BASE_DAMAGE_MAX: u32 = 15;
pub const BASE_DEFENSE: u32 = 5;
pub const BASE_ATTACK_SPEED: f64 = 1.0;
pub const BASE_CRIT_CHANCE_PERCENT: f64 = 5.0;
pub const CRIT_MULTIPLIER: f64 = 2.0;

// Level-up
pub const MAX_XP_GROWTH: f64 = 1.3;
pub const LEVEL_UP_DAMAGE_MIN_BONUS: u32 = 2;
pub const LEVEL_UP_DAMAGE_MAX_BONUS: u32 = 3;
pub const LEVEL_UP_DEFENSE_BONUS: u32 = 1;

// Kill rewards: xp = level * XP, credits = level * CREDITS + roll, nanobots = level / 2 + roll
pub const KILL_XP_PER_LEVEL: u64 = 25;
pub const KILL_CREDITS_PER_LEVEL: u64 = 10;
pub const KILL_CREDITS_BONUS_RANGE: (u64, u64) = (5, 15);
pub const KILL_NANOBOTS_BONUS_RANGE: (u64, u64) = (0, 2);

// Enemy scaling: stat = floor(base * growth^(level - 1))
pub const ENEMY_BASE_HP: f64 = 1000.0;
pub const ENEMY_HP_GROWTH: f64 = 1.4;
pub const ENEMY_BASE_DAMAGE_MIN: f64 = 5.0;
pub const ENEMY_BASE_DAMAGE_MAX: f64 = 10.0;
pub const ENEMY_DAMAGE_GROWTH: f64 = 1.2;
pub const ENEMY_BASE_DEFENSE: f64 = 2.0;
pub const ENEMY_DEFENSE_GROWTH: f64 = 1.1;
pub const ENEMY_LEVEL_OFFSET_BELOW: u32 = 2;
pub const ENEMY_LEVEL_SPREAD: u32 = 4;

// Boss scaling (same growth curves, heavier bases)
pub const BOSS_BASE_DAMAGE_MIN: f64 = 8.0;
pub const BOSS_BASE_DAMAGE_MAX: f64 = 15.0;
pub const BOSS_BASE_DEFENSE: f64 = 5.0;

// Loot
pub const LOOT_DROP_CHANCE: f64 = 0.15;
pub const ITEM_VALUE_PER_LEVEL: f64 = 10.0;
pub const ITEM_NAME_LEVEL_PREFIX: &str = "Mk";

// Upgrades
pub const UPGRADE_COST_GROWTH: f64 = 1.5;

// Offline income: credits = minutes * level * RATE
pub const OFFLINE_CREDITS_PER_MINUTE_PER_LEVEL: u64 = 2;
pub const MAX_OFFLINE_SECONDS: i64 = 7 * 24 * 60 * 60;

// Game log and inventory display
pub const GAME_LOG_CAPACITY: usize = 50;
pub const INVENTORY_DISPLAY_SLOTS: usize = 30;

// Save file
pub const SAVE_FILE_VERSION: u32 = 1;
pub const SAVE_FILE_NAME: &str = "save.json";
pub const LOG_FILE_NAME: &str = "cyborg-clicker.log";
