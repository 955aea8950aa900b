//! The progression engine.
//!
//! `ProgressionEngine` owns the game state, the RNG, the recurring task
//! scheduler and the game log. Every command is a `&mut self` method that runs
//! to completion and returns the events it produced; a failed precondition
//! returns an [`ActionError`] and leaves the state untouched.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::constants::*;
use super::error::ActionError;
use super::events::{GameEvent, SoundCue};
use super::game_logic::apply_xp;
use super::game_state::{GameState, Snapshot};
use super::offline::{calculate_offline_income, OfflineReport};
use super::scheduler::{Scheduler, TaskKind};
use crate::character::upgrades::UpgradeType;
use crate::combat::logic::{calculate_player_attack, roll_kill_rewards};
use crate::combat::types::generate_enemy;
use crate::dungeon::types::get_dungeon;
use crate::items::drops::try_drop_loot;
use crate::items::generation::starting_inventory;
use crate::utils::persistence::SaveManager;

/// A discrete request from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Attack,
    BuyUpgrade(UpgradeType),
    EnterDungeon(u32),
    UseItem(usize),
    Save,
}

pub struct ProgressionEngine<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    scheduler: Scheduler,
    log: VecDeque<String>,
}

impl ProgressionEngine<StdRng> {
    /// Starts a brand new game seeded from OS entropy.
    pub fn new_game() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Restores a saved game seeded from OS entropy, paying offline income up to now.
    pub fn restore(snapshot: Snapshot) -> (Self, OfflineReport) {
        Self::restore_with_rng(
            snapshot,
            StdRng::from_entropy(),
            Utc::now().timestamp_millis(),
        )
    }

    /// Restores the game in `save_manager`, or starts fresh seeded from OS entropy.
    pub fn load_from(save_manager: &SaveManager) -> Self {
        Self::load_from_with_rng(
            save_manager,
            StdRng::from_entropy(),
            Utc::now().timestamp_millis(),
        )
    }
}

impl<R: Rng> ProgressionEngine<R> {
    /// Starts a brand new game: default state plus the starting inventory.
    pub fn with_rng(mut rng: R) -> Self {
        let mut state = GameState::new();
        state.player.inventory = starting_inventory(&mut rng);

        let mut engine = Self::from_state(state, rng);
        engine.push_log("Welcome to Cyborg Clicker!".to_string());
        engine.push_log("Attack enemies to earn XP and credits.".to_string());
        engine.push_log(format!(
            "The game saves automatically every {} seconds.",
            AUTOSAVE_INTERVAL_SECONDS
        ));
        engine
    }

    /// Wraps an existing state. Arms autosave and energy regen, plus
    /// auto-attack if it was already purchased.
    pub fn from_state(mut state: GameState, rng: R) -> Self {
        if state.sanitize() {
            debug!("sanitized out-of-range values in game state");
        }
        let levels = apply_xp(&mut state.player, 0);
        if let Some(level) = levels.last() {
            debug!(level, "resolved stored xp over the level threshold");
        }

        let mut scheduler = Scheduler::new();
        scheduler.schedule(
            TaskKind::Autosave,
            Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS),
        );
        scheduler.schedule(
            TaskKind::EnergyRegen,
            Duration::from_secs(ENERGY_REGEN_INTERVAL_SECONDS),
        );

        let mut engine = Self {
            state,
            rng,
            scheduler,
            log: VecDeque::with_capacity(GAME_LOG_CAPACITY),
        };

        if !engine.state.enemy.is_alive() {
            engine.spawn_next_enemy();
        }
        if engine.state.upgrades.auto_attack_unlocked() {
            engine.start_auto_attack();
        }
        engine
    }

    /// Restores a snapshot taken at `snapshot.timestamp`, crediting offline
    /// income for the time until `now_ms` at the saved player level.
    pub fn restore_with_rng(snapshot: Snapshot, rng: R, now_ms: i64) -> (Self, OfflineReport) {
        let report =
            calculate_offline_income(snapshot.timestamp, now_ms, snapshot.player.level);

        let mut state = snapshot.into_state();
        state.player.credits = state.player.credits.saturating_add(report.credits);

        let mut engine = Self::from_state(state, rng);
        if report.credits > 0 {
            engine.push_log(format!(
                "Welcome back! Offline income: {} credits ({} min)",
                report.credits, report.minutes
            ));
        }
        engine.push_log("Game loaded!".to_string());
        info!(
            offline_minutes = report.minutes,
            offline_credits = report.credits,
            level = engine.state.player.level,
            "restored game"
        );

        (engine, report)
    }

    /// Restores the saved game, or starts fresh when there is none. An
    /// unreadable file is moved aside first so later saves cannot overwrite it.
    pub fn load_from_with_rng(save_manager: &SaveManager, rng: R, now_ms: i64) -> Self {
        match save_manager.load() {
            Ok(Some(snapshot)) => Self::restore_with_rng(snapshot, rng, now_ms).0,
            Ok(None) => {
                info!("no save found, starting new game");
                Self::with_rng(rng)
            }
            Err(e) => {
                warn!(error = %e, path = %save_manager.path().display(), "could not load save");
                let mut engine = Self::with_rng(rng);
                match save_manager.set_aside() {
                    Ok(backup) => engine.push_log(format!(
                        "Save file could not be loaded, kept as {}",
                        backup.display()
                    )),
                    Err(backup_err) => {
                        warn!(error = %backup_err, "could not move unreadable save aside");
                        engine.push_log("Save file could not be loaded, starting fresh".to_string());
                    }
                }
                engine
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Game log, oldest first.
    pub fn log(&self) -> impl Iterator<Item = &String> {
        self.log.iter()
    }

    pub fn snapshot(&self, timestamp_ms: i64) -> Snapshot {
        self.state.snapshot(timestamp_ms)
    }

    /// Appends a line to the game log, dropping the oldest past capacity.
    pub fn push_log(&mut self, message: String) {
        if self.log.len() >= GAME_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(message);
    }

    fn emit_log(&mut self, events: &mut Vec<GameEvent>, message: String) {
        self.push_log(message.clone());
        events.push(GameEvent::Log(message));
    }

    /// Runs a command, turning a failed precondition into a log line.
    pub fn handle(&mut self, command: Command) -> Vec<GameEvent> {
        let result = match command {
            Command::Attack => self.attack(),
            Command::BuyUpgrade(upgrade_type) => self.buy_upgrade(upgrade_type),
            Command::EnterDungeon(id) => self.enter_dungeon(id),
            Command::UseItem(index) => Ok(self.use_item(index)),
            Command::Save => Ok(self.save(Utc::now().timestamp_millis())),
        };

        match result {
            Ok(events) => events,
            Err(err) => {
                debug!(?command, %err, "command rejected");
                let mut events = Vec::new();
                self.emit_log(&mut events, err.to_string());
                events
            }
        }
    }

    /// Runs whatever recurring tasks are due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for task in self.scheduler.poll(now) {
            match task {
                TaskKind::Autosave => {
                    let snapshot = self.snapshot(Utc::now().timestamp_millis());
                    events.push(GameEvent::SaveRequested(snapshot));
                    self.emit_log(&mut events, "Game auto-saved".to_string());
                }
                TaskKind::EnergyRegen => events.extend(self.regenerate_energy()),
                TaskKind::AutoAttack => events.extend(self.handle(Command::Attack)),
            }
        }
        events
    }

    /// Attack the current enemy once. Costs one energy.
    pub fn attack(&mut self) -> Result<Vec<GameEvent>, ActionError> {
        if self.state.player.energy == 0 {
            return Err(ActionError::InsufficientEnergy);
        }

        let result = calculate_player_attack(&self.state.player, &self.state.upgrades, &mut self.rng);

        let mut events = vec![GameEvent::Sound(SoundCue::Attack)];
        self.state.enemy.take_damage(result.damage);
        self.state.player.energy -= ENERGY_PER_ATTACK;
        events.push(GameEvent::DamageNumber {
            value: result.damage,
            is_crit: result.is_crit,
        });

        if !self.state.enemy.is_alive() {
            self.resolve_defeat(&mut events);
        }

        events.push(GameEvent::StateChanged);
        Ok(events)
    }

    /// Pays out the kill, runs the level-up loop, rolls loot and brings in the
    /// next enemy.
    fn resolve_defeat(&mut self, events: &mut Vec<GameEvent>) {
        let name = self.state.enemy.name.clone();
        let level = self.state.enemy.level;
        let rewards = roll_kill_rewards(level, &mut self.rng);

        let player = &mut self.state.player;
        player.credits += rewards.credits;
        player.nanobots += rewards.nanobots;
        let new_levels = apply_xp(player, rewards.xp);

        self.emit_log(
            events,
            format!(
                "Defeated {}! Gained {} XP, {} credits",
                name, rewards.xp, rewards.credits
            ),
        );
        events.push(GameEvent::EnemyDefeated {
            name,
            level,
            rewards,
        });

        for new_level in new_levels {
            self.emit_log(events, format!("LEVEL UP! Now level {}", new_level));
            events.push(GameEvent::LevelUp { new_level });
        }

        if let Some(item) = try_drop_loot(level, &mut self.rng) {
            self.emit_log(
                events,
                format!("Found item: {} ({})", item.name, item.rarity.name()),
            );
            self.state.player.inventory.push(item.clone());
            events.push(GameEvent::LootFound(item));
        }

        self.spawn_next_enemy();
    }

    /// Replaces the current enemy with a fresh one near the player's level.
    pub fn spawn_next_enemy(&mut self) {
        self.state.enemy = generate_enemy(self.state.player.level, &mut self.rng);
        debug!(
            enemy = %self.state.enemy.name,
            level = self.state.enemy.level,
            "spawned enemy"
        );
    }

    /// Replaces the current enemy with a dungeon boss, if the player is high
    /// enough level.
    pub fn enter_dungeon(&mut self, dungeon_id: u32) -> Result<Vec<GameEvent>, ActionError> {
        let dungeon = get_dungeon(dungeon_id).ok_or(ActionError::UnknownDungeon(dungeon_id))?;
        let current = self.state.player.level;
        if current < dungeon.required_level {
            return Err(ActionError::LevelTooLow {
                required: dungeon.required_level,
                current,
            });
        }

        let mut events = Vec::new();
        self.emit_log(&mut events, format!("Entering {}...", dungeon.name));
        self.state.enemy = dungeon.boss.spawn();
        self.emit_log(&mut events, format!("Boss appeared: {}!", dungeon.boss.name));
        events.push(GameEvent::StateChanged);
        Ok(events)
    }

    /// Buys one level of an upgrade.
    pub fn buy_upgrade(&mut self, upgrade_type: UpgradeType) -> Result<Vec<GameEvent>, ActionError> {
        let cost = self.state.upgrades.get(upgrade_type).cost;
        let available = self.state.player.credits;
        if available < cost {
            return Err(ActionError::InsufficientCredits {
                upgrade: upgrade_type.name(),
                cost,
                available,
            });
        }

        self.state.player.credits -= cost;
        let upgrade = self.state.upgrades.get_mut(upgrade_type);
        upgrade.advance();
        let level = upgrade.level;

        let mut events = vec![GameEvent::Sound(SoundCue::Upgrade)];
        self.emit_log(
            &mut events,
            format!(
                "Upgrade '{}' purchased! Level {}",
                upgrade_type.name(),
                level
            ),
        );

        match upgrade_type {
            UpgradeType::AutoClicker if level == 1 => {
                events.extend(self.start_auto_attack());
            }
            UpgradeType::Speed => self.apply_speed(),
            _ => {}
        }

        events.push(GameEvent::StateChanged);
        Ok(events)
    }

    /// Auto-attack cadence: 2 s scaled down by the speed upgrade.
    pub fn auto_attack_period(&self) -> Duration {
        let ms = AUTO_ATTACK_INTERVAL_MS as f64 / self.state.upgrades.speed.factor();
        Duration::from_millis((ms as u64).max(MIN_AUTO_ATTACK_INTERVAL_MS))
    }

    fn apply_speed(&mut self) {
        self.state.player.attack_speed = BASE_ATTACK_SPEED * self.state.upgrades.speed.factor();
        let period = self.auto_attack_period();
        self.scheduler.set_period(TaskKind::AutoAttack, period);
    }

    /// Arms the auto-attack trigger. Idempotent; once started it runs until
    /// the session ends.
    fn start_auto_attack(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let period = self.auto_attack_period();
        if self.scheduler.schedule(TaskKind::AutoAttack, period) {
            self.emit_log(&mut events, "Auto-clicker activated!".to_string());
            events.push(GameEvent::AutoAttackStarted);
        }
        events
    }

    /// Uses or equips the inventory item at `index`. A missing index is a no-op.
    pub fn use_item(&mut self, index: usize) -> Vec<GameEvent> {
        if index >= self.state.player.inventory.len() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let item = self.state.player.inventory.remove(index);
        let name = item.name.clone();

        match item.item_type.slot() {
            None => {
                self.state.player.restore_energy(CONSUMABLE_ENERGY_RESTORE);
                self.emit_log(&mut events, format!("Used item: {}", name));
            }
            Some(slot) => {
                let player = &mut self.state.player;
                if let Some(previous) = player.equipment.replace(slot, item) {
                    player.inventory.push(previous);
                }
                self.emit_log(&mut events, format!("Equipped item: {}", name));
            }
        }

        events.push(GameEvent::StateChanged);
        events
    }

    /// +2 energy, capped. Nothing happens at full energy.
    pub fn regenerate_energy(&mut self) -> Vec<GameEvent> {
        if self.state.player.restore_energy(ENERGY_REGEN_AMOUNT) > 0 {
            vec![GameEvent::StateChanged]
        } else {
            Vec::new()
        }
    }

    /// Takes a snapshot for the caller to persist.
    pub fn save(&mut self, timestamp_ms: i64) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::SaveRequested(self.snapshot(timestamp_ms))];
        self.emit_log(&mut events, "Game saved".to_string());
        events
    }
}
