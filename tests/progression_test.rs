//! Integration test: progression engine end to end
//!
//! Drives a seeded engine through combat, leveling, upgrades, dungeons and
//! timers, checking the state invariants after every command.

use cyborg_clicker::character::player::DamageRange;
use cyborg_clicker::character::upgrades::UpgradeType;
use cyborg_clicker::core::constants::*;
use cyborg_clicker::core::error::ActionError;
use cyborg_clicker::core::scheduler::TaskKind;
use cyborg_clicker::{Command, GameEvent, GameState, ProgressionEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

fn seeded_engine(seed: u64) -> ProgressionEngine<ChaCha8Rng> {
    ProgressionEngine::with_rng(ChaCha8Rng::seed_from_u64(seed))
}

fn assert_invariants(state: &GameState) {
    let player = &state.player;
    assert!(player.energy <= MAX_ENERGY, "energy {} over cap", player.energy);
    assert!(
        player.xp < player.max_xp,
        "xp {} not below threshold {}",
        player.xp,
        player.max_xp
    );
    assert!(state.enemy.hp <= state.enemy.max_hp);
}

// =========================================================================
// Attack scenarios
// =========================================================================

#[test]
fn test_fixed_roll_with_damage_upgrades() {
    let mut engine = seeded_engine(1);
    let state = engine.state_mut();
    state.player.damage = DamageRange::new(12, 12);
    state.player.crit_chance = 0.0;
    state.upgrades.damage.level = 2;

    engine.attack().unwrap();

    // floor((12 + 5) * 1.2^2) = floor(24.48)
    assert_eq!(engine.state().enemy.hp, 1000 - 24);
    assert_eq!(engine.state().player.energy, 99);
}

#[test]
fn test_guaranteed_crit_doubles_damage() {
    let mut engine = seeded_engine(2);
    let state = engine.state_mut();
    state.player.damage = DamageRange::new(10, 10);
    state.player.crit_chance = 100.0;

    let events = engine.attack().unwrap();

    assert!(events.contains(&GameEvent::DamageNumber {
        value: 30,
        is_crit: true
    }));
    assert_eq!(engine.state().enemy.hp, 970);
}

#[test]
fn test_energy_never_goes_negative() {
    let mut engine = seeded_engine(3);
    engine.state_mut().player.energy = 2;

    assert!(engine.attack().is_ok());
    assert!(engine.attack().is_ok());
    assert_eq!(engine.attack(), Err(ActionError::InsufficientEnergy));
    assert_eq!(engine.state().player.energy, 0);
}

// =========================================================================
// Long run: leveling and enemy scaling
// =========================================================================

#[test]
fn test_grinding_keeps_invariants_and_scales_enemies() {
    let mut engine = seeded_engine(42);
    let mut kills = 0;
    let mut levels_seen = Vec::new();

    for _ in 0..200_000 {
        if engine.state().player.level >= 6 {
            break;
        }
        engine.state_mut().player.energy = MAX_ENERGY;

        let events = engine.attack().unwrap();
        assert_invariants(engine.state());

        for event in &events {
            match event {
                GameEvent::EnemyDefeated { .. } => kills += 1,
                GameEvent::LevelUp { new_level } => levels_seen.push(*new_level),
                _ => {}
            }
        }

        if events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDefeated { .. }))
        {
            let level = engine.state().player.level;
            let enemy_level = engine.state().enemy.level;
            let low = level.saturating_sub(ENEMY_LEVEL_OFFSET_BELOW).max(1);
            assert!(
                (low..=level + 2).contains(&enemy_level),
                "enemy level {enemy_level} outside window for player level {level}"
            );
            assert_eq!(engine.state().enemy.hp, engine.state().enemy.max_hp);
        }
    }

    assert!(engine.state().player.level >= 6);
    assert!(kills > 0);
    assert_eq!(levels_seen, (2..=engine.state().player.level).collect::<Vec<_>>());
}

#[test]
fn test_level_ups_grant_stat_bonuses() {
    let mut engine = seeded_engine(5);
    engine.state_mut().enemy.hp = 1;
    engine.state_mut().enemy.level = 4; // exactly 100 XP

    engine.attack().unwrap();

    let player = &engine.state().player;
    assert_eq!(player.level, 2);
    assert_eq!(player.xp, 0);
    assert_eq!(player.max_xp, 130);
    assert_eq!(player.damage, DamageRange::new(12, 18));
    assert_eq!(player.defense, 6);
}

// =========================================================================
// Upgrades
// =========================================================================

#[test]
fn test_repeated_purchases_escalate_cost() {
    let mut engine = seeded_engine(6);
    engine.state_mut().player.credits = 50 + 75 + 112;

    engine.buy_upgrade(UpgradeType::Damage).unwrap();
    engine.buy_upgrade(UpgradeType::Damage).unwrap();
    engine.buy_upgrade(UpgradeType::Damage).unwrap();

    let upgrade = engine.state().upgrades.damage;
    assert_eq!(upgrade.level, 3);
    assert_eq!(upgrade.cost, 168);
    assert_eq!(engine.state().player.credits, 0);

    let err = engine.buy_upgrade(UpgradeType::Damage).unwrap_err();
    assert_eq!(
        err,
        ActionError::InsufficientCredits {
            upgrade: "damage",
            cost: 168,
            available: 0
        }
    );
}

#[test]
fn test_insufficient_credits_reported_through_handle() {
    let mut engine = seeded_engine(7);
    engine.state_mut().player.credits = 40;

    let events = engine.handle(Command::BuyUpgrade(UpgradeType::Damage));

    assert_eq!(
        events,
        vec![GameEvent::Log(
            "Not enough credits for 'damage' (40/50)".to_string()
        )]
    );
    assert_eq!(engine.state().player.credits, 40);
    assert_eq!(engine.state().upgrades.damage.level, 0);
}

#[test]
fn test_drones_are_purchasable() {
    let mut engine = seeded_engine(8);
    engine.state_mut().player.credits = 500;

    engine.buy_upgrade(UpgradeType::Drones).unwrap();

    assert_eq!(engine.state().upgrades.drones.level, 1);
    assert_eq!(engine.state().upgrades.drones.cost, 750);
}

#[test]
fn test_auto_attack_period_has_floor() {
    let mut engine = seeded_engine(9);
    engine.state_mut().upgrades.speed.level = 40;
    assert_eq!(
        engine.auto_attack_period(),
        Duration::from_millis(MIN_AUTO_ATTACK_INTERVAL_MS)
    );
}

// =========================================================================
// Dungeons
// =========================================================================

#[test]
fn test_dungeon_gate_and_boss() {
    let mut engine = seeded_engine(10);
    engine.state_mut().player.level = 4;

    let events = engine.handle(Command::EnterDungeon(1));
    assert!(matches!(&events[..], [GameEvent::Log(msg)] if msg.contains("requires 5")));
    assert_ne!(engine.state().enemy.name, "Фабричный Надзиратель");

    engine.state_mut().player.level = 5;
    engine.enter_dungeon(1).unwrap();

    let boss = &engine.state().enemy;
    assert_eq!(boss.level, 8);
    assert_eq!(boss.hp, (1000.0 * 1.4f64.powi(7) * 3.0).floor() as u64);
    assert_eq!(boss.hp, boss.max_hp);
}

#[test]
fn test_second_dungeon_boss() {
    let mut engine = seeded_engine(11);
    engine.state_mut().player.level = 15;

    engine.enter_dungeon(2).unwrap();

    let boss = &engine.state().enemy;
    assert_eq!(boss.name, "Неоновый Король");
    assert_eq!(boss.level, 18);
    assert_eq!(boss.hp, (1000.0 * 1.4f64.powi(17) * 5.0).floor() as u64);
}

#[test]
fn test_boss_kill_pays_boss_level_rewards() {
    let mut engine = seeded_engine(12);
    engine.state_mut().player.level = 5;
    engine.state_mut().player.max_xp = 10_000;
    engine.enter_dungeon(1).unwrap();
    engine.state_mut().enemy.hp = 1;

    let events = engine.attack().unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyDefeated { level: 8, rewards, .. } if rewards.xp == 200)));
    assert_eq!(engine.state().player.xp, 200);
}

// =========================================================================
// Timers
// =========================================================================

#[test]
fn test_timers_over_one_minute() {
    let mut engine = seeded_engine(13);
    engine.state_mut().player.energy = 0;
    let start = Instant::now();
    engine.tick(start);

    let mut saves = 0;
    for second in 1..=60 {
        for event in engine.tick(start + Duration::from_secs(second)) {
            if matches!(event, GameEvent::SaveRequested(_)) {
                saves += 1;
            }
        }
    }

    assert_eq!(saves, 6);
    // 20 regen ticks of 2 energy
    assert_eq!(engine.state().player.energy, 40);
}

#[test]
fn test_auto_attack_runs_from_ticks() {
    let mut engine = seeded_engine(14);
    engine.state_mut().player.credits = 200;
    engine.handle(Command::BuyUpgrade(UpgradeType::AutoClicker));
    assert!(engine.scheduler().is_scheduled(TaskKind::AutoAttack));
    engine.state_mut().player.energy = 50;

    let start = Instant::now();
    engine.tick(start);
    // Attacks at 2, 4, 6, 8 s; regen at 3, 6 s.
    for ms in (250..=8_000).step_by(250) {
        engine.tick(start + Duration::from_millis(ms));
    }

    assert_eq!(engine.state().player.energy, 50 - 4 + 2 * ENERGY_REGEN_AMOUNT);
    assert!(engine.state().enemy.hp < engine.state().enemy.max_hp);
}

#[test]
fn test_auto_attack_without_energy_only_logs() {
    let mut engine = seeded_engine(15);
    engine.state_mut().player.credits = 200;
    engine.buy_upgrade(UpgradeType::AutoClicker).unwrap();
    engine.state_mut().player.energy = 0;

    let start = Instant::now();
    engine.tick(start);
    let events = engine.tick(start + Duration::from_millis(AUTO_ATTACK_INTERVAL_MS));

    assert_eq!(
        events,
        vec![GameEvent::Log("Not enough energy to attack!".to_string())]
    );
    assert_eq!(engine.state().enemy.hp, 1000);
}

// =========================================================================
// Inventory
// =========================================================================

#[test]
fn test_starting_inventory_can_be_used() {
    let mut engine = seeded_engine(16);
    engine.state_mut().player.energy = 50;

    // Consumable first, then the rare weapon.
    engine.handle(Command::UseItem(0));
    assert_eq!(engine.state().player.energy, 75);

    let old_weapon = engine.state().player.equipment.weapon.clone().unwrap();
    engine.handle(Command::UseItem(0));

    let player = &engine.state().player;
    let weapon = player.equipment.weapon.as_ref().unwrap();
    assert_eq!(weapon.level, 2);
    assert_eq!(weapon.value, 30);
    assert_eq!(player.inventory, vec![old_weapon]);
    assert_eq!(player.equipment.weapon_bonus(), 30);
}
