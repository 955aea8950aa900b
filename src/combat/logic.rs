//! Pure combat math: attack damage, crit rolls and kill rewards.

use crate::character::player::Player;
use crate::character::upgrades::Upgrades;
use crate::core::constants::*;
use rand::Rng;

/// Result of a player attack calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt (after crit multiplier if applicable).
    pub damage: u64,
    /// Whether this attack was a critical hit.
    pub is_crit: bool,
}

/// Roll for critical hit against a percent chance.
pub fn roll_crit(crit_chance_percent: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() * 100.0 < crit_chance_percent
}

/// Damage before the crit roll:
/// `floor((roll + weapon bonus) * damage_multiplier ^ damage_level)`.
pub fn base_attack_damage(roll: u32, weapon_bonus: u32, upgrades: &Upgrades) -> u64 {
    let raw = (roll + weapon_bonus) as f64;
    (raw * upgrades.damage.factor()).floor() as u64
}

/// Calculate player attack damage with crit roll.
pub fn calculate_player_attack(
    player: &Player,
    upgrades: &Upgrades,
    rng: &mut impl Rng,
) -> AttackResult {
    let roll = player.damage.roll(rng);
    let mut damage = base_attack_damage(roll, player.equipment.weapon_bonus(), upgrades);

    let is_crit = roll_crit(player.crit_chance, rng);
    if is_crit {
        damage = (damage as f64 * CRIT_MULTIPLIER).floor() as u64;
    }

    AttackResult { damage, is_crit }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KillRewards {
    pub xp: u64,
    pub credits: u64,
    pub nanobots: u64,
}

/// Rewards for defeating an enemy of `enemy_level`.
pub fn roll_kill_rewards(enemy_level: u32, rng: &mut impl Rng) -> KillRewards {
    let level = enemy_level as u64;
    let (credit_lo, credit_hi) = KILL_CREDITS_BONUS_RANGE;
    let (nano_lo, nano_hi) = KILL_NANOBOTS_BONUS_RANGE;

    KillRewards {
        xp: level * KILL_XP_PER_LEVEL,
        credits: level * KILL_CREDITS_PER_LEVEL + rng.gen_range(credit_lo..=credit_hi),
        nanobots: level / 2 + rng.gen_range(nano_lo..=nano_hi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::DamageRange;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed_player(roll: u32, crit: f64) -> Player {
        let mut player = Player::new();
        player.damage = DamageRange::new(roll, roll);
        player.crit_chance = crit;
        player.equipment.weapon = None;
        player
    }

    #[test]
    fn test_fixed_roll_no_crit_no_bonus() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let player = fixed_player(12, 0.0);
        let result = calculate_player_attack(&player, &Upgrades::new(), &mut rng);
        assert_eq!(result, AttackResult { damage: 12, is_crit: false });
    }

    #[test]
    fn test_guaranteed_crit_doubles() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let player = fixed_player(12, 100.0);
        let result = calculate_player_attack(&player, &Upgrades::new(), &mut rng);
        assert!(result.is_crit);
        assert_eq!(result.damage, 24);
    }

    #[test]
    fn test_weapon_bonus_and_upgrade_multiplier() {
        let mut upgrades = Upgrades::new();
        upgrades.damage.level = 2;
        // (12 + 5) * 1.44 = 24.48
        assert_eq!(base_attack_damage(12, 5, &upgrades), 24);
        assert_eq!(base_attack_damage(12, 0, &Upgrades::new()), 12);
    }

    #[test]
    fn test_crit_rate_tracks_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let crits = (0..20_000).filter(|_| roll_crit(5.0, &mut rng)).count();
        let rate = crits as f64 / 20_000.0;
        assert!((rate - 0.05).abs() < 0.01, "crit rate {rate}");
        assert!(!roll_crit(0.0, &mut rng));
    }

    #[test]
    fn test_kill_rewards_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..500 {
            let rewards = roll_kill_rewards(5, &mut rng);
            assert_eq!(rewards.xp, 125);
            assert!((55..=65).contains(&rewards.credits));
            assert!((2..=4).contains(&rewards.nanobots));
        }
    }
}
