use super::constants::*;
use crate::character::player::Player;

/// XP threshold after a level-up: `floor(max_xp * 1.3)`.
pub fn next_max_xp(max_xp: u64) -> u64 {
    (max_xp as f64 * MAX_XP_GROWTH).floor() as u64
}

/// Applies one level-up: spends `max_xp`, raises the threshold, grants the
/// stat bonuses and refills energy.
fn level_up(player: &mut Player) {
    player.xp -= player.max_xp;
    player.level += 1;
    player.max_xp = next_max_xp(player.max_xp).max(1);

    player.damage.min += LEVEL_UP_DAMAGE_MIN_BONUS;
    player.damage.max += LEVEL_UP_DAMAGE_MAX_BONUS;
    player.defense += LEVEL_UP_DEFENSE_BONUS;
    player.energy = MAX_ENERGY;
}

/// Adds XP and processes every level-up it pays for.
///
/// Returns the new levels reached, in order, so callers can report each one.
/// On return `player.xp < player.max_xp`.
pub fn apply_xp(player: &mut Player, xp_gain: u64) -> Vec<u32> {
    player.xp += xp_gain;
    if player.max_xp == 0 {
        player.max_xp = BASE_MAX_XP;
    }

    let mut levels = Vec::new();
    while player.xp >= player.max_xp {
        level_up(player);
        levels.push(player.level);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_max_xp_floors() {
        assert_eq!(next_max_xp(100), 130);
        assert_eq!(next_max_xp(130), 169);
        assert_eq!(next_max_xp(169), 219);
    }

    #[test]
    fn test_apply_xp_below_threshold() {
        let mut player = Player::new();
        let levels = apply_xp(&mut player, 99);
        assert!(levels.is_empty());
        assert_eq!(player.xp, 99);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn test_single_level_up_grants_bonuses() {
        let mut player = Player::new();
        player.energy = 10;
        let levels = apply_xp(&mut player, 125);

        assert_eq!(levels, vec![2]);
        assert_eq!(player.xp, 25);
        assert_eq!(player.max_xp, 130);
        assert_eq!(player.damage.min, 12);
        assert_eq!(player.damage.max, 18);
        assert_eq!(player.defense, 6);
        assert_eq!(player.energy, MAX_ENERGY);
    }

    #[test]
    fn test_multiple_level_ups_in_one_call() {
        let mut player = Player::new();
        // 100 + 130 + 169 = 399
        let levels = apply_xp(&mut player, 400);

        assert_eq!(levels, vec![2, 3, 4]);
        assert_eq!(player.level, 4);
        assert_eq!(player.xp, 1);
        assert_eq!(player.max_xp, 219);
        assert_eq!(player.damage.min, 16);
        assert_eq!(player.damage.max, 24);
    }

    #[test]
    fn test_xp_always_below_threshold_after_resolution() {
        for start in [0u64, 1, 50, 99] {
            for gain in [0u64, 1, 25, 100, 1_000, 123_456, 10_000_000] {
                let mut player = Player::new();
                player.xp = start;
                apply_xp(&mut player, gain);
                assert!(
                    player.xp < player.max_xp,
                    "start {} gain {} left xp {} >= {}",
                    start,
                    gain,
                    player.xp,
                    player.max_xp
                );
            }
        }
    }

    #[test]
    fn test_zero_threshold_is_repaired() {
        let mut player = Player::new();
        player.max_xp = 0;
        apply_xp(&mut player, 5);
        assert_eq!(player.max_xp, BASE_MAX_XP);
        assert_eq!(player.xp, 5);
    }
}
