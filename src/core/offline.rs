//! Offline income.
//!
//! Credits earned while the game was closed, paid out once when a snapshot is
//! restored.

use super::constants::*;

/// Report of offline income results
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OfflineReport {
    pub elapsed_ms: i64,
    /// Whole minutes counted toward income, after the cap.
    pub minutes: u64,
    pub credits: u64,
}

/// Whole offline minutes, capped at `MAX_OFFLINE_SECONDS`. Clock skew
/// (negative elapsed time) counts as zero.
pub fn offline_minutes(elapsed_ms: i64) -> u64 {
    let capped_ms = elapsed_ms.clamp(0, MAX_OFFLINE_SECONDS * 1000);
    (capped_ms / 60_000) as u64
}

/// `minutes * player_level * 2`
pub fn calculate_offline_credits(minutes: u64, player_level: u32) -> u64 {
    minutes * player_level as u64 * OFFLINE_CREDITS_PER_MINUTE_PER_LEVEL
}

/// Computes the income for a snapshot taken at `saved_at_ms`, restored at `now_ms`.
pub fn calculate_offline_income(saved_at_ms: i64, now_ms: i64, player_level: u32) -> OfflineReport {
    let elapsed_ms = now_ms.saturating_sub(saved_at_ms);
    if elapsed_ms <= 0 {
        return OfflineReport::default();
    }

    let minutes = offline_minutes(elapsed_ms);
    OfflineReport {
        elapsed_ms,
        minutes,
        credits: calculate_offline_credits(minutes, player_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_minutes_round_down() {
        assert_eq!(offline_minutes(59_999), 0);
        assert_eq!(offline_minutes(60_000), 1);
        assert_eq!(offline_minutes(179_000), 2);
    }

    #[test]
    fn test_income_formula() {
        let report = calculate_offline_income(0, 10 * 60_000, 3);
        assert_eq!(report.minutes, 10);
        assert_eq!(report.credits, 60);
    }

    #[test]
    fn test_under_a_minute_pays_nothing() {
        let report = calculate_offline_income(1_000, 31_000, 12);
        assert_eq!(report.minutes, 0);
        assert_eq!(report.credits, 0);
        assert_eq!(report.elapsed_ms, 30_000);
    }

    #[test]
    fn test_capped_at_max_offline_time() {
        let week_ms = MAX_OFFLINE_SECONDS * 1000;
        let one_week = calculate_offline_income(0, week_ms, 5);
        let two_weeks = calculate_offline_income(0, week_ms * 2, 5);
        assert_eq!(one_week.credits, two_weeks.credits);
        assert_eq!(one_week.minutes, 7 * 24 * 60);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let report = calculate_offline_income(i64::MIN, 1_700_000_000_000, 3);
        assert_eq!(report.elapsed_ms, i64::MAX);
        assert_eq!(report.minutes, 7 * 24 * 60);

        let report = calculate_offline_income(i64::MAX, i64::MIN, 3);
        assert_eq!(report, OfflineReport::default());
    }

    #[test]
    fn test_negative_elapsed_returns_default() {
        let report = calculate_offline_income(10_000, 0, 5);
        assert_eq!(report, OfflineReport::default());
    }
}
