use chrono::{DateTime, Duration, Utc};

/// Badge state derived from the hourly refresh cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    Fresh,
    Stale,
    Offline,
}

#[must_use]
pub fn evaluate_freshness(
    last_success: Option<DateTime<Utc>>,
    consecutive_failures: u32,
) -> FreshnessState {
    let Some(last_success) = last_success else {
        return if consecutive_failures >= 2 {
            FreshnessState::Offline
        } else {
            FreshnessState::Stale
        };
    };

    let age = Utc::now() - last_success;

    if age > Duration::hours(3) || consecutive_failures >= 2 {
        FreshnessState::Offline
    } else if age > Duration::minutes(75) || consecutive_failures >= 1 {
        FreshnessState::Stale
    } else {
        FreshnessState::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_succeeded_is_stale_until_failures_pile_up() {
        assert_eq!(evaluate_freshness(None, 0), FreshnessState::Stale);
        assert_eq!(evaluate_freshness(None, 1), FreshnessState::Stale);
        assert_eq!(evaluate_freshness(None, 2), FreshnessState::Offline);
    }

    #[test]
    fn recent_success_is_fresh() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(30)), 0),
            FreshnessState::Fresh
        );
    }

    #[test]
    fn one_missed_cycle_is_stale() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(90)), 0),
            FreshnessState::Stale
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(30)), 1),
            FreshnessState::Stale
        );
    }

    #[test]
    fn long_silence_or_repeated_failures_mean_offline() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::hours(4)), 0),
            FreshnessState::Offline
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(10)), 2),
            FreshnessState::Offline
        );
    }

    #[test]
    fn boundaries_sit_between_cadence_multiples() {
        let now = Utc::now();
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(74)), 0),
            FreshnessState::Fresh
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(76)), 0),
            FreshnessState::Stale
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(179)), 0),
            FreshnessState::Stale
        );
        assert_eq!(
            evaluate_freshness(Some(now - Duration::minutes(181)), 0),
            FreshnessState::Offline
        );
    }
}
