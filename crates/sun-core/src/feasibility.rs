//! Feasibility scoring and proposal statistics.
//!
//! Both read models are pure functions of the blueprint's constraints and the
//! current time. The `_at` variants take the clock as an argument so results
//! are reproducible in tests.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::models::{Level, Plan};

const DAY_MS: u64 = 24 * 60 * 60 * 1000;
const WEEK_MS: u64 = 7 * DAY_MS;

/// Weeks reported when the deadline is not in the future.
const DEFAULT_WEEKS: u64 = 4;

/// Parses a `YYYY-MM-DD` deadline as midnight UTC.
fn deadline_timestamp(deadline: &str) -> Option<Timestamp> {
    let date: Date = deadline.trim().parse().ok()?;
    date.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp())
}

/// Milliseconds from `now` until the deadline (negative when past).
fn remaining_ms(deadline: &str, now: Timestamp) -> Option<i64> {
    deadline_timestamp(deadline).map(|d| d.as_millisecond() - now.as_millisecond())
}

/// Scores how realistic the constraints are, from 0 to 100, against the
/// current time.
pub fn score(budget: u64, deadline: &str, urgency: Level) -> u8 {
    score_at(budget, deadline, urgency, Timestamp::now())
}

/// Scores how realistic the constraints are, from 0 to 100.
///
/// Starts at 100 and adjusts for budget, days until the deadline and
/// urgency. A missing budget or deadline scores 0. Distance to a past
/// deadline counts the same as distance to a future one.
///
/// ```rust
/// use jiff::Timestamp;
/// use sun_core::{feasibility::score_at, models::Level};
///
/// let now: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
/// assert_eq!(score_at(20_000, "2025-03-02", Level::Medium, now), 100);
/// assert_eq!(score_at(5_000, "2025-01-11", Level::High, now), 35);
/// assert_eq!(score_at(0, "2025-03-02", Level::Medium, now), 0);
/// ```
pub fn score_at(budget: u64, deadline: &str, urgency: Level, now: Timestamp) -> u8 {
    if budget == 0 || deadline.is_empty() {
        return 0;
    }

    let mut score: i32 = 100;

    if budget < 10_000 {
        score -= 20;
    } else if budget > 50_000 {
        score += 10;
    }

    if let Some(ms) = remaining_ms(deadline, now) {
        let days = ms.unsigned_abs().div_ceil(DAY_MS);
        if days < 30 {
            score -= 30;
        } else if days > 90 {
            score += 10;
        }
    }

    match urgency {
        Level::High => score -= 15,
        Level::Low => score += 5,
        Level::Medium => {}
    }

    score.clamp(0, 100) as u8
}

/// Headline numbers shown on the proposal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalStats {
    /// Tasks across all phases
    pub tasks: usize,
    /// Distinct roles needed
    pub team_size: usize,
    pub duration_weeks: u64,
    pub budget: u64,
}

impl ProposalStats {
    /// Computes the stats for `plan` against the current time.
    pub fn new(plan: &Plan, budget: u64) -> Self {
        Self::at(plan, budget, Timestamp::now())
    }

    /// Computes the stats for `plan` as of `now`.
    pub fn at(plan: &Plan, budget: u64, now: Timestamp) -> Self {
        let duration_weeks = match remaining_ms(&plan.deadline, now) {
            Some(ms) if ms > 0 => (ms as u64).div_ceil(WEEK_MS),
            _ => DEFAULT_WEEKS,
        };

        Self {
            tasks: plan.task_count(),
            team_size: plan.roles().len(),
            duration_weeks,
            budget,
        }
    }
}

/// Formats a whole-dollar amount with thousands separators, e.g. `$15,000`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::planner::plan_for;

    fn now() -> Timestamp {
        "2025-01-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_balanced_constraints_score_full() {
        assert_eq!(score_at(20_000, "2025-03-02", Level::Medium, now()), 100);
    }

    #[test]
    fn test_missing_inputs_score_zero() {
        assert_eq!(score_at(0, "2025-03-02", Level::Low, now()), 0);
        assert_eq!(score_at(20_000, "", Level::Low, now()), 0);
    }

    #[test]
    fn test_tight_cheap_urgent() {
        // -20 budget, -30 timeline, -15 urgency
        assert_eq!(score_at(5_000, "2025-01-11", Level::High, now()), 35);
    }

    #[test]
    fn test_bonuses_are_clamped() {
        assert_eq!(score_at(60_000, "2025-06-01", Level::Low, now()), 100);
        assert_eq!(score_at(5_000, "2025-06-01", Level::Low, now()), 95);
    }

    #[test]
    fn test_budget_boundaries() {
        let far = "2025-03-02";
        assert_eq!(score_at(10_000, far, Level::Medium, now()), 100);
        assert_eq!(score_at(9_999, far, Level::Medium, now()), 80);
        assert_eq!(score_at(50_000, far, Level::Medium, now()), 100);
        assert_eq!(score_at(50_001, far, Level::Medium, now()), 100);
        assert_eq!(score_at(50_001, far, Level::High, now()), 95);
    }

    #[test]
    fn test_day_count_rounds_up() {
        // 29.5 days away rounds to 30, which is not "under 30"
        assert_eq!(score_at(20_000, "2025-01-31", Level::Medium, now()), 100);
        // 28.5 days rounds to 29
        assert_eq!(score_at(20_000, "2025-01-30", Level::Medium, now()), 70);
    }

    #[test]
    fn test_past_deadline_uses_distance() {
        assert_eq!(score_at(20_000, "2024-06-01", Level::Medium, now()), 100);
        assert_eq!(score_at(20_000, "2024-12-25", Level::Medium, now()), 70);
    }

    #[test]
    fn test_unparseable_deadline_skips_timeline() {
        assert_eq!(score_at(20_000, "next spring", Level::High, now()), 85);
    }

    #[test]
    fn test_proposal_stats() {
        let plan = plan_for("Launch a SaaS platform", "2025-02-01");
        let stats = ProposalStats::at(&plan, 42_000, now());

        assert_eq!(stats.tasks, 8);
        assert_eq!(stats.team_size, 7);
        // 30.5 days
        assert_eq!(stats.duration_weeks, 5);
        assert_eq!(stats.budget, 42_000);
    }

    #[test]
    fn test_weeks_default_when_not_in_future() {
        for deadline in ["2024-12-01", "2025-01-01", "soon"] {
            let plan = plan_for("Brand refresh", deadline);
            assert_eq!(ProposalStats::at(&plan, 1, now()).duration_weeks, 4, "{deadline}");
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(15_000), "$15,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }
}
