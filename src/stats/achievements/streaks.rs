//! Streak tracking
//!
//! Two different questions, two functions:
//! - [`current_streak`]: the run of logged days ending today or yesterday
//! - [`longest_streak`]: the best run anywhere in history

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use crate::domain::Meal;
use crate::stats::time_bucket::{day_key, days_between, DayKey};

/// Streak state derived from the meal log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
    pub last_log_day: Option<DayKey>,
}

impl StreakSummary {
    /// Check if the streak is still alive (logged today or yesterday)
    pub fn is_active(&self) -> bool {
        self.current > 0
    }
}

/// Distinct logged days, oldest first. Malformed timestamps are skipped.
pub fn logged_days(meals: &[Meal]) -> BTreeSet<DayKey> {
    meals.iter().filter_map(|m| day_key(&m.timestamp)).collect()
}

/// Consecutive logged days ending today or yesterday.
///
/// Logging yesterday but not yet today keeps the streak; a full skipped day
/// resets it to 0.
pub fn current_streak(meals: &[Meal], today: NaiveDate) -> u32 {
    current_streak_from_days(&logged_days(meals), DayKey::from(today))
}

fn current_streak_from_days(days: &BTreeSet<DayKey>, today: DayKey) -> u32 {
    let mut newest_first = days.iter().rev();
    let Some(&last_log_day) = newest_first.next() else {
        return 0;
    };

    if days_between(last_log_day, today) > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut newer = last_log_day;
    for &older in newest_first {
        if days_between(older, newer) != 1 {
            break;
        }
        streak += 1;
        newer = older;
    }
    streak
}

/// Longest run of consecutive logged days anywhere in history
pub fn longest_streak(meals: &[Meal]) -> u32 {
    longest_streak_from_days(&logged_days(meals))
}

pub(crate) fn longest_streak_from_days(days: &BTreeSet<DayKey>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<DayKey> = None;

    for &day in days {
        run = match previous {
            Some(prev) if days_between(prev, day) == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

/// Current and best streak in one pass over the log
pub fn streak_summary(meals: &[Meal], today: NaiveDate) -> StreakSummary {
    let days = logged_days(meals);
    StreakSummary {
        current: current_streak_from_days(&days, DayKey::from(today)),
        best: longest_streak_from_days(&days),
        last_log_day: days.iter().next_back().copied(),
    }
}

/// Today's date on the local clock
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal_on(day: &str) -> Meal {
        Meal::new(day, "meal", format!("{day}T12:00:00Z"))
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_no_meals_no_streak() {
        assert_eq!(current_streak(&[], date("2026-10-17")), 0);
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_logged_today_only() {
        let meals = vec![meal_on("2026-10-17")];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 1);
    }

    #[test]
    fn test_yesterday_and_today() {
        let meals = vec![meal_on("2026-10-16"), meal_on("2026-10-17")];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 2);
    }

    #[test]
    fn test_skipped_today_and_yesterday_breaks() {
        let meals = vec![meal_on("2026-10-14"), meal_on("2026-10-15")];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 0);
    }

    #[test]
    fn test_grace_period_keeps_yesterdays_run() {
        let meals = vec![meal_on("2026-10-14"), meal_on("2026-10-15"), meal_on("2026-10-16")];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 3);
    }

    #[test]
    fn test_future_last_day_counts_like_today() {
        let meals = vec![meal_on("2026-10-18"), meal_on("2026-10-17")];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 2);
    }

    #[test]
    fn test_run_stops_at_first_gap() {
        let meals = vec![
            meal_on("2026-10-10"),
            meal_on("2026-10-11"),
            meal_on("2026-10-12"),
            meal_on("2026-10-15"),
            meal_on("2026-10-16"),
            meal_on("2026-10-17"),
        ];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 3);
    }

    #[test]
    fn test_multiple_meals_per_day_count_once() {
        let meals = vec![
            Meal::new("a", "breakfast", "2026-10-17T08:00:00Z"),
            Meal::new("b", "lunch", "2026-10-17T12:00:00Z"),
            Meal::new("c", "dinner", "2026-10-16T19:00:00Z"),
        ];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 2);
    }

    #[test]
    fn test_malformed_dates_are_skipped() {
        let meals = vec![
            Meal::new("a", "x", "n/a"),
            meal_on("2026-10-16"),
            meal_on("2026-10-17"),
        ];
        assert_eq!(current_streak(&meals, date("2026-10-17")), 2);
    }

    #[test]
    fn test_longest_streak_finds_older_run() {
        let meals = vec![
            meal_on("2026-09-01"),
            meal_on("2026-09-02"),
            meal_on("2026-09-03"),
            meal_on("2026-09-04"),
            meal_on("2026-10-16"),
            meal_on("2026-10-17"),
        ];
        assert_eq!(longest_streak(&meals), 4);

        let summary = streak_summary(&meals, date("2026-10-17"));
        assert_eq!(summary.current, 2);
        assert_eq!(summary.best, 4);
        assert_eq!(summary.last_log_day, DayKey::parse("2026-10-17"));
        assert!(summary.is_active());
    }

    #[test]
    fn test_longest_streak_across_month_boundary() {
        let meals = vec![meal_on("2026-01-31"), meal_on("2026-02-01"), meal_on("2026-02-02")];
        assert_eq!(longest_streak(&meals), 3);
    }
}
