//! Day keys for grouping dated records
//!
//! A day key is the calendar-date prefix of a stored ISO-8601 timestamp.
//! No timezone conversion happens: `"2026-10-17T23:30:00-07:00"` and
//! `"2026-10-17T23:30:00Z"` both land on 2026-10-17. Hosts must store
//! timestamps in the user's local day for streaks to line up.

use chrono::NaiveDate;

/// Calendar day a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Parse a bare "YYYY-MM-DD" string
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Compute the day key of a timestamp from its first 10 characters.
///
/// Returns `None` for anything that does not start with a valid date.
pub fn day_key(timestamp: &str) -> Option<DayKey> {
    let prefix = timestamp.get(..10)?;
    DayKey::parse(prefix)
}

/// Whole days from `from` to `to` (positive when `to` is later)
pub fn days_between(from: DayKey, to: DayKey) -> i64 {
    (to.0 - from.0).num_days()
}
