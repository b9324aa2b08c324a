//! Trailing date window resolution

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sv_core::DEFAULT_WINDOW_DAYS;

/// A closed date window `[start, end]` at day granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window ending on the UTC date of `now`, starting `days` earlier.
    /// Pure function of the supplied instant; no error conditions.
    pub fn trailing(now: DateTime<Utc>, days: i64) -> Self {
        let end = now.date_naive();
        Self { start: end - Duration::days(days), end }
    }

    /// The default trailing 30-day window
    pub fn last_30_days(now: DateTime<Utc>) -> Self {
        Self::trailing(now, DEFAULT_WINDOW_DAYS)
    }

    /// Window start formatted for the news API (YYYY-MM-DD)
    pub fn start_ymd(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// Window end formatted for the news API (YYYY-MM-DD)
    pub fn end_ymd(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
