use chrono::{Datelike, Duration, NaiveDate};
use log::info;

use super::models::MatchEvent;

/// Earliest tournament date accepted into the timeline. Older results
/// predate a reliable rating baseline.
pub fn rating_baseline_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(1972, 12, 26).expect("valid calendar date")
}

/// Chronologically ordered, immutable match history
#[derive(Debug, Clone, Default)]
pub struct MatchTimeline {
    matches: Vec<MatchEvent>,
}

impl MatchTimeline {
    pub fn new(mut matches: Vec<MatchEvent>) -> Self {
        let cutoff = rating_baseline_cutoff();
        let total = matches.len();

        matches.retain(|m| m.date >= cutoff);
        if matches.len() < total {
            info!(
                "  → Dropped {} matches played before {}",
                total - matches.len(),
                cutoff
            );
        }

        // Stable: same-day matches keep their archive order
        matches.sort_by_key(|m| m.date);

        Self { matches }
    }

    pub fn sorted_matches(&self) -> &[MatchEvent] {
        &self.matches
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.matches.first().map(|m| m.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.matches.last().map(|m| m.date)
    }

    /// Latest tournament season on the timeline. Career spans are measured
    /// in seasons too, so this may differ from the last match's calendar year.
    pub fn last_season(&self) -> Option<i32> {
        self.matches.iter().map(|m| m.season).max()
    }

    pub fn weekly_windows(&self) -> WeeklyWindows {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => WeeklyWindows::new(first, last),
            _ => WeeklyWindows::empty(),
        }
    }

    /// Matches dated in `(previous_window_end, window_end]`
    pub fn matches_in_window(
        &self,
        window_end: NaiveDate,
        previous_window_end: NaiveDate,
    ) -> &[MatchEvent] {
        let start = self.matches.partition_point(|m| m.date <= previous_window_end);
        let end = self.matches.partition_point(|m| m.date <= window_end);

        if start >= end {
            return &[];
        }
        &self.matches[start..end]
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// One snapshot step, ending on a Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyWindow {
    pub monday: NaiveDate,
    pub previous_monday: NaiveDate,
}

impl WeeklyWindow {
    pub fn year(&self) -> i32 {
        self.monday.year()
    }
}

/// Mondays from the first match's week through the last match's week
#[derive(Debug, Clone)]
pub struct WeeklyWindows {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl WeeklyWindows {
    fn new(first_match: NaiveDate, last_match: NaiveDate) -> Self {
        Self {
            next: Some(monday_on_or_after(first_match)),
            last: monday_on_or_after(last_match),
        }
    }

    fn empty() -> Self {
        Self {
            next: None,
            last: NaiveDate::MIN,
        }
    }
}

impl Iterator for WeeklyWindows {
    type Item = WeeklyWindow;

    fn next(&mut self) -> Option<WeeklyWindow> {
        let monday = self.next.filter(|m| *m <= self.last)?;
        self.next = Some(monday + Duration::days(7));

        Some(WeeklyWindow {
            monday,
            previous_monday: monday - Duration::days(7),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) if next <= self.last => ((self.last - next).num_days() / 7 + 1) as usize,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WeeklyWindows {}

/// Round a date forward to the next Monday, unless it already is one
pub fn monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    if offset == 0 {
        date
    } else {
        date + Duration::days(7 - offset as i64)
    }
}
