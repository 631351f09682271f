use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day::is_weekend;

/// A start/end pair where either side may still be unset.
///
/// When both sides are present, `start <= end` is expected. [`DateRange::new`]
/// does not reorder its arguments; use [`DateRange::ordered`] for raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with neither side set.
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A range with only the start set.
    pub const fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A complete range, taken as given.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A complete range with the earlier day as start.
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        if b < a { Self::new(b, a) } else { Self::new(a, b) }
    }

    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both endpoints, or `None` for an incomplete range.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        is_within_range(day, self.start, self.end)
    }

    /// Weekend days inside the range, or an empty list if incomplete.
    pub fn weekends(&self) -> Vec<NaiveDate> {
        self.bounds()
            .map(|(start, end)| find_weekends_in_range(start, end))
            .unwrap_or_default()
    }
}

/// Closed-interval membership. False when either bound is missing.
pub fn is_within_range(day: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => start <= day && day <= end,
        _ => false,
    }
}

/// Returns all weekend days (Sat/Sun) in the inclusive date range [start, end],
/// in ascending order. Empty when `start > end`.
pub fn find_weekends_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_weekend(*d))
        .collect()
}
