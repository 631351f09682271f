use chrono::NaiveDate;
use serde::Serialize;

use crate::day::is_weekend;
use crate::range::DateRange;

/// Click-driven range selection.
///
/// The first click sets the start. A second click completes the range,
/// swapping roles if it lands before the start. Any click after that
/// starts over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeSelection {
    #[default]
    Empty,
    StartOnly(NaiveDate),
    Complete(DateRange),
}

/// A completed selection as ISO dates, with the weekend days it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub range: [String; 2],
    pub weekends: Vec<String>,
}

impl RangeSelection {
    /// Rebuild a selection from a range, ordering complete ranges.
    pub fn from_range(range: DateRange) -> Self {
        match (range.start(), range.end()) {
            (Some(start), Some(end)) => RangeSelection::Complete(DateRange::ordered(start, end)),
            (Some(start), None) => RangeSelection::StartOnly(start),
            (None, Some(end)) => RangeSelection::StartOnly(end),
            (None, None) => RangeSelection::Empty,
        }
    }

    #[must_use]
    pub fn click(self, day: NaiveDate) -> Self {
        match self {
            RangeSelection::Empty | RangeSelection::Complete(_) => RangeSelection::StartOnly(day),
            RangeSelection::StartOnly(start) => {
                RangeSelection::Complete(DateRange::ordered(start, day))
            }
        }
    }

    /// Replace the selection with a preset range.
    #[must_use]
    pub fn apply_preset(self, range: DateRange) -> Self {
        Self::from_range(range)
    }

    pub fn range(&self) -> DateRange {
        match *self {
            RangeSelection::Empty => DateRange::empty(),
            RangeSelection::StartOnly(start) => DateRange::starting(start),
            RangeSelection::Complete(range) => range,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, RangeSelection::Complete(_))
    }

    /// Weekend days cannot be picked as range endpoints.
    pub fn is_selectable(day: NaiveDate) -> bool {
        !is_weekend(day)
    }

    /// Summary of a complete selection, `None` otherwise.
    pub fn summary(&self) -> Option<SelectionSummary> {
        let RangeSelection::Complete(range) = self else {
            return None;
        };
        let (start, end) = range.bounds()?;
        Some(SelectionSummary {
            range: [start.to_string(), end.to_string()],
            weekends: range.weekends().iter().map(ToString::to_string).collect(),
        })
    }
}
