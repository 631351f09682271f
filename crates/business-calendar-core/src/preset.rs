use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::business_days::{add_business_days, count_business_days, subtract_business_days};
use crate::clock::Clock;
use crate::error::CalendarError;
use crate::range::DateRange;

/// Quick-select ranges anchored at today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetRange {
    /// Today and the 6 business days before it.
    #[serde(rename = "last-7")]
    Last7BusinessDays,
    /// Today and the 29 business days before it.
    #[serde(rename = "last-30")]
    Last30BusinessDays,
    /// Today and the 6 business days after it.
    #[serde(rename = "next-7")]
    Next7BusinessDays,
    /// Today and the 29 business days after it.
    #[serde(rename = "next-30")]
    Next30BusinessDays,
}

/// Which side of today a preset extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl PresetRange {
    pub const ALL: [PresetRange; 4] = [
        PresetRange::Last7BusinessDays,
        PresetRange::Last30BusinessDays,
        PresetRange::Next7BusinessDays,
        PresetRange::Next30BusinessDays,
    ];

    /// Business days covered by the range, today included.
    pub const fn business_days(self) -> u32 {
        match self {
            PresetRange::Last7BusinessDays | PresetRange::Next7BusinessDays => 7,
            PresetRange::Last30BusinessDays | PresetRange::Next30BusinessDays => 30,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            PresetRange::Last7BusinessDays | PresetRange::Last30BusinessDays => Direction::Backward,
            PresetRange::Next7BusinessDays | PresetRange::Next30BusinessDays => Direction::Forward,
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            PresetRange::Last7BusinessDays => "Last 7 Days",
            PresetRange::Last30BusinessDays => "Last 30 Days",
            PresetRange::Next7BusinessDays => "7 Days",
            PresetRange::Next30BusinessDays => "30 Days",
        }
    }

    /// Short identifier, as accepted by `FromStr`.
    pub const fn id(self) -> &'static str {
        match self {
            PresetRange::Last7BusinessDays => "last-7",
            PresetRange::Last30BusinessDays => "last-30",
            PresetRange::Next7BusinessDays => "next-7",
            PresetRange::Next30BusinessDays => "next-30",
        }
    }

    fn matching(direction: Direction, business_days: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.direction() == direction && p.business_days() == business_days)
    }
}

impl fmt::Display for PresetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PresetRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == normalized)
            .ok_or_else(|| CalendarError::UnknownPreset(s.to_string()))
    }
}

/// Build the range a preset selects, anchored at `clock.today()`.
///
/// The far end is `business_days() - 1` business-day steps from today, so
/// today itself supplies the remaining day of the count.
pub fn range_for_preset(kind: PresetRange, clock: &impl Clock) -> Result<DateRange, CalendarError> {
    let today = clock.today();
    let steps = kind.business_days() - 1;
    Ok(match kind.direction() {
        Direction::Backward => DateRange::new(subtract_business_days(today, steps)?, today),
        Direction::Forward => DateRange::new(today, add_business_days(today, steps)?),
    })
}

/// Find the preset a range corresponds to, if any.
///
/// Business days are counted inclusively over the range. A range ending today
/// can only match a backward preset; otherwise a range starting today can
/// only match a forward one. Reversed endpoints are swapped first.
pub fn classify_range(range: &DateRange, clock: &impl Clock) -> Option<PresetRange> {
    let (start, end) = range.bounds()?;
    let (start, end) = if end < start { (end, start) } else { (start, end) };

    let today = clock.today();
    let business_days = count_business_days(start, end);

    if end == today {
        PresetRange::matching(Direction::Backward, business_days)
    } else if start == today {
        PresetRange::matching(Direction::Forward, business_days)
    } else {
        None
    }
}
