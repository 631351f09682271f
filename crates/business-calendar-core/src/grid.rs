use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

pub const WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

/// A 6x7 display grid for one month, weeks starting on Monday.
///
/// Leading and trailing cells hold real days from the neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMatrix {
    year: i32,
    month: u32,
    weeks: [[NaiveDate; DAYS_PER_WEEK]; WEEKS],
}

impl MonthMatrix {
    pub fn weeks(&self) -> &[[NaiveDate; DAYS_PER_WEEK]; WEEKS] {
        &self.weeks
    }

    /// All 42 days, row by row.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// Top-left cell: the Monday on or before the 1st.
    pub fn first(&self) -> NaiveDate {
        self.weeks[0][0]
    }

    /// Bottom-right cell.
    pub fn last(&self) -> NaiveDate {
        self.weeks[WEEKS - 1][DAYS_PER_WEEK - 1]
    }

    /// `(row, column)` of a day, if the grid shows it.
    pub fn position(&self, day: NaiveDate) -> Option<(usize, usize)> {
        let offset = usize::try_from((day - self.first()).num_days()).ok()?;
        (offset < WEEKS * DAYS_PER_WEEK).then_some((offset / DAYS_PER_WEEK, offset % DAYS_PER_WEEK))
    }

    /// The `(year, month)` this grid was built for.
    pub const fn reference_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Whether a cell belongs to the reference month rather than a neighbour.
    pub fn is_in_month(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month() == self.month
    }
}

/// Build the month grid for the month containing `reference`.
pub fn month_matrix(reference: NaiveDate) -> Result<MonthMatrix, CalendarError> {
    let first_of_month = reference.with_day(1).unwrap_or(reference);
    let offset = u64::from(first_of_month.weekday().num_days_from_monday());
    let top_left = first_of_month
        .checked_sub_days(Days::new(offset))
        .ok_or(CalendarError::OutOfRange { date: first_of_month })?;

    // Every later cell is reachable once the bottom-right one is.
    let cells = (WEEKS * DAYS_PER_WEEK) as u64;
    top_left
        .checked_add_days(Days::new(cells - 1))
        .ok_or(CalendarError::OutOfRange { date: top_left })?;

    let weeks = std::array::from_fn(|week| {
        std::array::from_fn(|day| top_left + Days::new((week * DAYS_PER_WEEK + day) as u64))
    });

    Ok(MonthMatrix {
        year: first_of_month.year(),
        month: first_of_month.month(),
        weeks,
    })
}
