use chrono::NaiveDate;

use crate::day::is_business_day;
use crate::error::CalendarError;

/// Returns the `n`-th business day strictly after `day`.
///
/// `day` itself is never counted, even when it is a business day.
/// `n = 0` returns `day` unchanged.
pub fn add_business_days(day: NaiveDate, n: u32) -> Result<NaiveDate, CalendarError> {
    step_business_days(day, n, NaiveDate::succ_opt)
}

/// Returns the `n`-th business day strictly before `day`.
///
/// Mirror image of [`add_business_days`].
pub fn subtract_business_days(day: NaiveDate, n: u32) -> Result<NaiveDate, CalendarError> {
    step_business_days(day, n, NaiveDate::pred_opt)
}

/// Shift by a signed number of business days: forward for positive `n`,
/// backward for negative `n`.
pub fn shift_business_days(day: NaiveDate, n: i64) -> Result<NaiveDate, CalendarError> {
    let magnitude =
        u32::try_from(n.unsigned_abs()).map_err(|_| CalendarError::BusinessDayCountTooLarge {
            days: n,
        })?;
    if n < 0 {
        subtract_business_days(day, magnitude)
    } else {
        add_business_days(day, magnitude)
    }
}

/// Number of business days in the inclusive range [start, end].
/// Returns 0 when `start > end`.
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d))
        .fold(0, |count, _| count + 1)
}

fn step_business_days(
    day: NaiveDate,
    n: u32,
    step: fn(&NaiveDate) -> Option<NaiveDate>,
) -> Result<NaiveDate, CalendarError> {
    let mut current = day;
    let mut remaining = n;
    while remaining > 0 {
        current = step(&current).ok_or(CalendarError::OutOfRange { date: current })?;
        if is_business_day(current) {
            remaining -= 1;
        }
    }
    Ok(current)
}
