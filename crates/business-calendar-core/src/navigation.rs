//! Month and year navigation for a displayed calendar page.
//!
//! All helpers clamp the day of month to the length of the target month, so
//! January 31st moved to February becomes February 28th (or 29th).

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Shift `day` by `n` months, forward for positive `n`.
pub fn add_months(day: NaiveDate, n: i32) -> Result<NaiveDate, CalendarError> {
    let total = i64::from(day.year()) * 12 + i64::from(day.month0()) + i64::from(n);
    from_month_index(total, day.day(), day)
}

/// Move `day` to the zero-based month `index` of its year.
///
/// Indices outside `0..12` roll over into neighbouring years: 12 is January of
/// the next year, -1 is December of the previous one.
pub fn set_month(day: NaiveDate, index: i32) -> Result<NaiveDate, CalendarError> {
    let total = i64::from(day.year()) * 12 + i64::from(index);
    from_month_index(total, day.day(), day)
}

/// Move `day` to `year`, keeping month and day. February 29th becomes
/// February 28th in a non-leap year.
pub fn set_year(day: NaiveDate, year: i32) -> Result<NaiveDate, CalendarError> {
    let first =
        NaiveDate::from_ymd_opt(year, day.month(), 1).ok_or(CalendarError::InvalidYear { year })?;
    Ok(clamp_day(first, day.day()))
}

/// `span` consecutive years around `center`, starting at `center - span / 2`.
///
/// Even spans put the extra year before `center`.
pub fn year_range(span: u32, center: i32) -> Vec<i32> {
    let first = i64::from(center) - i64::from(span / 2);
    (0..i64::from(span))
        .filter_map(|i| i32::try_from(first + i).ok())
        .collect()
}

/// Number of days in the month containing `day`.
pub fn days_in_month(day: NaiveDate) -> u32 {
    let first = day.with_day(1).unwrap_or(day);
    first
        .checked_add_months(chrono::Months::new(1))
        .map(|next| next.signed_duration_since(first).num_days())
        .and_then(|days| u32::try_from(days).ok())
        .unwrap_or(31)
}

fn from_month_index(
    total: i64,
    day_of_month: u32,
    origin: NaiveDate,
) -> Result<NaiveDate, CalendarError> {
    let out_of_range = CalendarError::OutOfRange { date: origin };
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range.clone())?;
    // rem_euclid keeps this in 0..12
    let month = total.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(out_of_range)?;
    Ok(clamp_day(first, day_of_month))
}

fn clamp_day(first: NaiveDate, day_of_month: u32) -> NaiveDate {
    let day = day_of_month.min(days_in_month(first));
    first.with_day(day).unwrap_or(first)
}
