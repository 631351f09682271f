use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Saturdays and Sundays.
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true for Monday through Friday.
pub fn is_business_day(day: NaiveDate) -> bool {
    !is_weekend(day)
}
