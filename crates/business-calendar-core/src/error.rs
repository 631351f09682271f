use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Date arithmetic from {date} leaves the supported calendar range")]
    OutOfRange { date: chrono::NaiveDate },

    #[error("Year {year} is outside the supported calendar range")]
    InvalidYear { year: i32 },

    #[error("Business day count {days} is too large")]
    BusinessDayCountTooLarge { days: i64 },

    #[error("Unknown preset range: {0}. Expected: last-7, last-30, next-7, next-30")]
    UnknownPreset(String),
}
