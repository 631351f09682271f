pub mod business_days;
pub mod clock;
pub mod day;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod preset;
pub mod range;
pub mod selection;

pub use business_days::{
    add_business_days, count_business_days, shift_business_days, subtract_business_days,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{is_business_day, is_weekend};
pub use error::CalendarError;
pub use grid::{MonthMatrix, month_matrix};
pub use navigation::{add_months, set_month, set_year, year_range};
pub use preset::{PresetRange, classify_range, range_for_preset};
pub use range::{DateRange, find_weekends_in_range, is_within_range};
pub use selection::{RangeSelection, SelectionSummary};
