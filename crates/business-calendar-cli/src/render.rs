use business_calendar_core::{DateRange, MonthMatrix, is_weekend};
use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEK_DAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// How a grid cell is drawn. Earlier variants win when several apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Range start or end.
    Endpoint,
    /// Business day strictly inside the selected range.
    InRange,
    Weekend,
    /// Spillover day from the previous or next month.
    OtherMonth,
    Normal,
}

impl CellStyle {
    pub fn of(day: NaiveDate, matrix: &MonthMatrix, range: &DateRange) -> Self {
        if range.start() == Some(day) || range.end() == Some(day) {
            CellStyle::Endpoint
        } else if range.contains(day) && !is_weekend(day) {
            CellStyle::InRange
        } else if is_weekend(day) {
            CellStyle::Weekend
        } else if !matrix.is_in_month(day) {
            CellStyle::OtherMonth
        } else {
            CellStyle::Normal
        }
    }

    fn brackets(self) -> (char, char) {
        match self {
            CellStyle::Endpoint => ('[', ']'),
            CellStyle::InRange => ('(', ')'),
            CellStyle::Weekend => (' ', '-'),
            CellStyle::OtherMonth => (' ', '.'),
            CellStyle::Normal => (' ', ' '),
        }
    }
}

/// A four-column cell; today gets `>` in front unless it is bracketed.
pub fn render_cell(day: NaiveDate, style: CellStyle, is_today: bool) -> String {
    let (mut left, right) = style.brackets();
    if is_today && left == ' ' {
        left = '>';
    }
    format!("{left}{:>2}{right}", day.day())
}

pub fn month_title(matrix: &MonthMatrix) -> String {
    let (year, month) = matrix.reference_month();
    let name = MONTHS.get(month as usize - 1).copied().unwrap_or("?");
    format!("{name} {year}")
}

pub fn render_month(matrix: &MonthMatrix, range: &DateRange, today: NaiveDate) -> String {
    let mut lines = Vec::with_capacity(8);
    lines.push(month_title(matrix));
    lines.push(WEEK_DAYS.iter().map(|d| format!(" {d} ")).collect::<String>());
    for week in matrix.weeks() {
        let row: String = week
            .iter()
            .map(|day| render_cell(*day, CellStyle::of(*day, matrix, range), *day == today))
            .collect();
        lines.push(row.trim_end().to_string());
    }
    lines.join("\n")
}

pub const LEGEND: &str = "[d] range end  (d) in range  d- weekend  d. other month  >d today";
