mod render;

use anyhow::{Context, Result};
use business_calendar_core::{
    Clock, DateRange, FixedClock, PresetRange, RangeSelection, SystemClock, add_months,
    classify_range, count_business_days, find_weekends_in_range, month_matrix, range_for_preset,
    set_month, set_year, shift_business_days, year_range,
};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "business-calendar",
    about = "Browse months and pick business-day date ranges"
)]
struct Cli {
    /// Treat this date as today (YYYY-MM-DD, defaults to the local date)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a month grid
    Month {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Months to move forward (or back, if negative) from the chosen month
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        shift: i32,

        /// Highlight a range starting here (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Highlight a range ending here (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// List every preset range anchored at today
    Presets,

    /// Show one preset range: last-7, last-30, next-7, next-30
    Preset {
        kind: PresetRange,

        /// Print the selection summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report which preset, if any, a range matches
    Classify {
        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,
    },

    /// Move a date by a number of business days
    Shift {
        #[arg(long)]
        from: NaiveDate,

        /// Business days to move; negative moves backward
        #[arg(long, allow_negative_numbers = true)]
        days: i64,
    },

    /// List the weekend days inside a range
    Weekends {
        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,
    },

    /// Replay day clicks through the range picker
    Select {
        /// Days clicked, in order (comma-separated or repeated)
        #[arg(short, long = "click", value_delimiter = ',', required = true)]
        clicks: Vec<NaiveDate>,

        /// Print the selection summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the years offered by the year picker
    Years {
        #[arg(long, default_value_t = 10)]
        span: u32,

        /// Center year (defaults to the current year)
        #[arg(long)]
        center: Option<i32>,
    },
}

fn cmd_month(
    clock: &impl Clock,
    year: Option<i32>,
    month: Option<u32>,
    shift: i32,
    range: DateRange,
) -> Result<String> {
    let today = clock.today();
    let mut shown = today;
    if let Some(year) = year {
        shown = set_year(shown, year).with_context(|| format!("cannot show year {year}"))?;
    }
    if let Some(month) = month {
        // Months are 1-based on the command line
        shown = set_month(shown, month as i32 - 1)?;
    }
    shown = add_months(shown, shift).with_context(|| format!("cannot move {shift} month(s)"))?;
    debug!("Rendering month containing {shown}");

    let matrix = month_matrix(shown).context("failed to build month grid")?;
    let mut out = render::render_month(&matrix, &range, today);
    out.push_str("\n\n");
    out.push_str(render::LEGEND);
    Ok(out)
}

fn cmd_presets(clock: &impl Clock) -> Result<String> {
    let mut lines = Vec::new();
    for kind in PresetRange::ALL {
        let range = range_for_preset(kind, clock)
            .with_context(|| format!("failed to build preset {kind}"))?;
        let Some((start, end)) = range.bounds() else {
            continue;
        };
        let status = match classify_range(&range, clock) {
            Some(matched) if matched == kind => "matches",
            _ => "no match",
        };
        lines.push(format!(
            "{:<8} {:<13} {start} to {end} ({status})",
            kind.id(),
            kind.label()
        ));
    }
    Ok(lines.join("\n"))
}

fn cmd_preset(clock: &impl Clock, kind: PresetRange, json: bool) -> Result<String> {
    let range =
        range_for_preset(kind, clock).with_context(|| format!("failed to build preset {kind}"))?;
    info!("Selected preset {kind} ({})", kind.label());
    summarize(RangeSelection::default().apply_preset(range), clock, json)
}

fn cmd_classify(clock: &impl Clock, start: NaiveDate, end: NaiveDate) -> Result<String> {
    let range = DateRange::new(start, end);
    debug!(
        "{start} to {end}: {} business day(s)",
        count_business_days(start.min(end), start.max(end))
    );
    Ok(classify_range(&range, clock).map_or_else(|| "none".to_string(), |p| p.to_string()))
}

fn cmd_shift(from: NaiveDate, days: i64) -> Result<String> {
    let shifted = shift_business_days(from, days)
        .with_context(|| format!("failed to shift {from} by {days} business day(s)"))?;
    Ok(shifted.to_string())
}

fn cmd_weekends(start: NaiveDate, end: NaiveDate) -> Result<String> {
    if start > end {
        warn!("Start {start} is after end {end}");
    }
    let weekends = find_weekends_in_range(start, end);
    if weekends.is_empty() {
        return Ok("No weekend days in range.".to_string());
    }
    Ok(weekends
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn cmd_select(clock: &impl Clock, clicks: &[NaiveDate], json: bool) -> Result<String> {
    let mut selection = RangeSelection::default();
    for &day in clicks {
        if !RangeSelection::is_selectable(day) {
            warn!("{day}: weekend days cannot be selected, skipping");
            continue;
        }
        selection = selection.click(day);
        debug!("{day}: selection is now {selection:?}");
    }
    summarize(selection, clock, json)
}

fn cmd_years(clock: &impl Clock, span: u32, center: Option<i32>) -> Result<String> {
    let center = center.unwrap_or_else(|| clock.today().year());
    Ok(year_range(span, center)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" "))
}

fn summarize(selection: RangeSelection, clock: &impl Clock, json: bool) -> Result<String> {
    let Some(summary) = selection.summary() else {
        return Ok(match selection.range().start() {
            Some(start) => format!("Selection incomplete: start {start}, no end"),
            None => "No selection.".to_string(),
        });
    };

    if json {
        return serde_json::to_string_pretty(&summary).context("failed to serialize summary");
    }

    let [start, end] = &summary.range;
    let preset = classify_range(&selection.range(), clock)
        .map_or_else(|| "none".to_string(), |p| p.to_string());
    let weekends = if summary.weekends.is_empty() {
        "none".to_string()
    } else {
        summary.weekends.join(", ")
    };
    Ok(format!(
        "Range: {start} to {end}\nPreset: {preset}\nWeekends: {weekends}"
    ))
}

fn run(command: &Commands, clock: &impl Clock) -> Result<String> {
    match command {
        Commands::Month {
            year,
            month,
            shift,
            start,
            end,
        } => {
            let range = match (start, end) {
                (Some(start), Some(end)) => DateRange::ordered(*start, *end),
                (Some(day), None) | (None, Some(day)) => DateRange::starting(*day),
                (None, None) => DateRange::empty(),
            };
            cmd_month(clock, *year, *month, *shift, range)
        }
        Commands::Presets => cmd_presets(clock),
        Commands::Preset { kind, json } => cmd_preset(clock, *kind, *json),
        Commands::Classify { start, end } => cmd_classify(clock, *start, *end),
        Commands::Shift { from, days } => cmd_shift(*from, *days),
        Commands::Weekends { start, end } => cmd_weekends(*start, *end),
        Commands::Select { clicks, json } => cmd_select(clock, clicks, *json),
        Commands::Years { span, center } => cmd_years(clock, *span, *center),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => {
            info!("Using {today} as today");
            Box::new(FixedClock(today))
        }
        None => Box::new(SystemClock),
    };

    let output = run(&cli.command, &clock)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Monday
    fn clock() -> FixedClock {
        FixedClock(date(2024, 1, 15))
    }

    #[test]
    fn parse_month_args() {
        let cli = Cli::try_parse_from([
            "business-calendar",
            "month",
            "--year",
            "2021",
            "--month",
            "5",
            "--shift",
            "-1",
            "--today",
            "2021-05-12",
        ])
        .unwrap();

        assert_eq!(cli.today, Some(date(2021, 5, 12)));
        match cli.command {
            Commands::Month {
                year,
                month,
                shift,
                start,
                end,
            } => {
                assert_eq!(year, Some(2021));
                assert_eq!(month, Some(5));
                assert_eq!(shift, -1);
                assert!(start.is_none());
                assert!(end.is_none());
            }
            _ => panic!("expected Month command"),
        }
    }

    #[test]
    fn parse_month_rejects_month_13() {
        assert!(Cli::try_parse_from(["business-calendar", "month", "--month", "13"]).is_err());
    }

    #[test]
    fn parse_preset_kind() {
        let cli = Cli::try_parse_from(["business-calendar", "preset", "next-30", "--json"]).unwrap();
        match cli.command {
            Commands::Preset { kind, json } => {
                assert_eq!(kind, PresetRange::Next30BusinessDays);
                assert!(json);
            }
            _ => panic!("expected Preset command"),
        }
    }

    #[test]
    fn parse_preset_unknown_kind() {
        assert!(Cli::try_parse_from(["business-calendar", "preset", "next-14"]).is_err());
    }

    #[test]
    fn parse_select_clicks() {
        let cli = Cli::try_parse_from([
            "business-calendar",
            "select",
            "-c",
            "2021-05-03,2021-05-07",
            "--click",
            "2021-05-10",
        ])
        .unwrap();
        match cli.command {
            Commands::Select { clicks, json } => {
                assert_eq!(clicks, vec![date(2021, 5, 3), date(2021, 5, 7), date(2021, 5, 10)]);
                assert!(!json);
            }
            _ => panic!("expected Select command"),
        }
    }

    #[test]
    fn parse_select_requires_click() {
        assert!(Cli::try_parse_from(["business-calendar", "select"]).is_err());
    }

    #[test]
    fn parse_shift_negative_days() {
        let cli = Cli::try_parse_from([
            "business-calendar",
            "shift",
            "--from",
            "2021-05-03",
            "--days",
            "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Shift { from, days } => {
                assert_eq!(from, date(2021, 5, 3));
                assert_eq!(days, -1);
            }
            _ => panic!("expected Shift command"),
        }
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["business-calendar", "years"]).unwrap();
        assert!(cli.today.is_none());
        assert_eq!(cli.log_level, "info");
        match cli.command {
            Commands::Years { span, center } => {
                assert_eq!(span, 10);
                assert!(center.is_none());
            }
            _ => panic!("expected Years command"),
        }
    }

    #[test]
    fn month_navigates_from_today() {
        let out = cmd_month(&clock(), Some(2021), Some(5), 0, DateRange::empty()).unwrap();
        assert!(out.starts_with("May 2021\n"));
        let out = cmd_month(&clock(), None, None, -1, DateRange::empty()).unwrap();
        assert!(out.starts_with("December 2023\n"));
        assert!(out.ends_with(render::LEGEND));
    }

    #[test]
    fn month_marks_today() {
        let out = cmd_month(&clock(), None, None, 0, DateRange::empty()).unwrap();
        assert!(out.contains(">15 "));
    }

    #[test]
    fn presets_all_match_on_weekday() {
        let out = cmd_presets(&clock()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.ends_with("(matches)")));
        assert!(lines[0].contains("2024-01-05 to 2024-01-15"));
    }

    #[test]
    fn presets_report_weekend_mismatch() {
        let out = cmd_presets(&FixedClock(date(2024, 1, 13))).unwrap();
        assert!(out.lines().all(|l| l.ends_with("(no match)")));
    }

    #[test]
    fn preset_text_summary() {
        let out = cmd_preset(&clock(), PresetRange::Last7BusinessDays, false).unwrap();
        assert_eq!(
            out,
            "Range: 2024-01-05 to 2024-01-15\nPreset: last-7\nWeekends: 2024-01-06, 2024-01-07, 2024-01-13, 2024-01-14"
        );
    }

    #[test]
    fn preset_json_summary() {
        let out = cmd_preset(&clock(), PresetRange::Next7BusinessDays, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["range"][0], "2024-01-15");
        assert_eq!(value["range"][1], "2024-01-23");
        assert_eq!(value["weekends"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn classify_output() {
        assert_eq!(
            cmd_classify(&clock(), date(2024, 1, 5), date(2024, 1, 15)).unwrap(),
            "last-7"
        );
        assert_eq!(
            cmd_classify(&clock(), date(2021, 5, 1), date(2021, 5, 5)).unwrap(),
            "none"
        );
    }

    #[test]
    fn shift_output() {
        assert_eq!(cmd_shift(date(2021, 5, 6), 2).unwrap(), "2021-05-10");
        assert_eq!(cmd_shift(date(2021, 5, 3), -1).unwrap(), "2021-04-30");
    }

    #[test]
    fn weekends_output() {
        assert_eq!(
            cmd_weekends(date(2021, 4, 26), date(2021, 5, 2)).unwrap(),
            "2021-05-01\n2021-05-02"
        );
        assert_eq!(
            cmd_weekends(date(2021, 4, 26), date(2021, 4, 28)).unwrap(),
            "No weekend days in range."
        );
    }

    #[test]
    fn select_skips_weekend_clicks() {
        let clicks = [date(2024, 1, 5), date(2024, 1, 13), date(2024, 1, 15)];
        let out = cmd_select(&clock(), &clicks, false).unwrap();
        assert_eq!(
            out,
            "Range: 2024-01-05 to 2024-01-15\nPreset: last-7\nWeekends: 2024-01-06, 2024-01-07, 2024-01-13, 2024-01-14"
        );
    }

    #[test]
    fn select_incomplete() {
        let out = cmd_select(&clock(), &[date(2024, 1, 16)], false).unwrap();
        assert_eq!(out, "Selection incomplete: start 2024-01-16, no end");
        let out = cmd_select(&clock(), &[date(2024, 1, 13)], false).unwrap();
        assert_eq!(out, "No selection.");
    }

    #[test]
    fn years_output() {
        assert_eq!(cmd_years(&clock(), 5, Some(2021)).unwrap(), "2019 2020 2021 2022 2023");
        assert_eq!(cmd_years(&clock(), 3, None).unwrap(), "2023 2024 2025");
    }
}
