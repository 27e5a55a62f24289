// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use calview_core::STABLE_FORMAT_DATEONLY;
use chrono::{Days, Local, NaiveDate};
use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

/// The reference date shared by every view.
pub fn arg_date() -> Arg {
    arg!(-d --date <DATE> "The date to show, defaults to today")
        .long_help("The date to show: YYYY-MM-DD, YYYY-MM, today, tomorrow or yesterday")
        .value_parser(parse_date)
}

pub fn get_date(matches: &ArgMatches) -> Option<NaiveDate> {
    matches.get_one::<NaiveDate>("date").copied()
}

pub fn arg_events() -> Arg {
    arg!(-e --events <FILE> "Path to a TOML event file, overrides the configured one")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

pub fn get_events(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("events").cloned()
}

pub fn arg_days() -> Arg {
    arg!(-n --days <N> "Number of days to show")
        .value_parser(value_parser!(u32).range(1..=31))
        .required(true)
}

pub fn get_days(matches: &ArgMatches) -> u32 {
    matches.get_one::<u32>("days").copied().unwrap_or(1)
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();
    match s.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Days::new(1)),
        "yesterday" => return Ok(today - Days::new(1)),
        _ => {}
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, STABLE_FORMAT_DATEONLY) {
        Ok(date)
    } else if let Ok(date) = NaiveDate::parse_from_str(&format!("{s}-01"), STABLE_FORMAT_DATEONLY) {
        Ok(date)
    } else {
        Err(format!(
            "Invalid date '{s}'. Expected format: YYYY-MM-DD, YYYY-MM, today, tomorrow or yesterday"
        ))
    }
}
