// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Commands opening the interactive calendar views.

use std::{error::Error, path::PathBuf};

use calview_core::{EventItem, Mode, STABLE_FORMAT_DATEONLY};
use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::config::Config;
use crate::events::load_events;
use crate::parser::{arg_date, arg_days, arg_events, get_date, get_days, get_events};
use crate::tui::{CalendarStore, run_month_view, run_range_view};

/// Arguments shared by every view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewArgs {
    pub date: Option<NaiveDate>,
    pub events: Option<PathBuf>,
}

impl ViewArgs {
    fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            events: get_events(matches),
        }
    }

    async fn store(&self, mode: Mode, config: &Config) -> Result<CalendarStore, Box<dyn Error>> {
        let target = self.date.unwrap_or_else(|| Local::now().date_naive());
        let events = match self.events.as_ref().or(config.events.as_ref()) {
            Some(path) => load_events(path).await?,
            None => Vec::<EventItem>::new(),
        };

        tracing::debug!(?mode, date = %target, events = events.len(), "opening view");
        Ok(CalendarStore::new(mode, target, config.layout.week_starts_on, events))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdMonth {
    pub args: ViewArgs,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the month grid")
            .arg(arg_date())
            .arg(arg_events())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            args: ViewArgs::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let store = self.args.store(Mode::Month, config).await?;
        let store = run_month_view(store, config)?;
        print_selection(&store);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdRange {
    pub mode: Mode,
    pub args: ViewArgs,
}

impl CmdRange {
    pub const DAY: &str = "day";
    pub const THREE_DAYS: &str = "three-days";
    pub const WEEK: &str = "week";
    pub const CUSTOM: &str = "range";

    pub fn commands() -> [Command; 4] {
        let with_args = |cmd: Command| cmd.arg(arg_date()).arg(arg_events());
        [
            with_args(Command::new(Self::DAY).alias("d").about("Show a single day")),
            with_args(
                Command::new(Self::THREE_DAYS)
                    .alias("3days")
                    .about("Show three days starting from the date"),
            ),
            with_args(
                Command::new(Self::WEEK)
                    .alias("w")
                    .about("Show the week containing the date"),
            ),
            with_args(
                Command::new(Self::CUSTOM)
                    .about("Show a number of days starting from the date")
                    .arg(arg_days()),
            ),
        ]
    }

    /// Builds the command for the subcommand `name`, which must be one of
    /// the names returned by [`CmdRange::commands`].
    pub fn from(name: &str, matches: &ArgMatches) -> Option<Self> {
        let mode = match name {
            Self::DAY => Mode::Day,
            Self::THREE_DAYS => Mode::ThreeDays,
            Self::WEEK => Mode::Week,
            Self::CUSTOM => Mode::Custom(get_days(matches)),
            _ => return None,
        };
        Some(Self {
            mode,
            args: ViewArgs::from(matches),
        })
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let store = self.args.store(self.mode, config).await?;
        let store = run_range_view(store, config)?;
        print_selection(&store);
        Ok(())
    }
}

fn print_selection(store: &CalendarStore) {
    if let Some(date) = store.selected {
        println!("{} {}", "Selected:".green(), date.format(STABLE_FORMAT_DATEONLY));
    }
}
