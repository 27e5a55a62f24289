// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::datetime::{days_in_month, first_of_month};
use crate::gesture::HorizontalDirection;
use crate::grid::WeekStart;

/// Which span of dates a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Day,
    ThreeDays,
    Week,
    /// A custom number of days starting at the target date.
    Custom(u32),
    Month,
}

impl Mode {
    /// Number of days shown for a target date.
    pub fn span_days(self, target: NaiveDate) -> u32 {
        match self {
            Mode::Day => 1,
            Mode::ThreeDays => 3,
            Mode::Week => 7,
            Mode::Custom(days) => days,
            Mode::Month => days_in_month(target),
        }
    }
}

/// The first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date - Duration::days(week_start.column_of(date.weekday()) as i64)
}

/// The dates visible in `mode` for the given target.
pub fn date_range(mode: Mode, target: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = match mode {
        Mode::Week => start_of_week(target, week_start),
        Mode::Month => first_of_month(target),
        Mode::Day | Mode::ThreeDays | Mode::Custom(_) => target,
    };

    first
        .iter_days()
        .take(mode.span_days(target) as usize)
        .collect()
}

/// Moves the target by one page. A leftward swipe reveals the next page, a
/// rightward swipe the previous one.
///
/// Month pages land on the first of the month, so repeated swipes never drift
/// through short months.
pub fn shift_target(mode: Mode, target: NaiveDate, direction: HorizontalDirection) -> NaiveDate {
    let forward = direction == HorizontalDirection::Left;
    let shifted = match mode {
        Mode::Month if forward => first_of_month(target).checked_add_months(Months::new(1)),
        Mode::Month => first_of_month(target).checked_sub_months(Months::new(1)),
        _ => {
            let step = Duration::days(i64::from(mode.span_days(target)));
            match forward {
                true => target.checked_add_signed(step),
                false => target.checked_sub_signed(step),
            }
        }
    };

    shifted.unwrap_or(target)
}
