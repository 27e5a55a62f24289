// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::datetime::{days_in_month, first_of_month};

/// Number of week rows in a month grid.
pub const WEEKS_PER_MONTH: usize = 6;

/// Number of day columns in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// The weekday a grid's first column starts on, `0` for Sunday through `6`
/// for Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "u8")]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);

    /// The raw index, `0` for Sunday.
    pub fn index(self) -> u8 {
        self.0
    }

    /// The weekday of the first column.
    pub fn weekday(self) -> Weekday {
        weekday_from_sunday(u32::from(self.0))
    }

    /// The column a weekday lands in when weeks start on `self`.
    pub fn column_of(self, weekday: Weekday) -> usize {
        ((weekday.num_days_from_sunday() + 7 - u32::from(self.0)) % 7) as usize
    }

    /// The weekdays in column order.
    pub fn weekdays(self) -> [Weekday; DAYS_PER_WEEK] {
        let mut days = [Weekday::Sun; DAYS_PER_WEEK];
        let mut day = self.weekday();
        for slot in &mut days {
            *slot = day;
            day = day.succ();
        }
        days
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=6 => Ok(Self(value)),
            _ => Err(format!(
                "week start must be between 0 (Sunday) and 6 (Saturday), got {value}"
            )),
        }
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl FromStr for WeekStart {
    type Err = String;

    /// Accepts either an index (`"1"`) or a weekday name (`"mon"`, `"Monday"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<u8>() {
            return Self::try_from(index);
        }

        s.parse::<Weekday>()
            .map(Self::from)
            .map_err(|_| format!("invalid week start: {s}"))
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

fn weekday_from_sunday(index: u32) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// A single position in the grid. `day` is `0` when the position is not part
/// of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    pub row: usize,
    pub column: usize,
    pub day: u32,
}

/// Six weeks of seven days covering one month.
///
/// The grid always has [`WEEKS_PER_MONTH`] rows, trailing rows are padded
/// with empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    week_start: WeekStart,
    weeks: [[u32; DAYS_PER_WEEK]; WEEKS_PER_MONTH],
}

/// Partitions the month containing `reference` into a 6×7 grid.
pub fn month_grid(reference: NaiveDate, week_start: WeekStart) -> MonthGrid {
    let first = first_of_month(reference);
    let offset = week_start.column_of(first.weekday());

    let mut weeks = [[0; DAYS_PER_WEEK]; WEEKS_PER_MONTH];
    for day in 1..=days_in_month(first) {
        let index = offset + day as usize - 1;
        weeks[index / DAYS_PER_WEEK][index % DAYS_PER_WEEK] = day;
    }

    MonthGrid {
        first,
        week_start,
        weeks,
    }
}

impl MonthGrid {
    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Day numbers per week, `0` for padding.
    pub fn weeks(&self) -> &[[u32; DAYS_PER_WEEK]; WEEKS_PER_MONTH] {
        &self.weeks
    }

    /// The day number at a position, `0` when empty or out of range.
    pub fn day_at(&self, row: usize, column: usize) -> u32 {
        self.weeks
            .get(row)
            .and_then(|week| week.get(column))
            .copied()
            .unwrap_or(0)
    }

    /// The date at a position, if that position belongs to the month.
    pub fn date_at(&self, row: usize, column: usize) -> Option<NaiveDate> {
        match self.day_at(row, column) {
            0 => None,
            day => Some(self.first + Duration::days(i64::from(day) - 1)),
        }
    }

    /// The position of `date`, if it belongs to this month.
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        if first_of_month(date) != self.first {
            return None;
        }

        let index = self.week_start.column_of(self.first.weekday()) + date.day0() as usize;
        Some((index / DAYS_PER_WEEK, index % DAYS_PER_WEEK))
    }

    /// All 42 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = DateCell> + '_ {
        self.weeks.iter().enumerate().flat_map(|(row, week)| {
            week.iter()
                .enumerate()
                .map(move |(column, &day)| DateCell { row, column, day })
        })
    }

    /// Weekday abbreviations in column order, e.g. `["Sun", "Mon", ...]`.
    pub fn weekday_labels(&self) -> [String; DAYS_PER_WEEK] {
        self.week_start.weekdays().map(|day| day.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_rejects_out_of_range() {
        assert!(WeekStart::try_from(6).is_ok());
        assert!(WeekStart::try_from(7).is_err());
    }

    #[test]
    fn week_start_parses_names_and_indices() {
        assert_eq!("1".parse::<WeekStart>().unwrap(), WeekStart::MONDAY);
        assert_eq!("mon".parse::<WeekStart>().unwrap(), WeekStart::MONDAY);
        assert_eq!("Sunday".parse::<WeekStart>().unwrap(), WeekStart::SUNDAY);
        assert!("9".parse::<WeekStart>().is_err());
        assert!("someday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn week_start_deserializes_from_integer() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            week_starts_on: WeekStart,
        }

        let ok: Wrapper = toml::from_str("week_starts_on = 6").unwrap();
        assert_eq!(ok.week_starts_on.weekday(), Weekday::Sat);

        let err = toml::from_str::<Wrapper>("week_starts_on = 7");
        assert!(err.is_err());
    }

    #[test]
    fn columns_follow_week_start() {
        assert_eq!(WeekStart::SUNDAY.column_of(Weekday::Sun), 0);
        assert_eq!(WeekStart::MONDAY.column_of(Weekday::Sun), 6);
        assert_eq!(WeekStart::MONDAY.column_of(Weekday::Mon), 0);
        assert_eq!(
            WeekStart::MONDAY.weekdays(),
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun
            ]
        );
    }

    #[test]
    fn lays_out_january_2024_from_sunday() {
        // 2024-01-01 is a Monday
        let grid = month_grid(date(2024, 1, 15), WeekStart::SUNDAY);
        assert_eq!(grid.weeks()[0], [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.weeks()[4], [28, 29, 30, 31, 0, 0, 0]);
        assert_eq!(grid.weeks()[5], [0; 7]);
    }

    #[test]
    fn lays_out_january_2024_from_monday() {
        let grid = month_grid(date(2024, 1, 15), WeekStart::MONDAY);
        assert_eq!(grid.weeks()[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(grid.weeks()[4], [29, 30, 31, 0, 0, 0, 0]);
    }

    #[test]
    fn uses_all_six_rows_when_needed() {
        // 2023-12-01 is a Friday, 31 days
        let grid = month_grid(date(2023, 12, 1), WeekStart::SUNDAY);
        assert_eq!(grid.weeks()[0], [0, 0, 0, 0, 0, 1, 2]);
        assert_eq!(grid.weeks()[5], [31, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn maps_positions_to_dates() {
        let grid = month_grid(date(2024, 1, 15), WeekStart::SUNDAY);
        assert_eq!(grid.date_at(0, 0), None);
        assert_eq!(grid.date_at(0, 1), Some(date(2024, 1, 1)));
        assert_eq!(grid.date_at(4, 3), Some(date(2024, 1, 31)));
        assert_eq!(grid.date_at(9, 9), None);
        assert_eq!(grid.position_of(date(2024, 1, 31)), Some((4, 3)));
        assert_eq!(grid.position_of(date(2024, 2, 1)), None);
    }

    #[test]
    fn labels_follow_week_start() {
        let grid = month_grid(date(2024, 1, 15), WeekStart::MONDAY);
        let labels = grid.weekday_labels();
        assert_eq!(labels[0], "Mon");
        assert_eq!(labels[6], "Sun");
    }
}
