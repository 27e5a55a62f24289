// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::bucket::{Bucket, MAX_VISIBLE_EVENTS, bucket_events, events_on};
use crate::event::Event;
use crate::grid::{MonthGrid, WEEKS_PER_MONTH, WeekStart, month_grid};

/// Space taken from every row by surrounding chrome, in the host's units.
pub const DEFAULT_CHROME_OFFSET: f32 = 30.0;

/// Inputs of [`layout_month`] besides the dates and events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthOptions {
    pub container_height: f32,
    pub week_start: WeekStart,
    pub max_visible: usize,
    pub chrome_offset: f32,
}

impl Default for MonthOptions {
    fn default() -> Self {
        Self {
            container_height: 0.0,
            week_start: WeekStart::SUNDAY,
            max_visible: MAX_VISIBLE_EVENTS,
            chrome_offset: DEFAULT_CHROME_OFFSET,
        }
    }
}

/// A laid out day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a, E> {
    pub row: usize,
    pub column: usize,
    /// Day of month, `0` for padding cells.
    pub day: u32,
    pub date: Option<NaiveDate>,
    /// The cell is the reference date.
    pub is_target: bool,
    /// The cell is today, per the now indicator.
    pub is_today: bool,
    pub bucket: Bucket<'a, E>,
}

/// What a press at a position inside the month grid refers to.
#[derive(Debug, PartialEq, Eq)]
pub enum PressTarget<'a, E> {
    None,
    Cell(NaiveDate),
    Event(&'a E),
}

/// The month grid with events bucketed per day.
#[derive(Debug, Clone)]
pub struct MonthLayout<'a, E> {
    grid: MonthGrid,
    row_height: f32,
    weeks: Vec<Vec<DayCell<'a, E>>>,
}

/// Lays out the month of `target` with its events.
///
/// Each cell holds the events starting within that day, capped at
/// `options.max_visible`, the rest being counted as overflow.
pub fn layout_month<'a, E: Event>(
    target: NaiveDate,
    events: &'a [E],
    today: Option<NaiveDate>,
    options: &MonthOptions,
) -> MonthLayout<'a, E> {
    let grid = month_grid(target, options.week_start);
    let row_height =
        (options.container_height / WEEKS_PER_MONTH as f32 - options.chrome_offset).max(0.0);

    let weeks = grid
        .weeks()
        .iter()
        .enumerate()
        .map(|(row, week)| {
            week.iter()
                .enumerate()
                .map(|(column, &day)| {
                    let date = grid.date_at(row, column);
                    let bucket = match date {
                        Some(date) => bucket_events(events_on(events, date), options.max_visible),
                        None => Bucket::default(),
                    };

                    DayCell {
                        row,
                        column,
                        day,
                        date,
                        is_target: date == Some(target),
                        is_today: date.is_some() && date == today,
                        bucket,
                    }
                })
                .collect()
        })
        .collect();

    MonthLayout {
        grid,
        row_height,
        weeks,
    }
}

impl<'a, E> MonthLayout<'a, E> {
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Height of a week row, never negative.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn weeks(&self) -> &[Vec<DayCell<'a, E>>] {
        &self.weeks
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&DayCell<'a, E>> {
        self.weeks.get(row).and_then(|week| week.get(column))
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell<'a, E>> {
        self.weeks.iter().flatten()
    }

    /// Resolves a press at `line` of the cell at (`row`, `column`).
    ///
    /// Line `0` is the day number, lines `1..` are the visible events and the
    /// overflow label follows them. Events take priority over their cell;
    /// pressing a padding cell resolves to nothing.
    pub fn press(&self, row: usize, column: usize, line: usize) -> PressTarget<'a, E> {
        let Some(cell) = self.cell(row, column) else {
            return PressTarget::None;
        };
        let Some(date) = cell.date else {
            return PressTarget::None;
        };

        match line
            .checked_sub(1)
            .and_then(|i| cell.bucket.visible.get(i).copied())
        {
            Some(event) => PressTarget::Event(event),
            None => PressTarget::Cell(date),
        }
    }
}
