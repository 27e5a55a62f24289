// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

use calview_core::{EventItem, HeaderColumn};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::tui::event_cell::{EventRenderer, TitleRenderer};
use crate::tui::theme::Theme;

/// Width of the blank spacer aligned with the hour guide of the day body.
pub const HOUR_GUIDE_WIDTH: u16 = 6;

/// Rows used by the weekday and day labels of each column.
const LABEL_ROWS: u16 = 2;

/// Display-only header of a day range: one column per date with its labels,
/// today highlight and all-day events.
pub struct HeaderRow<'a> {
    columns: Vec<HeaderColumn<'a, &'a EventItem>>,
    event_rows: u16,
    theme: &'a Theme,
}

impl<'a> HeaderRow<'a> {
    /// `cell_height` is the minimum number of all-day rows; the band grows to
    /// fit the busiest column.
    pub fn new(columns: Vec<HeaderColumn<'a, &'a EventItem>>, cell_height: u16, theme: &'a Theme) -> Self {
        let busiest = columns.iter().map(|c| c.events.len()).max().unwrap_or(0);
        let event_rows = cell_height.max(u16::try_from(busiest).unwrap_or(u16::MAX));
        Self {
            columns,
            event_rows,
            theme,
        }
    }

    /// Total height including the bottom border.
    pub fn height(&self) -> u16 {
        LABEL_ROWS.saturating_add(self.event_rows).saturating_add(1)
    }

    fn render_column(&self, column: &HeaderColumn<'_, &EventItem>, area: Rect, buf: &mut Buffer) {
        let [weekday, day, events] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(self.event_rows),
        ])
        .areas(area);

        let weekday_style = match column.is_today {
            true => Style::new().fg(self.theme.primary),
            false => self.theme.guide(),
        };
        Line::styled(column.weekday_label.as_str(), weekday_style)
            .centered()
            .render(weekday, buf);

        let day_style = match column.is_today {
            true => self.theme.today(),
            false => self.theme.text(),
        };
        Line::from(Span::styled(format!(" {} ", column.day_label), day_style))
            .centered()
            .render(day, buf);

        let lines = (events.y..events.bottom()).map(|y| Rect::new(events.x, y, events.width, 1));
        for (event, line) in column.events.iter().zip(lines) {
            TitleRenderer.render(event, self.theme.event(), line, buf);
        }
    }
}

impl Widget for HeaderRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border());
        let inner = block.inner(area);
        block.render(area, buf);

        let (_, columns) = column_areas(inner, self.columns.len());
        for (column, rect) in self.columns.iter().zip(columns.iter()) {
            self.render_column(column, *rect, buf);
        }
    }
}

/// Splits `area` into the hour guide and `n` equal day columns.
pub fn column_areas(area: Rect, n: usize) -> (Rect, Rc<[Rect]>) {
    let [guide, body] =
        Layout::horizontal([Constraint::Length(HOUR_GUIDE_WIDTH), Constraint::Fill(1)]).areas(area);
    let columns = Layout::horizontal(vec![Constraint::Fill(1); n]).split(body);
    (guide, columns)
}
