// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calview_core::{
    DAYS_PER_WEEK, DayCell, EventItem, LayoutConfig, MonthLayout, MonthOptions, NowIndicator,
    PressTarget, Scheduler, SwipeState, SwipeTracker, TimerId, WEEKS_PER_MONTH, layout_month,
};
use chrono::NaiveDateTime;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::config::{Config, PointerConfig};
use crate::tui::calendar_store::{CalendarStore, CalendarStoreLike};
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_cell::{EventCellStyle, EventRenderer, TitleRenderer};
use crate::tui::theme::Theme;

/// Rows above the grid holding the weekday labels.
const LABEL_ROWS: u16 = 1;

/// The month grid: day numbers, up to a few events per day, an overflow
/// label, and swipe navigation between months.
pub struct MonthView {
    layout: LayoutConfig,
    pointer: PointerConfig,
    theme: Theme,
    renderer: Box<dyn EventRenderer>,
    event_cell_style: Option<EventCellStyle>,
    now: NowIndicator,
    swipe: SwipeTracker,
    pressed: Option<Position>,
}

impl MonthView {
    pub fn new(config: &Config, now: NaiveDateTime) -> Self {
        Self {
            layout: config.layout.clone(),
            pointer: config.pointer,
            theme: config.theme.clone(),
            renderer: Box::new(TitleRenderer),
            event_cell_style: None,
            now: NowIndicator::new(now, config.layout.hide_now_indicator),
            swipe: SwipeTracker::new(config.layout.swipe_threshold),
            pressed: None,
        }
    }

    /// Replaces the default title renderer for event cells.
    pub fn with_renderer(mut self, renderer: impl EventRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Styles each event cell individually instead of using the theme.
    pub fn with_event_cell_style(mut self, style: impl Fn(&EventItem) -> Style + 'static) -> Self {
        self.event_cell_style = Some(Box::new(style));
        self
    }

    #[cfg(test)]
    fn now(&self) -> &NowIndicator {
        &self.now
    }

    fn month_layout<'a>(&self, calendar: &'a CalendarStore, area: Rect) -> MonthLayout<'a, EventItem> {
        let options = MonthOptions {
            container_height: f32::from(area.height.saturating_sub(LABEL_ROWS)),
            week_start: calendar.week_start,
            max_visible: self.layout.max_visible_events,
            chrome_offset: 0.0,
        };
        layout_month(calendar.target, &calendar.events, self.now.today(), &options)
    }

    fn render_cell(&self, cell: &DayCell<'_, EventItem>, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::LEFT | Borders::TOP)
            .border_style(self.theme.border());
        let inner = block.inner(area);
        block.render(area, buf);

        if cell.day == 0 || inner.is_empty() {
            return;
        }

        let style = match (cell.is_today, cell.is_target) {
            (true, _) => self.theme.today(),
            (false, true) => self.theme.target(),
            (false, false) => self.theme.text(),
        };
        let day = Line::from(Span::styled(format!(" {} ", cell.day), style)).centered();
        let mut lines = (inner.y..inner.bottom()).map(|y| Rect::new(inner.x, y, inner.width, 1));
        if let Some(line) = lines.next() {
            day.render(line, buf);
        }

        let drawn = cell.bucket.drawn_in(lines.len());
        for (event, line) in cell.bucket.visible[..drawn].iter().zip(lines.by_ref()) {
            let style = match &self.event_cell_style {
                Some(f) => f(event),
                None => self.theme.event(),
            };
            self.renderer.render(event, style, line, buf);
        }

        if let (Some(label), Some(line)) = (cell.bucket.hidden_label(drawn), lines.next()) {
            Line::styled(label, self.theme.overflow()).render(line, buf);
        }
    }

    fn logical(&self, position: Position) -> (f32, f32) {
        (
            f32::from(position.x) * self.pointer.cell_width,
            f32::from(position.y) * self.pointer.cell_height,
        )
    }

    fn resolve_press<S: CalendarStoreLike>(
        &self,
        store: &Rc<RefCell<S>>,
        area: Rect,
        position: Position,
    ) -> Option<Action> {
        let store = store.borrow();
        let layout = self.month_layout(store.calendar(), area);
        let geometry = Geometry::new(area, &layout, self.layout.is_rtl);
        let (row, column, rect) = geometry.hit(position)?;

        // line 0 is the day number, the top border counts as part of it
        let mut line = position.y.saturating_sub(rect.y + 1) as usize;
        if let Some(cell) = layout.cell(row, column) {
            let drawn = cell.bucket.drawn_in(rect.height.saturating_sub(2) as usize);
            if line > drawn {
                line = 0; // the label and blank lines below belong to the cell
            }
        }
        let action = match layout.press(row, column, line) {
            PressTarget::Cell(date) => Action::PressCell(date),
            PressTarget::Event(event) => Action::PressEvent(event.clone()),
            PressTarget::None => return None,
        };
        tracing::debug!(row, column, line, "press resolved");
        Some(action)
    }
}

impl<S: CalendarStoreLike> Component<S> for MonthView {
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let layout = self.month_layout(store.calendar(), area);
        let geometry = Geometry::new(area, &layout, self.layout.is_rtl);

        for (column, label) in layout.grid().weekday_labels().into_iter().enumerate() {
            let rect = geometry.label(column);
            Line::styled(label, self.theme.guide())
                .centered()
                .render(rect, buf);
        }

        for cell in layout.cells() {
            if let Some(rect) = geometry.cell(cell.row, cell.column) {
                self.render_cell(cell, rect, buf);
            }
        }
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<S>>,
        area: Rect,
        mouse: MouseEvent,
    ) -> Option<Message> {
        let position = Position::new(mouse.column, mouse.row);
        let (x, y) = self.logical(position);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !area.contains(position) {
                    return None;
                }
                self.swipe.begin(x, y);
                self.pressed = Some(position);
                Some(Message::Handled)
            }

            MouseEventKind::Drag(MouseButton::Left) => {
                let direction = self.swipe.update(x, y)?;
                dispatcher.dispatch(&Action::SwipeHorizontal(direction));
                Some(Message::Handled)
            }

            MouseEventKind::Up(MouseButton::Left) => {
                let ended = self.swipe.end();
                let pressed = self.pressed.take()?;
                if !matches!(ended, SwipeState::Tracking { claimed: false, .. }) {
                    return Some(Message::Handled); // it was a drag, not a tap
                }

                let action = self.resolve_press(store, area, pressed)?;
                dispatcher.dispatch(&action);
                Some(Message::Handled)
            }

            _ => None,
        }
    }

    fn on_timer(&mut self, id: TimerId, now: NaiveDateTime) -> Option<Message> {
        self.now.on_timer(id, now).then_some(Message::Handled)
    }

    fn mount(&mut self, scheduler: &mut dyn Scheduler) {
        self.now.mount(scheduler);
    }

    fn unmount(&mut self, scheduler: &mut dyn Scheduler) {
        self.now.unmount(scheduler);
    }
}

/// Screen areas of the weekday labels and the week rows.
struct Geometry {
    labels: Rect,
    rows: Vec<Rect>,
    rtl: bool,
}

impl Geometry {
    fn new<E>(area: Rect, layout: &MonthLayout<'_, E>, rtl: bool) -> Self {
        let labels = Rect {
            height: area.height.min(LABEL_ROWS),
            ..area
        };

        let row_height = layout.row_height().floor() as u16;
        let mut rows = Vec::with_capacity(WEEKS_PER_MONTH);
        if row_height > 0 {
            for row in 0..WEEKS_PER_MONTH as u16 {
                let y = area.y + LABEL_ROWS + row.saturating_mul(row_height);
                if y >= area.bottom() {
                    break;
                }
                let height = row_height.min(area.bottom() - y);
                rows.push(Rect::new(area.x, y, area.width, height));
            }
        }

        Self { labels, rows, rtl }
    }

    fn slot(&self, row: Rect, column: usize) -> Rect {
        let columns: [Rect; DAYS_PER_WEEK] =
            Layout::horizontal([Constraint::Ratio(1, DAYS_PER_WEEK as u32); DAYS_PER_WEEK])
                .areas(row);
        let visual = match self.rtl {
            true => DAYS_PER_WEEK - 1 - column,
            false => column,
        };
        columns[visual]
    }

    fn label(&self, column: usize) -> Rect {
        self.slot(self.labels, column)
    }

    fn cell(&self, row: usize, column: usize) -> Option<Rect> {
        self.rows.get(row).map(|&rect| self.slot(rect, column))
    }

    fn hit(&self, position: Position) -> Option<(usize, usize, Rect)> {
        let (row, &rect) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, rect)| rect.contains(position))?;

        (0..DAYS_PER_WEEK)
            .map(|column| (row, column, self.slot(rect, column)))
            .find(|(_, _, cell)| cell.contains(position))
    }
}
