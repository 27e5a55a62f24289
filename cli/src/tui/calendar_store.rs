// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calview_core::{
    Event, EventItem, HorizontalDirection, Mode, STABLE_FORMAT_DATEONLY, WeekStart, date_range,
    shift_target,
};
use chrono::NaiveDate;

use crate::tui::dispatcher::{Action, Dispatcher};

pub trait CalendarStoreLike {
    fn calendar(&self) -> &CalendarStore;
}

/// State shared by the calendar views: what is shown and what was picked.
#[derive(Debug)]
pub struct CalendarStore {
    pub mode: Mode,
    pub target: NaiveDate,
    pub week_start: WeekStart,
    pub events: Vec<EventItem>,

    /// The last day cell the user pressed
    pub selected: Option<NaiveDate>,

    /// One line of feedback shown under the view
    pub status: Option<String>,
}

impl CalendarStore {
    pub fn new(mode: Mode, target: NaiveDate, week_start: WeekStart, events: Vec<EventItem>) -> Self {
        Self {
            mode,
            target,
            week_start,
            events,
            selected: None,
            status: None,
        }
    }

    /// The visible dates for the current mode and target.
    pub fn date_range(&self) -> Vec<NaiveDate> {
        date_range(self.mode, self.target, self.week_start)
    }

    pub fn all_day_events(&self) -> Vec<&EventItem> {
        self.events.iter().filter(|e| e.all_day()).collect()
    }

    /// Title of the page, e.g. `January 2024` or `2024-01-01 ~ 2024-01-07`.
    pub fn title(&self) -> String {
        if self.mode == Mode::Month {
            return self.target.format("%B %Y").to_string();
        }

        let range = self.date_range();
        match (range.first(), range.last()) {
            (Some(first), Some(last)) if first == last => {
                first.format(STABLE_FORMAT_DATEONLY).to_string()
            }
            (Some(first), Some(last)) => format!(
                "{} ~ {}",
                first.format(STABLE_FORMAT_DATEONLY),
                last.format(STABLE_FORMAT_DATEONLY)
            ),
            _ => self.target.format(STABLE_FORMAT_DATEONLY).to_string(),
        }
    }

    fn shift(&mut self, direction: HorizontalDirection) {
        self.target = shift_target(self.mode, self.target, direction);
        tracing::debug!(date = %self.target, %direction, "page changed");
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::PressCell(date) => {
                let mut that = that.borrow_mut();
                that.selected = Some(*date);
                that.status = Some(format!("Selected {}", date.format(STABLE_FORMAT_DATEONLY)));
            }
            Action::PressEvent(event) => {
                let mut that = that.borrow_mut();
                that.status = Some(describe_event(event));
            }
            Action::SwipeHorizontal(direction) => {
                that.borrow_mut().shift(*direction);
            }
            Action::PreviousPage => {
                that.borrow_mut().shift(HorizontalDirection::Right);
            }
            Action::NextPage => {
                that.borrow_mut().shift(HorizontalDirection::Left);
            }
        }));
        dispatcher.register(callback);
    }
}

impl CalendarStoreLike for CalendarStore {
    fn calendar(&self) -> &CalendarStore {
        self
    }
}

fn describe_event(event: &impl Event) -> String {
    if event.all_day() {
        return format!("{} (all day)", event.title());
    }

    let (start, end) = (event.start(), event.end());
    let end_fmt = match start.date() == end.date() {
        true => "%H:%M",
        false => "%Y-%m-%d %H:%M",
    };
    format!(
        "{} ({} - {})",
        event.title(),
        start.format("%Y-%m-%d %H:%M"),
        end.format(end_fmt)
    )
}
