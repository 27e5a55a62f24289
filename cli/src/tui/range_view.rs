// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calview_core::{
    Event, EventItem, NowIndicator, Scheduler, TimerId, events_during, layout_header,
    start_of_day,
};
use chrono::{NaiveDate, NaiveDateTime};
use ratatui::prelude::*;

use crate::config::Config;
use crate::tui::calendar_store::{CalendarStore, CalendarStoreLike};
use crate::tui::component::{Component, Message};
use crate::tui::header_row::{HeaderRow, column_areas};
use crate::tui::theme::Theme;

/// Day, three-day, week and custom views: a header row with the all-day
/// events, and the timed events of each day below it.
pub struct RangeView {
    theme: Theme,
    cell_height: u16,
    now: NowIndicator,
}

impl RangeView {
    pub fn new(config: &Config, now: NaiveDateTime) -> Self {
        Self {
            theme: config.theme.clone(),
            cell_height: config.header.cell_height,
            now: NowIndicator::new(now, config.layout.hide_now_indicator),
        }
    }

    #[cfg(test)]
    fn now(&self) -> &NowIndicator {
        &self.now
    }

    fn render_body(&self, calendar: &CalendarStore, dates: &[NaiveDate], area: Rect, buf: &mut Buffer) {
        let (guide, columns) = column_areas(area, dates.len());
        if !self.now.is_hidden() && !guide.is_empty() {
            let label = self.now.now().format("%H:%M").to_string();
            Line::styled(label, Style::new().fg(self.theme.primary)).render(guide, buf);
        }

        for (&date, rect) in dates.iter().zip(columns.iter()) {
            let lines = (rect.y..rect.bottom()).map(|y| Rect::new(rect.x, y, rect.width, 1));
            let timed = events_during(&calendar.events, date).filter(|e| !e.all_day());
            for (event, line) in timed.zip(lines) {
                self.render_event(event, date, line, buf);
            }
        }
    }

    fn render_event(&self, event: &EventItem, date: NaiveDate, area: Rect, buf: &mut Buffer) {
        // events carried over from the previous day start at midnight
        let start = event.start().max(start_of_day(date));
        Line::from(vec![
            Span::styled(start.format("%H:%M").to_string(), self.theme.guide()),
            Span::raw(" "),
            Span::styled(event.title().to_owned(), self.theme.event()),
        ])
        .render(area, buf);
    }
}

impl<S: CalendarStoreLike> Component<S> for RangeView {
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let calendar = store.calendar();
        let dates = calendar.date_range();
        let all_day = calendar.all_day_events();

        let header = HeaderRow::new(
            layout_header(&dates, &all_day, self.now.today()),
            self.cell_height,
            &self.theme,
        );
        let [top, body] =
            Layout::vertical([Constraint::Length(header.height()), Constraint::Fill(1)]).areas(area);
        header.render(top, buf);
        self.render_body(calendar, &dates, body, buf);
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

#[cfg(test)]
mod tests {
    use calview_core::{Mode, WeekStart};

    use super::*;
    use crate::tui::timers::Timers;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn store() -> Rc<RefCell<CalendarStore>> {
        let events = vec![
            EventItem::new_all_day("Holiday", date(2024, 1, 2)),
            EventItem::new("Standup", at("2024-01-02 09:00"), at("2024-01-02 09:15")),
            EventItem::new("Late", at("2024-01-02 23:00"), at("2024-01-03 01:00")),
        ];
        Rc::new(RefCell::new(CalendarStore::new(
            Mode::ThreeDays,
            date(2024, 1, 2),
            WeekStart::SUNDAY,
            events,
        )))
    }

    #[test]
    fn renders_header_and_timed_events() {
        let view = RangeView::new(&Config::default(), at("2024-01-02 08:30"));
        let store = store();
        let area = Rect::new(0, 0, 36, 8);
        let mut buf = Buffer::empty(area);
        view.render(&store, area, &mut buf);

        // header: labels on rows 0 and 1, one all-day row, border on row 3
        assert_eq!(&text(&buf, 0)[9..12], "Tue");
        assert!(text(&buf, 2).starts_with("      Holiday"));

        let first = text(&buf, 4);
        assert!(first.starts_with("08:30 09:00 Stan"), "{first:?}");
        assert_eq!(&first[16..26], "00:00 Late");
        assert!(text(&buf, 5)[6..].starts_with("23:00 Late"));
    }

    #[test]
    fn hidden_indicator_has_no_time_label_or_timer() {
        let mut config = Config::default();
        config.layout.hide_now_indicator = true;
        let mut view = RangeView::new(&config, at("2024-01-02 08:30"));

        let store = store();
        let area = Rect::new(0, 0, 36, 8);
        let mut buf = Buffer::empty(area);
        view.render(&store, area, &mut buf);
        assert!(text(&buf, 4).starts_with("      09:00"));

        let mut timers = Timers::new();
        Component::<CalendarStore>::mount(&mut view, &mut timers);
        assert!(timers.is_empty());
    }

    #[test]
    fn timer_refreshes_now() {
        let mut view = RangeView::new(&Config::default(), at("2024-01-02 08:30"));
        let mut timers = Timers::new();
        Component::<CalendarStore>::mount(&mut view, &mut timers);

        let id = timers.take_due(std::time::Instant::now() + calview_core::NOW_REFRESH_INTERVAL)[0];
        let message = Component::<CalendarStore>::on_timer(&mut view, id, at("2024-01-03 00:01"));
        assert_eq!(message, Some(Message::Handled));
        assert_eq!(view.now().today(), Some(date(2024, 1, 3)));

        Component::<CalendarStore>::unmount(&mut view, &mut timers);
        assert!(timers.is_empty());
    }
}
