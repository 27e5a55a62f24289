// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calview_core::{Scheduler, TimerId};
use chrono::NaiveDateTime;
use ratatui::crossterm::event::{KeyCode, MouseEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::calendar_store::CalendarStoreLike;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

/// A bordered page around a calendar view, with the range title on top, a
/// status line and the key instructions at the bottom.
pub struct CalendarPage<S, C: Component<S>> {
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: CalendarStoreLike, C: Component<S>> CalendarPage<S, C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    fn block(&self) -> Block<'_> {
        Block::bordered().border_set(border::ROUNDED)
    }

    /// Splits the inner area into the content and the status line.
    fn areas(&self, area: Rect) -> (Rect, Rect) {
        let inner_area = self.block().inner(area);
        let [content, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner_area);
        (content, status)
    }
}

impl<S: CalendarStoreLike, C: Component<S>> Component<S> for CalendarPage<S, C> {
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer) {
        let (title, status) = {
            let store = store.borrow();
            let calendar = store.calendar();
            (calendar.title(), calendar.status.clone().unwrap_or_default())
        };

        let title = Line::from(format!(" {title} ").bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(instructions().centered())
            .white();
        block.render(area, buf);

        let (content, status_area) = self.areas(area);
        self.inner.render(store, content, buf);
        Line::from(status).italic().render(status_area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<S>>,
        area: Rect,
        key: KeyCode,
    ) -> Option<Message> {
        let (content, _) = self.areas(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, content, key) {
            return Some(msg);
        }

        match key {
            KeyCode::Esc | KeyCode::Char('q') => Some(Message::Exit),
            KeyCode::Left | KeyCode::Char('h') => {
                dispatcher.dispatch(&Action::PreviousPage);
                Some(Message::Handled)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                dispatcher.dispatch(&Action::NextPage);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &Rc<RefCell<S>>,
        area: Rect,
        mouse: MouseEvent,
    ) -> Option<Message> {
        let (content, _) = self.areas(area);
        self.inner.on_mouse(dispatcher, store, content, mouse)
    }

    fn on_timer(&mut self, id: TimerId, now: NaiveDateTime) -> Option<Message> {
        self.inner.on_timer(id, now)
    }

    fn mount(&mut self, scheduler: &mut dyn Scheduler) {
        tracing::debug!("mounting calendar page");
        self.inner.mount(scheduler);
    }

    fn unmount(&mut self, scheduler: &mut dyn Scheduler) {
        tracing::debug!("unmounting calendar page");
        self.inner.unmount(scheduler);
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " Prev ".into(),
        "<Left>".blue().bold(),
        " Next ".into(),
        "<Right>".blue().bold(),
        " Swipe ".into(),
        "<Drag>".blue().bold(),
        " Exit ".into(),
        "<Esc> ".blue().bold(),
    ])
}
