// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calview_core::{Scheduler, TimerId};
use chrono::NaiveDateTime;
use ratatui::crossterm::event::{KeyCode, MouseEvent};
use ratatui::prelude::*;

use crate::tui::dispatcher::Dispatcher;

#[derive(Debug, PartialEq, Eq)]
pub enum Message {
    Handled,
    Exit,
}

pub trait Component<S> {
    /// Renders the component into the given area.
    fn render(&self, store: &Rc<RefCell<S>>, area: Rect, buf: &mut Buffer);

    /// Handles key events for the component.
    fn on_key(
        &mut self,
        _dispatcher: &mut Dispatcher,
        _store: &Rc<RefCell<S>>,
        _area: Rect,
        _key: KeyCode,
    ) -> Option<Message> {
        None // Default implementation does nothing
    }

    /// Handles mouse events, `area` being the same area passed to `render`.
    fn on_mouse(
        &mut self,
        _dispatcher: &mut Dispatcher,
        _store: &Rc<RefCell<S>>,
        _area: Rect,
        _mouse: MouseEvent,
    ) -> Option<Message> {
        None
    }

    /// Called when a timer registered by this component fires.
    fn on_timer(&mut self, _id: TimerId, _now: NaiveDateTime) -> Option<Message> {
        None
    }

    /// Mounts the component, allowing it to register timers.
    fn mount(&mut self, _scheduler: &mut dyn Scheduler) {}

    /// Unmounts the component, it must release everything taken in `mount`.
    fn unmount(&mut self, _scheduler: &mut dyn Scheduler) {}
}
