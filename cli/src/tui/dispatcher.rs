// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use calview_core::{EventItem, HorizontalDirection};
use chrono::NaiveDate;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &Action) {
        tracing::debug!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A non-empty day cell was pressed.
    PressCell(NaiveDate),
    /// A rendered event was pressed.
    PressEvent(EventItem),
    /// A horizontal swipe was recognized on the grid.
    SwipeHorizontal(HorizontalDirection),
    PreviousPage,
    NextPage,
}
