// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// How often the "now" indicator refreshes its timestamp.
pub const NOW_REFRESH_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Handle of an interval registered with a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Periodic timers provided by the host event loop.
pub trait Scheduler {
    /// Registers a timer firing every `period`.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Removes a timer, unknown ids are ignored.
    fn clear_interval(&mut self, id: TimerId);
}

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The locally held "current time" of a view.
///
/// When hidden, no timer is ever registered and [`NowIndicator::today`]
/// returns `None`.
#[derive(Debug)]
pub struct NowIndicator {
    now: NaiveDateTime,
    hidden: bool,
    timer: Option<TimerId>,
}

impl NowIndicator {
    pub fn new(now: NaiveDateTime, hidden: bool) -> Self {
        Self {
            now,
            hidden,
            timer: None,
        }
    }

    /// Registers the refresh timer, a no-op when hidden or already mounted.
    pub fn mount(&mut self, scheduler: &mut dyn Scheduler) {
        if self.hidden || self.timer.is_some() {
            return;
        }

        let id = scheduler.set_interval(NOW_REFRESH_INTERVAL);
        tracing::debug!(timer = id.get(), "now indicator mounted");
        self.timer = Some(id);
    }

    /// Clears the refresh timer if one was registered.
    pub fn unmount(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(id) = self.timer.take() {
            tracing::debug!(timer = id.get(), "now indicator unmounted");
            scheduler.clear_interval(id);
        }
    }

    /// Updates the timestamp if `id` is this indicator's timer.
    pub fn on_timer(&mut self, id: TimerId, now: NaiveDateTime) -> bool {
        if self.timer != Some(id) {
            return false;
        }

        tracing::trace!(%now, "now indicator refreshed");
        self.now = now;
        true
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Today's date, or `None` when the indicator is hidden.
    pub fn today(&self) -> Option<NaiveDate> {
        (!self.hidden).then(|| self.now.date())
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }
}
