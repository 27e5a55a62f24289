// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use calview_core::{Scheduler, TimerId};

/// Interval timers driven by the terminal event loop.
///
/// The loop asks for [`Timers::poll_timeout`] before blocking on input and
/// calls [`Timers::take_due`] afterwards.
#[derive(Debug)]
pub struct Timers {
    next_id: u64,
    intervals: BTreeMap<TimerId, Interval>,
    clock: fn() -> Instant,
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    deadline: Instant,
}

impl Timers {
    pub fn new() -> Self {
        Self::with_clock(Instant::now)
    }

    /// Uses `clock` as the time source when registering timers.
    pub fn with_clock(clock: fn() -> Instant) -> Self {
        Self {
            next_id: 0,
            intervals: BTreeMap::new(),
            clock,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.intervals.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// How long to wait for input before a timer becomes due, capped at `max`.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.intervals
            .values()
            .map(|a| a.deadline.saturating_duration_since(now))
            .min()
            .map_or(max, |wait| wait.min(max))
    }

    /// Returns the timers due at `now` and schedules their next run.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due = Vec::new();
        for (id, interval) in &mut self.intervals {
            if interval.deadline <= now {
                due.push(*id);
                interval.deadline = now + interval.period;
            }
        }
        due
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Timers {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let deadline = (self.clock)() + period;
        self.intervals.insert(id, Interval { period, deadline });
        tracing::trace!(timer = id.get(), ?period, "interval registered");
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        if self.intervals.remove(&id).is_some() {
            tracing::trace!(timer = id.get(), "interval cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;

    static EPOCH: OnceLock<Instant> = OnceLock::new();

    fn epoch() -> Instant {
        *EPOCH.get_or_init(Instant::now)
    }

    #[test]
    fn fires_after_period_and_reschedules() {
        let mut timers = Timers::with_clock(epoch);
        let id = timers.set_interval(Duration::from_secs(120));

        assert!(timers.take_due(epoch() + Duration::from_secs(119)).is_empty());
        assert_eq!(timers.take_due(epoch() + Duration::from_secs(120)), vec![id]);
        assert!(timers.take_due(epoch() + Duration::from_secs(121)).is_empty());
        assert_eq!(timers.take_due(epoch() + Duration::from_secs(240)), vec![id]);
    }

    #[test]
    fn poll_timeout_waits_for_the_earliest_deadline() {
        let mut timers = Timers::with_clock(epoch);
        let max = Duration::from_secs(1);
        assert_eq!(timers.poll_timeout(epoch(), max), max);

        timers.set_interval(Duration::from_millis(300));
        timers.set_interval(Duration::from_secs(120));
        assert_eq!(
            timers.poll_timeout(epoch(), max),
            Duration::from_millis(300)
        );
        assert_eq!(
            timers.poll_timeout(epoch() + Duration::from_secs(5), max),
            Duration::ZERO
        );
    }

    #[test]
    fn cleared_timers_never_fire() {
        let mut timers = Timers::with_clock(epoch);
        let id = timers.set_interval(Duration::from_secs(1));
        timers.clear_interval(id);
        timers.clear_interval(id);
        assert!(timers.is_empty());
        assert!(timers.take_due(epoch() + Duration::from_secs(10)).is_empty());
    }
}
