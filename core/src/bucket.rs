// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::datetime::{is_within_day, start_of_day};
use crate::event::Event;

/// Default number of events shown in a single month cell.
pub const MAX_VISIBLE_EVENTS: usize = 3;

/// Events of a single cell, split into the ones that are drawn and a count of
/// the ones hidden behind the overflow label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a, E> {
    pub visible: Vec<&'a E>,
    pub overflow: usize,
}

impl<E> Default for Bucket<'_, E> {
    fn default() -> Self {
        Self {
            visible: Vec::new(),
            overflow: 0,
        }
    }
}

impl<E> Bucket<'_, E> {
    /// Total number of events in the bucket, drawn or not.
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The "N More" label, only present when something was hidden.
    pub fn overflow_label(&self) -> Option<String> {
        self.hidden_label(self.visible.len())
    }

    /// How many visible events fit in `lines` lines. When something has to be
    /// hidden the last line is left for the label.
    pub fn drawn_in(&self, lines: usize) -> usize {
        let fits = self.visible.len().min(lines);
        match fits == lines && fits < self.total() {
            true => lines.saturating_sub(1),
            false => fits,
        }
    }

    /// The label counting every event not among the first `drawn`.
    pub fn hidden_label(&self, drawn: usize) -> Option<String> {
        let hidden = self.total().saturating_sub(drawn);
        (hidden > 0).then(|| format!("{hidden} More"))
    }
}

/// Keeps the first `max_visible` events in order and counts the rest.
pub fn bucket_events<'a, E, I>(events: I, max_visible: usize) -> Bucket<'a, E>
where
    I: IntoIterator<Item = &'a E>,
    E: 'a,
{
    let mut bucket = Bucket::default();
    for event in events {
        if bucket.visible.len() < max_visible {
            bucket.visible.push(event);
        } else {
            bucket.overflow += 1;
        }
    }
    bucket
}

/// Events whose start falls within `[start_of_day, end_of_day)` of `date`.
pub fn events_on<E: Event>(events: &[E], date: NaiveDate) -> impl Iterator<Item = &E> {
    events
        .iter()
        .filter(move |event| is_within_day(&event.start(), date))
}

/// Events that start within `date` or are still running at its midnight.
pub fn events_during<E: Event>(events: &[E], date: NaiveDate) -> impl Iterator<Item = &E> {
    let midnight = start_of_day(date);
    events.iter().filter(move |event| {
        is_within_day(&event.start(), date) || (event.start() < midnight && event.end() > midnight)
    })
}

/// Events whose start date is exactly `date`.
pub fn all_day_on<E: Event>(events: &[E], date: NaiveDate) -> impl Iterator<Item = &E> {
    events
        .iter()
        .filter(move |event| event.start().date() == date)
}
