// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de;

use crate::datetime::{end_of_day, start_of_day};

/// Trait representing a calendar event as seen by the views.
///
/// Events are owned by the caller and never mutated by a view.
pub trait Event {
    /// The start date and time of the event.
    fn start(&self) -> NaiveDateTime;

    /// The end date and time of the event.
    fn end(&self) -> NaiveDateTime;

    /// The title shown in the event cell.
    fn title(&self) -> &str;

    /// Whether the event belongs to the all-day band rather than a timed cell.
    fn all_day(&self) -> bool {
        false
    }
}

impl<E: Event + ?Sized> Event for &E {
    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn all_day(&self) -> bool {
        (**self).all_day()
    }
}

/// A plain event, as loaded from an event file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct EventItem {
    /// The title of the event.
    pub title: String,

    /// Start of the event. Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`.
    #[serde(deserialize_with = "deserialize_loose")]
    pub start: NaiveDateTime,

    /// End of the event, same formats as `start`.
    #[serde(deserialize_with = "deserialize_loose")]
    pub end: NaiveDateTime,

    /// Whether it is an all-day event.
    #[serde(default)]
    pub all_day: bool,
}

impl EventItem {
    /// Creates a timed event.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            all_day: false,
        }
    }

    /// Creates an all-day event spanning the whole of `date`.
    pub fn new_all_day(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            start: start_of_day(date),
            end: end_of_day(date),
            all_day: true,
        }
    }
}

impl Event for EventItem {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn all_day(&self) -> bool {
        self.all_day
    }
}

const LOOSE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

fn parse_loose(value: &str) -> Option<NaiveDateTime> {
    LOOSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| value.parse::<NaiveDateTime>().ok())
        .or_else(|| value.parse::<NaiveDate>().ok().map(start_of_day))
}

fn deserialize_loose<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct LooseVisitor;

    impl de::Visitor<'_> for LooseVisitor {
        type Value = NaiveDateTime;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str(r#"a date like "2024-01-02" or a datetime like "2024-01-02T09:00""#)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_loose(value).ok_or_else(|| E::custom(format!("invalid date or datetime: {value}")))
        }
    }

    deserializer.deserialize_str(LooseVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn parses_loose_datetimes() {
        assert_eq!(parse_loose("2024-01-02T09:30"), Some(dt("2024-01-02T09:30")));
        assert_eq!(parse_loose("2024-01-02T09:30:00"), Some(dt("2024-01-02T09:30")));
        assert_eq!(parse_loose("2024-01-02 09:30"), Some(dt("2024-01-02T09:30")));
        assert_eq!(parse_loose("2024-01-02"), Some(dt("2024-01-02T00:00")));
        assert_eq!(parse_loose("tomorrow"), None);
    }

    #[test]
    fn deserializes_event_items() {
        #[derive(serde::Deserialize)]
        struct File {
            events: Vec<EventItem>,
        }

        let file: File = toml::from_str(
            r#"
[[events]]
title = "Standup"
start = "2024-01-02T09:00"
end = "2024-01-02T09:15"

[[events]]
title = "Holiday"
start = "2024-01-01"
end = "2024-01-02"
all_day = true
"#,
        )
        .unwrap();

        assert_eq!(file.events.len(), 2);
        assert_eq!(file.events[0].title(), "Standup");
        assert!(!file.events[0].all_day());
        assert_eq!(file.events[1].start(), dt("2024-01-01T00:00"));
        assert!(file.events[1].all_day());
    }

    #[test]
    fn rejects_malformed_datetimes() {
        let result: Result<EventItem, _> = toml::from_str(
            r#"
title = "Broken"
start = "someday"
end = "2024-01-02"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn all_day_event_spans_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let event = EventItem::new_all_day("Holiday", date);
        assert_eq!(event.start(), dt("2024-01-02T00:00"));
        assert_eq!(event.end(), dt("2024-01-03T00:00"));
        assert!(event.all_day());
    }
}
