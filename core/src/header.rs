// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::bucket::all_day_on;
use crate::event::Event;

/// One column of a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderColumn<'a, E> {
    pub date: NaiveDate,
    /// Weekday abbreviation, e.g. `Mon`.
    pub weekday_label: String,
    /// Day of month without padding, e.g. `1`.
    pub day_label: String,
    pub is_today: bool,
    pub events: Vec<&'a E>,
}

/// Lays out one column per date with the all-day events starting on it.
///
/// Every matching event is kept; there is no overflow handling in the header.
pub fn layout_header<'a, E: Event>(
    dates: &[NaiveDate],
    all_day_events: &'a [E],
    today: Option<NaiveDate>,
) -> Vec<HeaderColumn<'a, E>> {
    dates
        .iter()
        .map(|&date| HeaderColumn {
            date,
            weekday_label: date.format("%a").to_string(),
            day_label: date.format("%-d").to_string(),
            is_today: today == Some(date),
            events: all_day_on(all_day_events, date).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn events_land_in_matching_column() {
        let dates = [date(2024, 1, 1), date(2024, 1, 2)];
        let events = [EventItem::new_all_day("Offsite", date(2024, 1, 2))];

        let columns = layout_header(&dates, &events, None);
        assert_eq!(columns.len(), 2);
        assert!(columns[0].events.is_empty());
        assert_eq!(columns[1].events, vec![&events[0]]);
    }

    #[test]
    fn labels_and_today() {
        let dates = [date(2024, 1, 1), date(2024, 1, 2)];
        let events: [EventItem; 0] = [];

        let columns = layout_header(&dates, &events, Some(date(2024, 1, 2)));
        assert_eq!(columns[0].weekday_label, "Mon");
        assert_eq!(columns[0].day_label, "1");
        assert!(!columns[0].is_today);
        assert!(columns[1].is_today);
    }

    #[test]
    fn keeps_every_matching_event() {
        let day = date(2024, 1, 1);
        let events: Vec<_> = (0..6)
            .map(|i| EventItem::new_all_day(format!("event {i}"), day))
            .collect();

        let columns = layout_header(&[day], &events, None);
        assert_eq!(columns[0].events.len(), 6);
    }

    #[test]
    fn empty_range_is_empty_row() {
        let events = [EventItem::new_all_day("Offsite", date(2024, 1, 2))];
        assert!(layout_header(&[], &events, None).is_empty());
    }
}
