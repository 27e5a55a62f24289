// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Date format used in titles, logs and event files.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// The start of the day (00:00:00).
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The exclusive end of the day, which is the start of the following day.
///
/// The last representable date has no following day, so it saturates to
/// [`NaiveDateTime::MAX`].
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    match date.succ_opt() {
        Some(next) => start_of_day(next),
        None => NaiveDateTime::MAX,
    }
}

/// Whether `dt` lies within the half-open interval `[start_of_day, end_of_day)`.
pub fn is_within_day(dt: &NaiveDateTime, date: NaiveDate) -> bool {
    start_of_day(date) <= *dt && *dt < end_of_day(date)
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31, // only reachable for December of the last representable year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_interval_is_half_open() {
        let day = date(2024, 1, 2);
        let midnight = day.and_hms_opt(0, 0, 0).unwrap();
        let last = day.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
        let next_midnight = date(2024, 1, 3).and_hms_opt(0, 0, 0).unwrap();

        assert!(is_within_day(&midnight, day));
        assert!(is_within_day(&last, day));
        assert!(!is_within_day(&next_midnight, day));
        assert_eq!(end_of_day(day), next_midnight);
    }

    #[test]
    fn end_of_last_day_saturates() {
        assert_eq!(end_of_day(NaiveDate::MAX), NaiveDateTime::MAX);
    }

    #[test]
    fn first_of_month_keeps_year_and_month() {
        assert_eq!(first_of_month(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(first_of_month(date(2024, 12, 1)), date(2024, 12, 1));
    }

    #[test]
    fn counts_days_in_month() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 4, 30)), 30);
        assert_eq!(days_in_month(date(2024, 12, 31)), 31);
    }
}
