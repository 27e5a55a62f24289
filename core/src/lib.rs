// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Layout logic for calendar views: month grids, header rows, event
//! bucketing, swipe detection and the "now" indicator.
//!
//! Nothing in this crate draws anything. A host, such as the terminal front
//! end in `calview-cli`, feeds it dates, events and pointer positions and
//! paints whatever the layout describes.

mod bucket;
mod config;
mod datetime;
mod event;
mod gesture;
mod grid;
mod header;
mod month;
mod now;
mod range;

pub use crate::bucket::{
    Bucket, MAX_VISIBLE_EVENTS, all_day_on, bucket_events, events_during, events_on,
};
pub use crate::config::{APP_NAME, LayoutConfig};
pub use crate::datetime::{
    STABLE_FORMAT_DATEONLY, days_in_month, end_of_day, first_of_month, is_within_day,
    start_of_day,
};
pub use crate::event::{Event, EventItem};
pub use crate::gesture::{
    CLAIM_THRESHOLD, HorizontalDirection, SWIPE_THRESHOLD, SwipeState, SwipeTracker,
};
pub use crate::grid::{DAYS_PER_WEEK, DateCell, MonthGrid, WEEKS_PER_MONTH, WeekStart, month_grid};
pub use crate::header::{HeaderColumn, layout_header};
pub use crate::month::{
    DEFAULT_CHROME_OFFSET, DayCell, MonthLayout, MonthOptions, PressTarget, layout_month,
};
pub use crate::now::{
    Clock, LocalClock, NOW_REFRESH_INTERVAL, NowIndicator, Scheduler, TimerId,
};
pub use crate::range::{Mode, date_range, shift_target, start_of_week};
