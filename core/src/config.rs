// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::bucket::MAX_VISIBLE_EVENTS;
use crate::gesture::SWIPE_THRESHOLD;
use crate::grid::WeekStart;

/// The name of the application.
pub const APP_NAME: &str = "calview";

/// Layout settings shared by all views.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// First day of the week, `0` for Sunday.
    pub week_starts_on: WeekStart,

    /// If true, today is not highlighted and no refresh timer runs.
    pub hide_now_indicator: bool,

    /// Maximum number of events drawn in a month cell.
    pub max_visible_events: usize,

    /// Horizontal travel, in logical pixels, for a drag to count as a swipe.
    pub swipe_threshold: f32,

    /// Mirror the column order for right-to-left locales.
    pub is_rtl: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::SUNDAY,
            hide_now_indicator: false,
            max_visible_events: MAX_VISIBLE_EVENTS,
            swipe_threshold: SWIPE_THRESHOLD,
            is_rtl: false,
        }
    }
}
