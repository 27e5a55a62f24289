// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_store;
mod component;
mod component_page;
mod dispatcher;
mod event_cell;
mod header_row;
mod month_view;
mod range_view;
mod theme;
mod timers;

pub use app::{run_month_view, run_month_view_with, run_range_view};
pub use calendar_store::CalendarStore;
pub use event_cell::{EventCellStyle, EventRenderer, TitleRenderer};
pub use month_view::MonthView;
pub use theme::Theme;
