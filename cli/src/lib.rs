// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_view;
mod config;
mod events;
mod parser;
mod tui;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_view::{CmdMonth, CmdRange, ViewArgs};
pub use crate::config::{Config, HeaderConfig, PointerConfig, parse_config};
pub use crate::events::load_events;
pub use crate::tui::{
    CalendarStore, EventCellStyle, EventRenderer, MonthView, Theme, TitleRenderer,
    run_month_view, run_month_view_with, run_range_view,
};
