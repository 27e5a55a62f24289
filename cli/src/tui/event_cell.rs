// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calview_core::{Event, EventItem};
use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Picks the style of a single event cell, overriding the theme.
pub type EventCellStyle = Box<dyn Fn(&EventItem) -> Style>;

/// Draws an event into a one-line area.
pub trait EventRenderer {
    fn render(&self, event: &EventItem, style: Style, area: Rect, buf: &mut Buffer);
}

/// Default renderer: the title, truncated with an ellipsis.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleRenderer;

impl EventRenderer for TitleRenderer {
    fn render(&self, event: &EventItem, style: Style, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        buf.set_style(area, style);
        let title = truncate(event.title(), area.width as usize);
        buf.set_stringn(area.x, area.y, title, area.width as usize, style);
    }
}

/// Shortens `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_owned();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
