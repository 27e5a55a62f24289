// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use ratatui::style::{Color, Modifier, Style};

/// Colours used by the calendar views, injected into every component.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Accent colour: the reference date, today's header and the today badge.
    pub primary: Color,
    pub text: Color,
    /// Weekday labels and other guide text.
    pub guide: Color,
    pub border: Color,
    /// Text drawn on top of `primary`.
    pub on_primary: Color,
    pub event_bg: Color,
    pub event_fg: Color,
    pub overflow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x42, 0x85, 0xf4),
            text: Color::Gray,
            guide: Color::DarkGray,
            border: Color::DarkGray,
            on_primary: Color::White,
            event_bg: Color::Blue,
            event_fg: Color::White,
            overflow: Color::Gray,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::new().fg(self.text)
    }

    pub fn guide(&self) -> Style {
        Style::new().fg(self.guide)
    }

    pub fn border(&self) -> Style {
        Style::new().fg(self.border)
    }

    pub fn target(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn today(&self) -> Style {
        Style::new().fg(self.on_primary).bg(self.primary)
    }

    pub fn event(&self) -> Style {
        Style::new().fg(self.event_fg).bg(self.event_bg)
    }

    pub fn overflow(&self) -> Style {
        Style::new().fg(self.overflow).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_theme() {
        let theme: Theme = toml::from_str(
            r##"
primary = "magenta"
event_bg = "#102030"
"##,
        )
        .unwrap();

        assert_eq!(theme.primary, Color::Magenta);
        assert_eq!(theme.event_bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.text, Theme::default().text);
    }
}
