//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Palettes
//!
//! Mocha for the default and dark themes, Latte for light. Colors are from
//! the official Catppuccin specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};
use tracing::debug;

use crate::config::Theme;
use crate::model::ui_state::NotificationLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub current_line: Color,
    pub foreground: Color,
    pub comment: Color,
    pub cyan: Color,
    pub green: Color,
    pub orange: Color,
    pub pink: Color,
    pub purple: Color,
    pub red: Color,
    pub yellow: Color,
}

pub const MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),     // Base
    current_line: Color::Rgb(69, 71, 90),   // Surface1
    foreground: Color::Rgb(205, 214, 244),  // Text
    comment: Color::Rgb(127, 132, 156),     // Overlay1
    cyan: Color::Rgb(137, 220, 235),        // Sky
    green: Color::Rgb(166, 227, 161),       // Green
    orange: Color::Rgb(250, 179, 135),      // Peach
    pink: Color::Rgb(245, 194, 231),        // Pink
    purple: Color::Rgb(203, 166, 247),      // Mauve
    red: Color::Rgb(243, 139, 168),         // Red
    yellow: Color::Rgb(249, 226, 175),      // Yellow
};

pub const LATTE: Palette = Palette {
    background: Color::Rgb(239, 241, 245),  // Base
    current_line: Color::Rgb(188, 192, 204), // Surface1
    foreground: Color::Rgb(76, 79, 105),    // Text
    comment: Color::Rgb(140, 143, 161),     // Overlay1
    cyan: Color::Rgb(4, 165, 229),          // Sky
    green: Color::Rgb(64, 160, 43),         // Green
    orange: Color::Rgb(254, 100, 11),       // Peach
    pink: Color::Rgb(234, 118, 203),        // Pink
    purple: Color::Rgb(136, 57, 239),       // Mauve
    red: Color::Rgb(210, 15, 57),           // Red
    yellow: Color::Rgb(223, 142, 29),       // Yellow
};

impl Palette {
    pub fn for_theme(theme: &Theme) -> Self {
        let palette = match theme {
            Theme::Light => LATTE,
            Theme::Default | Theme::Dark => MOCHA,
        };
        debug!(?theme, background = ?palette.background, "theme selected");
        palette
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn accent_border(&self) -> Style {
        Style::default().fg(self.purple)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.purple).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.current_line)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn notification(&self, level: NotificationLevel) -> Style {
        let fg = match level {
            NotificationLevel::Info => self.green,
            NotificationLevel::Warning => self.yellow,
            NotificationLevel::Error => self.red,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        MOCHA
    }
}
