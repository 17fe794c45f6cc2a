//! Key reference, one section per input consumer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::view::theme::Palette;
use crate::view::ui::centered_rect;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Grid",
        &[
            ("←/→/↑/↓  h/j/k/l", "move focus"),
            ("Home / End", "first / last card"),
            ("Enter / Space / click", "open in lightbox"),
            ("/", "focus the filter"),
            ("?", "toggle this help"),
            ("q / Ctrl+C", "quit"),
        ],
    ),
    (
        "Filter",
        &[
            ("type", "filter by name or path"),
            ("Backspace / Ctrl+U", "delete / clear"),
            ("Esc / Enter / ↓", "back to the grid"),
        ],
    ),
    (
        "Lightbox",
        &[
            ("← / →", "previous / next (wraps)"),
            ("↑ / ↓", "scroll, Shift for double"),
            ("f / click image", "toggle fit"),
            ("o", "open original"),
            ("Esc / [x] / click outside", "close"),
        ],
    ),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, palette: &Palette, area: Rect) {
        let overlay_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, overlay_area);

        let mut lines = Vec::new();
        for (title, keys) in SECTIONS {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default().fg(palette.yellow).add_modifier(Modifier::BOLD),
            )));
            for (key, what) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<26}"), Style::default().fg(palette.cyan)),
                    Span::raw(*what),
                ]));
            }
            lines.push(Line::from(""));
        }

        let help = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .border_style(palette.accent_border())
                    .style(palette.base()),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, overlay_area);
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}
