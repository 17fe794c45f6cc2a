//! src/view/components/lightbox_overlay.rs
//! ============================================================
//! The lightbox panel: title with a close control, the mounted media
//! element, and a footer with key hints and the "open original" link.
//!
//! Fit mode scales the content to the panel. Full size draws it at a fixed
//! native height and scrolls. The drawn regions are recorded so clicks on
//! the close control, the image and the backdrop can be resolved.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::lightbox::Lightbox;
use crate::model::ui_state::LayoutMap;
use crate::view::theme::Palette;
use crate::view::ui::centered_rect;

/// Rows an image occupies at native size.
pub const NATIVE_ROWS: u16 = 48;
pub const CLOSE_LABEL: &str = "[x]";

pub struct LightboxOverlay;

impl LightboxOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        lightbox: &mut Lightbox,
        layout: &mut LayoutMap,
        palette: &Palette,
        area: Rect,
    ) {
        layout.clear_lightbox();
        if !lightbox.is_open() {
            return;
        }

        let panel = if lightbox.is_fit() {
            // Backdrop
            frame.render_widget(
                Block::default().style(Style::default().bg(palette.current_line)),
                area,
            );
            centered_rect(80, 80, area)
        } else {
            area
        };
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(format!(" {} ", lightbox.title())).style(palette.title()))
            .title(
                Line::from(CLOSE_LABEL)
                    .right_aligned()
                    .style(Style::default().fg(palette.red).add_modifier(Modifier::BOLD)),
            )
            .border_style(palette.accent_border())
            .style(palette.base());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        layout.panel = Some(panel);
        let close_width = CLOSE_LABEL.len() as u16;
        if panel.width > close_width + 2 {
            layout.close_button = Some(Rect::new(
                panel.right() - 1 - close_width,
                panel.y,
                close_width,
                1,
            ));
        }

        if inner.height < 2 || inner.width == 0 {
            return;
        }
        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        if lightbox.image.visible {
            self.render_image(frame, lightbox, palette, body);
            layout.image_content = Some(body);
        } else {
            self.render_video(frame, lightbox, palette, body);
        }

        let hints = Line::from(vec![
            Span::styled(
                lightbox.link().to_string(),
                Style::default().fg(palette.cyan).add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("  o open · f fit · ←/→ · ↑/↓ · Esc close", palette.dim()),
        ]);
        frame.render_widget(Paragraph::new(hints), footer);
    }

    fn render_image(&self, frame: &mut Frame<'_>, lightbox: &mut Lightbox, palette: &Palette, body: Rect) {
        let rows = if lightbox.is_fit() {
            body.height
        } else {
            NATIVE_ROWS.max(body.height)
        };
        lightbox.set_scroll_limit(rows - body.height);

        let fill = if lightbox.is_fit() { "▒" } else { "░" };
        let width = body.width as usize;
        let middle = rows / 2;
        let lines: Vec<Line> = (0..rows)
            .map(|row| {
                if row == middle {
                    Line::from(Span::styled(
                        lightbox.image.alt.clone(),
                        Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                    ))
                    .centered()
                } else {
                    Line::from(Span::styled(fill.repeat(width), Style::default().fg(palette.comment)))
                }
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).scroll((lightbox.scroll(), 0)),
            body,
        );
    }

    fn render_video(&self, frame: &mut Frame<'_>, lightbox: &mut Lightbox, palette: &Palette, body: Rect) {
        lightbox.set_scroll_limit(0);

        let video = &lightbox.video;
        let (state, color) = if video.playing {
            ("▶ playing", palette.green)
        } else {
            ("■ paused", palette.yellow)
        };
        let secs = video.position.as_secs();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                format!("{}:{:02}", secs / 60, secs % 60),
                palette.dim(),
            )),
            Line::from(Span::styled(
                video.src.clone().unwrap_or_default(),
                Style::default().fg(palette.foreground),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}

impl Default for LightboxOverlay {
    fn default() -> Self {
        Self::new()
    }
}
