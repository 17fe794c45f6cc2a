//! src/view/components/media_grid.rs
//!
//! Cards laid out left to right, top to bottom, in view-list order. The
//! rectangles drawn are recorded for mouse hit-testing.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::gallery_state::GalleryState;
use crate::model::ui_state::UIState;
use crate::view::theme::Palette;

pub const CARD_WIDTH: u16 = 26;
pub const CARD_HEIGHT: u16 = 5;

pub struct MediaGrid;

impl MediaGrid {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        gallery: &GalleryState,
        ui: &mut UIState,
        palette: &Palette,
        area: Rect,
    ) {
        ui.layout.cards.clear();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Gallery ")
            .title_style(palette.title())
            .border_style(palette.border())
            .style(palette.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if gallery.shows_empty_indicator() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No media found",
                palette.dim().add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let items = gallery.current();
        if items.is_empty() || inner.width == 0 || inner.height == 0 {
            return;
        }

        let columns = (inner.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
        ui.grid_columns = columns;
        ui.grid_focus = ui.grid_focus.min(items.len() - 1);
        ui.keep_focus_visible(visible_rows);

        let card_width = inner.width / columns as u16;
        let first = ui.grid_offset * columns;
        let last = (first + visible_rows * columns).min(items.len());

        for (index, item) in items.iter().enumerate().take(last).skip(first) {
            let slot = index - first;
            let col = (slot % columns) as u16;
            let row = (slot / columns) as u16;

            let rect = Rect::new(
                inner.x + col * card_width,
                inner.y + row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT.min(inner.bottom().saturating_sub(inner.y + row * CARD_HEIGHT)),
            );
            if rect.height == 0 {
                break;
            }

            let focused = index == ui.grid_focus;
            let kind_color = if item.is_video() {
                palette.orange
            } else {
                palette.cyan
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", item.kind.icon()), Style::default().fg(kind_color)),
                    Span::styled(item.thumbnail().describe(), palette.dim()),
                ]),
                Line::from(Span::styled(
                    item.name.as_str(),
                    Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(item.url.as_str(), palette.dim())),
            ];

            let card = Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    palette.accent_border()
                } else {
                    palette.border()
                })
                .style(if focused { palette.highlight() } else { palette.base() });

            frame.render_widget(
                Paragraph::new(lines).block(card).wrap(Wrap { trim: true }),
                rect,
            );
            ui.layout.cards.push((rect, index));
        }
    }
}

impl Default for MediaGrid {
    fn default() -> Self {
        Self::new()
    }
}
