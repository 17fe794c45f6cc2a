//! Filter field with the live item count in its title.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::gallery_state::GalleryState;
use crate::view::theme::Palette;

pub struct FilterBar;

impl FilterBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        gallery: &GalleryState,
        focused: bool,
        palette: &Palette,
        area: Rect,
    ) {
        let mut input = gallery.query().to_string();
        if focused {
            input.push('│');
        }

        let text = if input.is_empty() {
            Line::from(Span::styled("press / to filter by name or path", palette.dim()))
        } else {
            Line::from(Span::styled(input, Style::default().fg(palette.foreground)))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Filter ")
            .title(
                Line::from(format!(" {} ", gallery.count_label()))
                    .right_aligned()
                    .style(Style::default().fg(palette.yellow)),
            )
            .border_style(if focused {
                Style::default().fg(palette.cyan)
            } else {
                palette.border()
            })
            .style(palette.base());

        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}
