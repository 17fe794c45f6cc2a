//! src/view/components/status_bar.rs
//!
//! One line: what is shown on the left, the latest notification or key
//! hints on the right.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::model::app_state::AppState;
use crate::view::theme::Palette;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, app: &AppState, palette: &Palette, area: Rect) {
        let mut left = format!(" {} ", app.gallery.count_label());
        if !app.gallery.query().trim().is_empty() {
            left.push_str(&format!("| filter \"{}\" ", app.gallery.query().trim()));
        }
        if let Some(cursor) = app.lightbox.cursor() {
            left.push_str(&format!(
                "| {}/{} {} ",
                cursor + 1,
                app.gallery.current().len(),
                if app.lightbox.is_fit() { "fit" } else { "full size" }
            ));
        }

        let (right, right_style) = match &app.ui.notification {
            Some(n) => (n.message.clone(), palette.notification(n.level)),
            None => ("? help  / filter  q quit ".to_string(), palette.dim()),
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left)
            .style(palette.base())
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right)
            .style(right_style.bg(palette.background))
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
