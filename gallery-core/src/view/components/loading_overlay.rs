//! src/view/components/loading_overlay.rs
//! ============================================================
//! Scan progress box shown over the grid until the gallery resolves.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge},
};

use crate::resolver::resolve::ResolveProgress;
use crate::view::theme::Palette;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingOverlay;

impl LoadingOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        progress: &ResolveProgress,
        spinner_frame: usize,
        palette: &Palette,
        rect: Rect,
    ) {
        frame.render_widget(Clear, rect);

        let spinner = SPINNER[spinner_frame % SPINNER.len()];
        let chrome = Block::default()
            .title(format!(" {spinner} Scanning "))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(palette.accent_border())
            .style(palette.base());

        let percent = if progress.total > 0 {
            (progress.completed * 100 / progress.total).min(100) as u16
        } else {
            0
        };

        let gauge = Gauge::default()
            .block(chrome)
            .gauge_style(Style::default().fg(palette.pink).bg(palette.current_line))
            .percent(percent)
            .label(format!(
                "{}/{} checked · {} found",
                progress.completed, progress.total, progress.found
            ));

        frame.render_widget(gauge, rect);
    }
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}
