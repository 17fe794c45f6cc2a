//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the filter bar, the grid and the status bar, then
//! whichever overlays are up: scan progress, the lightbox, help.
//!
//! Rendering takes `&mut AppState` because it records what it drew (card
//! rectangles, lightbox regions, grid columns, scroll limit) for the input
//! side to resolve clicks and moves against.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::{debug, trace};

use crate::model::app_state::AppState;
use crate::model::ui_state::UIOverlay;
use crate::view::components::{
    filter_bar::FilterBar, help_overlay::HelpOverlay, lightbox_overlay::LightboxOverlay,
    loading_overlay::LoadingOverlay, media_grid::MediaGrid, status_bar::StatusBar,
};
use crate::view::theme::Palette;

#[derive(Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

pub struct UIRenderer {
    palette: Palette,
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            stats: RenderStats::default(),
        }
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    pub fn render(&mut self, f: &mut Frame<'_>, app: &mut AppState) {
        let start = Instant::now();
        let palette = self.palette;
        let screen = f.area();

        let [filter_area, grid_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(screen);

        let filter_focused = app.ui.filter_focused();
        FilterBar::new().render(f, &app.gallery, filter_focused, &palette, filter_area);
        app.ui.layout.filter = Some(filter_area);

        MediaGrid::new().render(f, &app.gallery, &mut app.ui, &palette, grid_area);
        StatusBar::new().render(f, app, &palette, status_area);

        if let Some(progress) = app.gallery.scanning {
            let rect = centered_rect(60, 20, grid_area);
            LoadingOverlay::new().render(f, &progress, app.ui.spinner_frame, &palette, rect);
        }

        LightboxOverlay::new().render(
            f,
            &mut app.lightbox,
            &mut app.ui.layout,
            &palette,
            Rect::new(screen.x, screen.y, screen.width, screen.height.saturating_sub(1)),
        );

        if app.ui.overlay == UIOverlay::Help {
            HelpOverlay::new().render(f, &palette, screen);
        }

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.total += elapsed;
        if elapsed.as_millis() > 16 {
            self.stats.slow += 1;
            debug!("Slow frame: {:?}", elapsed);
        }
        trace!(frame = self.stats.frames, "rendered");
    }
}

/// `percent_x` × `percent_y` of `r`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::ui_state::HitTarget;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn draw(app: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut renderer = UIRenderer::new(Palette::default());
        terminal.draw(|f| renderer.render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn resolved(urls: &[&str]) -> AppState {
        let mut app = AppState::new(Arc::new(Config::default()));
        app.set_resolved(urls.iter().map(|u| u.to_string()).collect());
        app
    }

    #[test]
    fn grid_shows_count_and_records_cards() {
        let mut app = resolved(&["images/100 (1).png", "images/100 (2).mp4", "images/100 (3).gif"]);
        let screen = draw(&mut app);

        assert!(screen.contains("3 items"));
        assert!(screen.contains("100 (2).mp4"));
        assert_eq!(app.ui.layout.cards.len(), 3);
        assert_eq!(app.ui.grid_columns, 3);

        let (rect, index) = app.ui.layout.cards[1];
        assert_eq!(app.ui.layout.hit(rect.x + 1, rect.y + 1), HitTarget::Card(index));
    }

    #[test]
    fn empty_gallery_shows_the_indicator() {
        let mut app = resolved(&[]);
        let screen = draw(&mut app);
        assert!(screen.contains("No media found"));
        assert!(screen.contains("0 items"));
    }

    #[test]
    fn scanning_shows_progress() {
        let mut app = AppState::new(Arc::new(Config::default()));
        app.gallery.scanning = Some(crate::resolver::resolve::ResolveProgress {
            completed: 4,
            total: 44,
            found: 1,
        });
        let screen = draw(&mut app);
        assert!(screen.contains("Scanning… 4/44"));
        assert!(!screen.contains("No media found"));
    }

    #[test]
    fn lightbox_records_its_regions() {
        let mut app = resolved(&["images/100 (1).png", "images/100 (2).mp4"]);
        app.activate(0);
        let screen = draw(&mut app);

        assert!(screen.contains("[x]"));
        assert!(screen.contains("images/100 (1).png"));

        let close = app.ui.layout.close_button.unwrap();
        assert_eq!(app.ui.layout.hit(close.x, close.y), HitTarget::CloseButton);
        let image = app.ui.layout.image_content.unwrap();
        assert_eq!(app.ui.layout.hit(image.x, image.y), HitTarget::ImageContent);
        assert_eq!(app.ui.layout.hit(0, 0), HitTarget::Backdrop);

        // Fit mode has nothing to scroll.
        app.scroll(true, false);
        assert_eq!(app.lightbox.scroll(), 0);
    }

    #[test]
    fn full_size_scrolls_and_videos_have_no_image_region() {
        let mut app = resolved(&["images/100 (1).png", "images/100 (2).mp4"]);
        app.activate(0);
        app.toggle_fit();
        draw(&mut app);
        app.scroll(true, true);
        assert_eq!(app.lightbox.scroll(), 6);

        app.next_item();
        let screen = draw(&mut app);
        assert!(screen.contains("playing"));
        assert!(app.ui.layout.image_content.is_none());
        assert!(app.ui.layout.panel.is_some());
    }

    #[test]
    fn help_overlay_draws_over_everything() {
        let mut app = resolved(&["images/100 (1).png"]);
        app.ui.toggle_help_overlay();
        let screen = draw(&mut app);
        assert!(screen.contains("Help"));
        assert!(screen.contains("open in lightbox"));
    }
}
