//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Everything the Viewer Knows
//!
//! `AppState` owns the gallery data, the lightbox and the UI state, and
//! offers one method per user intent. The dispatcher calls these; the
//! renderer only reads.
//!
//! Filter changes re-anchor the lightbox and reset the grid cursor, so a
//! query typed while an item is displayed keeps next/prev walking the new
//! list.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::controller::handlers::InputContext;
use crate::error::AppError;
use crate::model::gallery_state::GalleryState;
use crate::model::lightbox::Lightbox;
use crate::model::ui_state::{GridMove, HitTarget, UIOverlay, UIState};
use crate::resolver::resolve::ResolveProgress;

/// Hands a URL or path to the desktop's default handler.
pub type Opener = fn(&str) -> io::Result<()>;

pub fn system_open(target: &str) -> io::Result<()> {
    open::that_detached(target)
}

pub struct AppState {
    pub config: Arc<Config>,
    pub gallery: GalleryState,
    pub lightbox: Lightbox,
    pub ui: UIState,
    pub redraw: bool,
    pub started_at: Instant,
    opener: Opener,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            gallery: GalleryState::new(),
            lightbox: Lightbox::new(),
            ui: UIState::new(),
            redraw: true,
            started_at: Instant::now(),
            opener: system_open,
        }
    }

    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn input_context(&self) -> InputContext {
        InputContext {
            lightbox_open: self.lightbox.is_open(),
            filter_focused: self.ui.filter_focused(),
            help_open: self.ui.overlay == UIOverlay::Help,
        }
    }

    // --- Scan ---
    pub fn apply_scan_progress(&mut self, progress: ResolveProgress) {
        if self.gallery.is_scanning() {
            self.gallery.scanning = Some(progress);
        }
    }

    pub fn set_resolved(&mut self, urls: Vec<String>) {
        info!(
            "Gallery resolved: {} items in {:?}",
            urls.len(),
            self.started_at.elapsed()
        );
        self.gallery.set_resolved(urls);
        self.after_view_change();
    }

    // --- Filter ---
    pub fn filter_input(&mut self, c: char) {
        self.gallery.push_query_char(c);
        self.after_view_change();
    }

    pub fn filter_backspace(&mut self) {
        self.gallery.pop_query_char();
        self.after_view_change();
    }

    pub fn filter_clear(&mut self) {
        self.gallery.set_query("");
        self.after_view_change();
    }

    fn after_view_change(&mut self) {
        self.ui.reset_grid();
        self.lightbox.rebase(self.gallery.current());
        debug!(
            query = self.gallery.query(),
            shown = self.gallery.current().len(),
            "view list updated"
        );
    }

    // --- Grid ---
    pub fn move_grid_focus(&mut self, mv: GridMove) {
        self.ui.move_grid_focus(mv, self.gallery.current().len());
    }

    /// Opens the lightbox at `index` of the current view list.
    pub fn activate(&mut self, index: usize) -> bool {
        let opened = self.lightbox.open(self.gallery.current(), index);
        if opened {
            self.ui.grid_focus = index;
        }
        opened
    }

    pub fn activate_focused(&mut self) -> bool {
        self.activate(self.ui.grid_focus)
    }

    // --- Lightbox ---
    pub fn next_item(&mut self) -> bool {
        self.lightbox.next(self.gallery.current())
    }

    pub fn prev_item(&mut self) -> bool {
        self.lightbox.prev(self.gallery.current())
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
        self.ui.layout.clear_lightbox();
    }

    pub fn toggle_fit(&mut self) {
        self.lightbox.toggle_fit();
    }

    /// Scrolls the lightbox content by `scroll_step`, doubled when `large`.
    pub fn scroll(&mut self, down: bool, large: bool) {
        let step = self.config.viewer.scroll_step.max(1);
        let rows = if large { step.saturating_mul(2) } else { step };
        if down {
            self.lightbox.scroll_down(rows);
        } else {
            self.lightbox.scroll_up(rows);
        }
    }

    pub fn open_original(&mut self) -> Result<(), AppError> {
        let Some(item) = self.lightbox.item() else {
            return Ok(());
        };
        let target = item.url.clone();

        (self.opener)(&target).map_err(|e| AppError::open_failed(target.as_str(), e.to_string()))?;
        info!("Opened original {}", target);
        self.ui.show_info(format!("Opened {}", target));
        Ok(())
    }

    // --- Mouse ---
    pub fn click(&mut self, column: u16, row: u16) {
        if self.ui.overlay == UIOverlay::Help {
            self.ui.close_all_overlays();
            return;
        }

        let target = self.ui.layout.hit(column, row);
        debug!(column, row, ?target, "click");

        match target {
            HitTarget::CloseButton | HitTarget::Backdrop => self.close_lightbox(),
            HitTarget::ImageContent => self.toggle_fit(),
            HitTarget::Card(index) => {
                self.ui.focus_grid();
                self.activate(index);
            }
            HitTarget::FilterField => self.ui.focus_filter(),
            HitTarget::Panel | HitTarget::Nothing => {}
        }
    }

    /// Positive deltas scroll down.
    pub fn wheel(&mut self, delta: i8) {
        let down = delta > 0;
        if self.lightbox.is_open() {
            self.scroll(down, false);
        } else {
            self.move_grid_focus(if down { GridMove::Down } else { GridMove::Up });
        }
    }

    pub fn report_error(&mut self, err: &AppError) {
        warn!("{}", err);
        self.ui.show_error(err.to_string());
    }
}
