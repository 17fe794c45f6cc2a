//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Focus, Grid Cursor, Overlays and Hit-Test Layout
//!
//! Ephemeral interaction state that is not part of the gallery data:
//! - which input consumer has focus (filter field or grid)
//! - the focused card and the grid's row offset
//! - the help overlay and transient notifications
//! - the rectangles drawn last frame, used to resolve mouse clicks

use std::time::Instant;

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIOverlay {
    None,
    Help,
}

/// Which consumer receives typed characters while the lightbox is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss_ms: Option<u64>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card(usize),
    CloseButton,
    /// Displayed image content inside the lightbox panel.
    ImageContent,
    /// Inside the lightbox panel but not on a control or image.
    Panel,
    /// Lightbox open and the click missed the panel.
    Backdrop,
    FilterField,
    Nothing,
}

/// Rectangles recorded by the renderer on the last frame.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    pub cards: Vec<(Rect, usize)>,
    pub filter: Option<Rect>,
    pub panel: Option<Rect>,
    pub close_button: Option<Rect>,
    pub image_content: Option<Rect>,
}

impl LayoutMap {
    pub fn clear_lightbox(&mut self) {
        self.panel = None;
        self.close_button = None;
        self.image_content = None;
    }

    /// Resolves a click. While the lightbox is drawn only its regions count.
    pub fn hit(&self, column: u16, row: u16) -> HitTarget {
        let at = Position::new(column, row);

        if let Some(panel) = self.panel {
            if self.close_button.is_some_and(|r| r.contains(at)) {
                return HitTarget::CloseButton;
            }
            if self.image_content.is_some_and(|r| r.contains(at)) {
                return HitTarget::ImageContent;
            }
            return if panel.contains(at) {
                HitTarget::Panel
            } else {
                HitTarget::Backdrop
            };
        }

        if self.filter.is_some_and(|r| r.contains(at)) {
            return HitTarget::FilterField;
        }

        self.cards
            .iter()
            .find(|(rect, _)| rect.contains(at))
            .map_or(HitTarget::Nothing, |(_, index)| HitTarget::Card(*index))
    }
}

#[derive(Debug, Clone)]
pub struct UIState {
    pub overlay: UIOverlay,
    pub focus: Focus,
    /// Focused card in the current view list.
    pub grid_focus: usize,
    /// Cards per row as of the last frame.
    pub grid_columns: usize,
    /// First visible row of the grid.
    pub grid_offset: usize,
    pub spinner_frame: usize,
    pub notification: Option<Notification>,
    pub layout: LayoutMap,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            overlay: UIOverlay::None,
            focus: Focus::Grid,
            grid_focus: 0,
            grid_columns: 1,
            grid_offset: 0,
            spinner_frame: 0,
            notification: None,
            layout: LayoutMap::default(),
        }
    }

    // --- Focus ---
    pub fn focus_filter(&mut self) {
        self.focus = Focus::Filter;
    }

    pub fn focus_grid(&mut self) {
        self.focus = Focus::Grid;
    }

    pub fn filter_focused(&self) -> bool {
        self.focus == Focus::Filter
    }

    // --- Grid cursor ---
    pub fn move_grid_focus(&mut self, mv: GridMove, len: usize) {
        if len == 0 {
            self.grid_focus = 0;
            return;
        }

        let cols = self.grid_columns.max(1);
        let last = len - 1;
        let cur = self.grid_focus.min(last);
        self.grid_focus = match mv {
            GridMove::Left => cur.saturating_sub(1),
            GridMove::Right => (cur + 1).min(last),
            GridMove::Up => cur.checked_sub(cols).unwrap_or(cur),
            GridMove::Down => {
                if cur + cols <= last {
                    cur + cols
                } else {
                    cur
                }
            }
            GridMove::First => 0,
            GridMove::Last => last,
        };
    }

    /// Called whenever the view list is replaced.
    pub fn reset_grid(&mut self) {
        self.grid_focus = 0;
        self.grid_offset = 0;
    }

    /// Adjusts the row offset so the focused card is inside `visible_rows`.
    pub fn keep_focus_visible(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        let row = self.grid_focus / self.grid_columns.max(1);
        if row < self.grid_offset {
            self.grid_offset = row;
        } else if row >= self.grid_offset + visible_rows {
            self.grid_offset = row + 1 - visible_rows;
        }
    }

    // --- Overlays ---
    pub fn toggle_help_overlay(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            UIOverlay::None => UIOverlay::Help,
        };
    }

    pub fn close_all_overlays(&mut self) {
        self.overlay = UIOverlay::None;
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    // --- Notifications ---
    pub fn show_notification(
        &mut self,
        message: String,
        level: NotificationLevel,
        auto_dismiss_ms: Option<u64>,
    ) {
        self.notification = Some(Notification {
            message,
            level,
            timestamp: Instant::now(),
            auto_dismiss_ms,
        });
    }

    pub fn show_info(&mut self, message: String) {
        self.show_notification(message, NotificationLevel::Info, Some(3000));
    }

    pub fn show_warning(&mut self, message: String) {
        self.show_notification(message, NotificationLevel::Warning, Some(5000));
    }

    /// Errors stay until replaced.
    pub fn show_error(&mut self, message: String) {
        self.show_notification(message, NotificationLevel::Error, None);
    }

    /// Drops an expired notification; returns true if one was dismissed.
    pub fn update_notification(&mut self) -> bool {
        if let Some(notification) = &self.notification
            && let Some(auto_dismiss_ms) = notification.auto_dismiss_ms
            && notification.timestamp.elapsed().as_millis() > auto_dismiss_ms as u128
        {
            self.notification = None;
            return true;
        }
        false
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_with_columns(columns: usize) -> UIState {
        let mut ui = UIState::new();
        ui.grid_columns = columns;
        ui
    }

    #[test]
    fn grid_moves_by_rows_and_clamps() {
        let mut ui = ui_with_columns(4);

        ui.move_grid_focus(GridMove::Down, 10);
        assert_eq!(ui.grid_focus, 4);
        ui.move_grid_focus(GridMove::Down, 10);
        assert_eq!(ui.grid_focus, 8);
        // Row below is missing column 0 + 4 = 12; stay put.
        ui.move_grid_focus(GridMove::Down, 10);
        assert_eq!(ui.grid_focus, 8);

        ui.move_grid_focus(GridMove::Right, 10);
        ui.move_grid_focus(GridMove::Right, 10);
        assert_eq!(ui.grid_focus, 9);

        ui.move_grid_focus(GridMove::Up, 10);
        assert_eq!(ui.grid_focus, 5);
        ui.move_grid_focus(GridMove::First, 10);
        ui.move_grid_focus(GridMove::Left, 10);
        assert_eq!(ui.grid_focus, 0);
        ui.move_grid_focus(GridMove::Last, 10);
        assert_eq!(ui.grid_focus, 9);
    }

    #[test]
    fn empty_grid_pins_focus_to_zero() {
        let mut ui = ui_with_columns(3);
        ui.grid_focus = 5;
        ui.move_grid_focus(GridMove::Right, 0);
        assert_eq!(ui.grid_focus, 0);
    }

    #[test]
    fn offset_follows_focus() {
        let mut ui = ui_with_columns(2);
        ui.grid_focus = 9; // row 4
        ui.keep_focus_visible(2);
        assert_eq!(ui.grid_offset, 3);

        ui.grid_focus = 1; // row 0
        ui.keep_focus_visible(2);
        assert_eq!(ui.grid_offset, 0);
    }

    #[test]
    fn hit_testing_prefers_lightbox_regions() {
        let mut layout = LayoutMap {
            cards: vec![(Rect::new(0, 2, 10, 4), 0), (Rect::new(10, 2, 10, 4), 1)],
            filter: Some(Rect::new(0, 0, 40, 1)),
            ..LayoutMap::default()
        };

        assert_eq!(layout.hit(12, 3), HitTarget::Card(1));
        assert_eq!(layout.hit(1, 0), HitTarget::FilterField);
        assert_eq!(layout.hit(39, 30), HitTarget::Nothing);

        layout.panel = Some(Rect::new(5, 1, 20, 10));
        layout.close_button = Some(Rect::new(20, 1, 3, 1));
        layout.image_content = Some(Rect::new(7, 3, 10, 5));

        assert_eq!(layout.hit(21, 1), HitTarget::CloseButton);
        assert_eq!(layout.hit(8, 4), HitTarget::ImageContent);
        assert_eq!(layout.hit(22, 9), HitTarget::Panel);
        // A card under the backdrop is not reachable.
        assert_eq!(layout.hit(1, 3), HitTarget::Backdrop);

        layout.clear_lightbox();
        assert_eq!(layout.hit(1, 3), HitTarget::Card(0));
    }

    #[test]
    fn help_overlay_toggles() {
        let mut ui = UIState::new();
        ui.toggle_help_overlay();
        assert_eq!(ui.overlay, UIOverlay::Help);
        ui.toggle_help_overlay();
        assert_eq!(ui.overlay, UIOverlay::None);
    }

    #[test]
    fn sticky_errors_are_not_auto_dismissed() {
        let mut ui = UIState::new();
        ui.show_error("boom".into());
        assert!(!ui.update_notification());
        assert!(ui.notification.is_some());

        ui.show_notification("gone".into(), NotificationLevel::Info, Some(0));
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(ui.update_notification());
        assert!(ui.notification.is_none());
    }
}
