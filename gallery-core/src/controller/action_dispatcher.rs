//! ActionDispatcher: applies actions to `AppState`.
//!
//! Every action is handled synchronously under one lock of the shared state,
//! so no two state changes ever interleave. `handle` returns `false` when the
//! application should terminate.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, trace};

use crate::controller::actions::Action;
use crate::model::app_state::AppState;

pub struct ActionDispatcher {
    app: Arc<Mutex<AppState>>,
    actions_processed: u64,
}

impl ActionDispatcher {
    pub fn new(app: Arc<Mutex<AppState>>) -> Self {
        Self {
            app,
            actions_processed: 0,
        }
    }

    pub async fn handle(&mut self, action: Action) -> bool {
        self.actions_processed += 1;
        let mut app = self.app.lock().await;
        apply_action(&mut app, action)
    }

    pub fn actions_processed(&self) -> u64 {
        self.actions_processed
    }
}

/// Applies one action. Returns `false` on quit.
pub fn apply_action(app: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => {
            info!("Quit requested");
            return false;
        }

        Action::Tick => {
            let mut redraw = app.ui.update_notification();
            if app.gallery.is_scanning() {
                app.ui.tick_spinner();
                redraw = true;
            }
            if redraw {
                app.request_redraw();
            }
            return true;
        }

        Action::NoOp => return true,

        Action::Resize(..) => {}

        Action::ToggleHelp => app.ui.toggle_help_overlay(),
        Action::CloseOverlay => app.ui.close_all_overlays(),

        Action::FocusFilter => app.ui.focus_filter(),
        Action::FocusGrid => app.ui.focus_grid(),
        Action::FilterInput(c) => app.filter_input(c),
        Action::FilterBackspace => app.filter_backspace(),
        Action::FilterClear => app.filter_clear(),

        Action::MoveGridFocus(mv) => app.move_grid_focus(mv),
        Action::ActivateFocused => {
            app.activate_focused();
        }
        Action::Click { column, row } => app.click(column, row),
        Action::Wheel(delta) => app.wheel(delta),

        Action::CloseLightbox => app.close_lightbox(),
        Action::NextItem => {
            app.next_item();
        }
        Action::PrevItem => {
            app.prev_item();
        }
        Action::ToggleFit => app.toggle_fit(),
        Action::ScrollDown { large } => app.scroll(true, large),
        Action::ScrollUp { large } => app.scroll(false, large),
        Action::OpenOriginal => {
            if let Err(e) = app.open_original() {
                app.report_error(&e);
            }
        }

        Action::ScanProgress(progress) => {
            trace!(?progress, "scan progress");
            app.apply_scan_progress(progress);
        }
        Action::GalleryResolved(urls) => {
            debug!("Installing {} resolved items", urls.len());
            app.set_resolved(urls);
        }
    }

    app.request_redraw();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::ui_state::{GridMove, UIOverlay};

    fn app() -> AppState {
        let mut app = AppState::new(Arc::new(Config::default())).with_opener(|_| Ok(()));
        app.set_resolved(vec![
            "images/100 (1).png".into(),
            "images/100 (2).mp4".into(),
            "images/100 (3).gif".into(),
        ]);
        app.redraw = false;
        app
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        assert!(!apply_action(&mut app, Action::Quit));
        assert!(apply_action(&mut app, Action::NoOp));
    }

    #[test]
    fn keyboard_session_through_actions() {
        let mut app = app();

        apply_action(&mut app, Action::MoveGridFocus(GridMove::Right));
        apply_action(&mut app, Action::ActivateFocused);
        assert_eq!(app.lightbox.cursor(), Some(1));
        assert!(app.redraw);

        apply_action(&mut app, Action::NextItem);
        apply_action(&mut app, Action::NextItem);
        assert_eq!(app.lightbox.cursor(), Some(0));
        apply_action(&mut app, Action::PrevItem);
        assert_eq!(app.lightbox.cursor(), Some(2));

        apply_action(&mut app, Action::ToggleFit);
        assert!(app.lightbox.is_fullsize());
        apply_action(&mut app, Action::CloseLightbox);
        assert!(!app.lightbox.is_open());
        // Fit choice persists for the next open.
        apply_action(&mut app, Action::ActivateFocused);
        assert!(app.lightbox.is_fullsize());
    }

    #[test]
    fn filter_actions_update_the_view() {
        let mut app = app();
        apply_action(&mut app, Action::FocusFilter);
        apply_action(&mut app, Action::FilterInput('3'));
        assert_eq!(app.gallery.current().len(), 1);
        apply_action(&mut app, Action::FilterBackspace);
        assert_eq!(app.gallery.current().len(), 3);
        apply_action(&mut app, Action::FilterInput('x'));
        apply_action(&mut app, Action::FilterClear);
        assert_eq!(app.gallery.query(), "");
        apply_action(&mut app, Action::FocusGrid);
        assert!(!app.ui.filter_focused());
    }

    #[test]
    fn scan_actions_feed_the_gallery() {
        let mut app = AppState::new(Arc::new(Config::default()));
        apply_action(
            &mut app,
            Action::ScanProgress(crate::resolver::resolve::ResolveProgress {
                completed: 5,
                total: 44,
                found: 2,
            }),
        );
        assert_eq!(app.gallery.count_label(), "Scanning… 5/44");

        apply_action(&mut app, Action::GalleryResolved(vec!["images/100 (1).png".into()]));
        assert_eq!(app.gallery.count_label(), "1 item");
    }

    #[test]
    fn tick_redraws_only_when_something_moves() {
        let mut app = app();
        apply_action(&mut app, Action::Tick);
        assert!(!app.redraw);

        let mut scanning = AppState::new(Arc::new(Config::default()));
        scanning.redraw = false;
        apply_action(&mut scanning, Action::Tick);
        assert!(scanning.redraw);
        assert_eq!(scanning.ui.spinner_frame, 1);
    }

    #[test]
    fn help_toggles_and_closes() {
        let mut app = app();
        apply_action(&mut app, Action::ToggleHelp);
        assert_eq!(app.ui.overlay, UIOverlay::Help);
        apply_action(&mut app, Action::CloseOverlay);
        assert_eq!(app.ui.overlay, UIOverlay::None);
    }

    #[test]
    fn failed_open_lands_in_the_status_bar() {
        let mut app = app().with_opener(|_| Err(std::io::Error::other("denied")));
        apply_action(&mut app, Action::ActivateFocused);
        apply_action(&mut app, Action::OpenOriginal);
        let note = app.ui.notification.as_ref().map(|n| n.message.clone());
        assert!(note.is_some_and(|m| m.contains("denied")));
    }

    #[tokio::test]
    async fn dispatcher_counts_actions() {
        let shared = Arc::new(Mutex::new(app()));
        let mut dispatcher = ActionDispatcher::new(shared.clone());
        assert!(dispatcher.handle(Action::ActivateFocused).await);
        assert!(!dispatcher.handle(Action::Quit).await);
        assert_eq!(dispatcher.actions_processed(), 2);
        assert!(shared.lock().await.lightbox.is_open());
    }
}
