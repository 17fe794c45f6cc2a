//! ``src/controller/event_loop.rs``
//! ============================================================================
//! # Event Loop: Terminal, Timer and Background Actions
//!
//! Waits on three sources at once and yields one `Action` per wake-up:
//! - crossterm's `EventStream` (keys routed through the handler chain,
//!   mouse and resize mapped directly)
//! - the action channel fed by the resolve task
//! - a tick interval driving the spinner and notification expiry

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event as TermEvent, EventStream, MouseButton, MouseEvent, MouseEventKind};
use futures::StreamExt;
use tokio::sync::{Mutex, mpsc};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::controller::actions::Action;
use crate::controller::handlers::key_handler_orchestrator::KeyHandlerOrchestrator;
use crate::model::app_state::AppState;

pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Left presses become clicks, the wheel scrolls. Everything else is noise.
pub fn map_mouse(mouse_event: MouseEvent) -> Action {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse_event.column,
            row: mouse_event.row,
        },
        MouseEventKind::ScrollDown => Action::Wheel(1),
        MouseEventKind::ScrollUp => Action::Wheel(-1),
        _ => Action::NoOp,
    }
}

pub struct EventLoop {
    app: Arc<Mutex<AppState>>,
    event_stream: EventStream,
    action_rx: mpsc::UnboundedReceiver<Action>,
    keys: KeyHandlerOrchestrator,
    tick: Interval,
    event_count: u64,
    last_performance_check: Instant,
}

impl EventLoop {
    pub fn new(app: Arc<Mutex<AppState>>, action_rx: mpsc::UnboundedReceiver<Action>) -> Self {
        info!("Initializing event loop, tick every {:?}", TICK_RATE);

        let mut tick = tokio::time::interval(TICK_RATE);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            app,
            event_stream: EventStream::new(),
            action_rx,
            keys: KeyHandlerOrchestrator::new(),
            tick,
            event_count: 0,
            last_performance_check: Instant::now(),
        }
    }

    pub async fn next_action(&mut self) -> Option<Action> {
        let action = tokio::select! {
            Some(Ok(event)) = self.event_stream.next() => {
                trace!("Terminal event received: {:?}", event);
                Some(self.handle_terminal_event(event).await)
            }

            Some(action) = self.action_rx.recv() => {
                debug!("Background action received: {:?}", action);
                Some(action)
            }

            _ = self.tick.tick() => Some(Action::Tick),
        };

        self.event_count += 1;
        if self.last_performance_check.elapsed().as_secs() >= 30 {
            let stats = self.keys.get_stats();
            info!(
                "Performance: {} events, {} keys ({} unhandled)",
                self.event_count, stats.total_events_processed, stats.unhandled_events
            );
            self.last_performance_check = Instant::now();
        }

        action
    }

    async fn handle_terminal_event(&mut self, event: TermEvent) -> Action {
        match event {
            TermEvent::Key(key_event) => {
                let ctx = self.app.lock().await.input_context();
                // Handlers emit at most one action per key.
                self.keys
                    .handle_key_event(&ctx, key_event)
                    .into_iter()
                    .next()
                    .unwrap_or(Action::NoOp)
            }

            TermEvent::Mouse(mouse_event) => map_mouse(mouse_event),

            TermEvent::Resize(x, y) => {
                info!("Terminal resize: {}x{}", x, y);
                Action::Resize(x, y)
            }

            _ => {
                trace!("Unhandled terminal event: {:?}", event);
                Action::NoOp
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_press_is_a_click() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left))),
            Action::Click { column: 7, row: 3 }
        );
    }

    #[test]
    fn wheel_and_noise() {
        assert_eq!(map_mouse(mouse(MouseEventKind::ScrollDown)), Action::Wheel(1));
        assert_eq!(map_mouse(mouse(MouseEventKind::ScrollUp)), Action::Wheel(-1));
        assert_eq!(map_mouse(mouse(MouseEventKind::Moved)), Action::NoOp);
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right))),
            Action::NoOp
        );
    }
}
