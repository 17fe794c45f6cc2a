// gallery-core/src/controller/handlers/key_handler_orchestrator.rs
// Routes key events through the handler chain

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace, warn};

use super::filter_handler::FilterHandler;
use super::grid_handler::GridHandler;
use super::lightbox_handler::LightboxHandler;
use super::{InputContext, KeyHandler};
use crate::controller::actions::Action;

/// Chains the key handlers in priority order. The first handler that claims
/// a key and returns actions ends the walk.
pub struct KeyHandlerOrchestrator {
    handlers: Vec<Box<dyn KeyHandler>>,
    total_events_processed: u64,
    unhandled_events: u64,
}

impl std::fmt::Debug for KeyHandlerOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyHandlerOrchestrator")
            .field("handler_names", &self.get_handler_names())
            .field("total_events_processed", &self.total_events_processed)
            .field("unhandled_events", &self.unhandled_events)
            .finish()
    }
}

impl Default for KeyHandlerOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHandlerOrchestrator {
    pub fn new() -> Self {
        let mut handlers: Vec<Box<dyn KeyHandler>> = vec![
            Box::new(GridHandler::new()),     // Priority 20
            Box::new(FilterHandler::new()),   // Priority 10
            Box::new(LightboxHandler::new()), // Priority 0
        ];

        handlers.sort_by_key(|h| h.priority());

        debug!(
            handler_names = ?handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            "KeyHandlerOrchestrator initialized with handlers"
        );

        Self {
            handlers,
            total_events_processed: 0,
            unhandled_events: 0,
        }
    }

    pub fn handle_key_event(&mut self, ctx: &InputContext, key_event: KeyEvent) -> Vec<Action> {
        // Release and repeat reports arrive on some platforms; act on presses.
        if key_event.kind != KeyEventKind::Press {
            return vec![];
        }

        self.total_events_processed += 1;

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return vec![Action::Quit];
        }

        for handler in &mut self.handlers {
            if !handler.can_handle(ctx, &key_event) {
                continue;
            }

            let actions = handler.handle(ctx, key_event);
            if !actions.is_empty() {
                trace!(
                    handler_name = handler.name(),
                    actions = ?actions,
                    "Handler processed key"
                );
                return actions;
            }
        }

        self.unhandled_events += 1;
        if self.unhandled_events % 100 == 0 {
            warn!(
                unhandled_events = self.unhandled_events,
                total_events = self.total_events_processed,
                "High rate of unhandled keys"
            );
        }

        vec![]
    }

    pub fn get_stats(&self) -> OrchestratorStats {
        OrchestratorStats {
            total_events_processed: self.total_events_processed,
            unhandled_events: self.unhandled_events,
            handlers_count: self.handlers.len(),
        }
    }

    pub fn get_handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorStats {
    pub total_events_processed: u64,
    pub unhandled_events: u64,
    pub handlers_count: usize,
}
