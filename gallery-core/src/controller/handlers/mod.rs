//! src/controller/handlers/mod.rs
//! ============================================================================
//! # Key Handlers
//!
//! Each handler owns the keys of one input consumer. The orchestrator asks
//! them in priority order; the lightbox goes first so its keys win over the
//! filter field and the grid whenever it is open.

use crossterm::event::KeyEvent;

use crate::controller::actions::Action;

pub mod filter_handler;
pub mod grid_handler;
pub mod key_handler_orchestrator;
pub mod lightbox_handler;

pub mod utils;
pub use utils::*;

/// Snapshot of the state that decides who receives a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub lightbox_open: bool,
    pub filter_focused: bool,
    pub help_open: bool,
}

pub trait KeyHandler: Send {
    /// Check if this handler owns the key in the given context.
    fn can_handle(&self, ctx: &InputContext, key_event: &KeyEvent) -> bool;

    /// Translate the key. An empty result lets lower-priority handlers try.
    fn handle(&mut self, ctx: &InputContext, key_event: KeyEvent) -> Vec<Action>;

    /// Handler priority for ordering (lower numbers run first).
    fn priority(&self) -> u8 {
        100
    }

    /// Handler name for debugging.
    fn name(&self) -> &'static str;
}
