//! Grid navigation, activation and the global single-key commands. Also
//! owns the help overlay while it is open.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::trace;

use crate::controller::actions::Action;
use crate::controller::handlers::*;
use crate::model::ui_state::GridMove;

pub struct GridHandler {
    bindings: HashMap<KeyEvent, Action>,
}

impl Default for GridHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GridHandler {
    pub fn new() -> Self {
        let mut bindings = HashMap::with_capacity(16);

        // Arrow keys
        bindings.insert(arrow_key(KeyCode::Up), Action::MoveGridFocus(GridMove::Up));
        bindings.insert(arrow_key(KeyCode::Down), Action::MoveGridFocus(GridMove::Down));
        bindings.insert(arrow_key(KeyCode::Left), Action::MoveGridFocus(GridMove::Left));
        bindings.insert(arrow_key(KeyCode::Right), Action::MoveGridFocus(GridMove::Right));
        bindings.insert(arrow_key(KeyCode::Home), Action::MoveGridFocus(GridMove::First));
        bindings.insert(arrow_key(KeyCode::End), Action::MoveGridFocus(GridMove::Last));

        // Vim keys
        bindings.insert(key('k'), Action::MoveGridFocus(GridMove::Up));
        bindings.insert(key('j'), Action::MoveGridFocus(GridMove::Down));
        bindings.insert(key('h'), Action::MoveGridFocus(GridMove::Left));
        bindings.insert(key('l'), Action::MoveGridFocus(GridMove::Right));

        // Activation
        bindings.insert(enter_key(), Action::ActivateFocused);
        bindings.insert(key(' '), Action::ActivateFocused);

        bindings.insert(key('/'), Action::FocusFilter);
        bindings.insert(key('?'), Action::ToggleHelp);
        bindings.insert(key('q'), Action::Quit);

        Self { bindings }
    }

    fn handle_help_key(key_event: KeyEvent) -> Action {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseOverlay,
            _ => Action::NoOp,
        }
    }
}

impl KeyHandler for GridHandler {
    fn can_handle(&self, ctx: &InputContext, _key_event: &KeyEvent) -> bool {
        !ctx.lightbox_open
    }

    fn handle(&mut self, ctx: &InputContext, key_event: KeyEvent) -> Vec<Action> {
        trace!("GridHandler: key {:?}", key_event);

        if ctx.help_open {
            return vec![Self::handle_help_key(key_event)];
        }

        // Terminals disagree on whether '?' carries SHIFT.
        let lookup = match key_event.code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => key(c),
            _ => key_event,
        };

        self.bindings
            .get(&lookup)
            .cloned()
            .map(|action| vec![action])
            .unwrap_or_default()
    }

    fn priority(&self) -> u8 {
        20
    }

    fn name(&self) -> &'static str {
        "GridHandler"
    }
}
