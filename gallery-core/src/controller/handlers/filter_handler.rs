//! Keys while the filter field has focus. The query is re-applied on every
//! keystroke by the dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::actions::Action;
use crate::controller::handlers::{InputContext, KeyHandler, is_text_input};

#[derive(Debug, Default)]
pub struct FilterHandler;

impl FilterHandler {
    pub fn new() -> Self {
        Self
    }
}

impl KeyHandler for FilterHandler {
    fn can_handle(&self, ctx: &InputContext, _key_event: &KeyEvent) -> bool {
        ctx.filter_focused && !ctx.help_open
    }

    fn handle(&mut self, _ctx: &InputContext, key_event: KeyEvent) -> Vec<Action> {
        if is_text_input(&key_event)
            && let KeyCode::Char(c) = key_event.code
        {
            return vec![Action::FilterInput(c)];
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('u') if ctrl => vec![Action::FilterClear],
            KeyCode::Backspace => vec![Action::FilterBackspace],
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                vec![Action::FocusGrid]
            }
            _ => vec![Action::NoOp],
        }
    }

    fn priority(&self) -> u8 {
        10
    }

    fn name(&self) -> &'static str {
        "FilterHandler"
    }
}
