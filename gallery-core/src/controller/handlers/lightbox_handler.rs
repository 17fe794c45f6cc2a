//! Keys while the lightbox is open. Anything not bound here is swallowed so
//! the filter field and the grid never see it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use crate::controller::actions::Action;
use crate::controller::handlers::{InputContext, KeyHandler};

#[derive(Debug, Default)]
pub struct LightboxHandler;

impl LightboxHandler {
    pub fn new() -> Self {
        Self
    }
}

impl KeyHandler for LightboxHandler {
    fn can_handle(&self, ctx: &InputContext, _key_event: &KeyEvent) -> bool {
        ctx.lightbox_open
    }

    fn handle(&mut self, _ctx: &InputContext, key_event: KeyEvent) -> Vec<Action> {
        let large = key_event.modifiers.contains(KeyModifiers::SHIFT);

        let action = match key_event.code {
            KeyCode::Esc => Action::CloseLightbox,
            KeyCode::Char('f') | KeyCode::Char('F') => Action::ToggleFit,
            KeyCode::Right => Action::NextItem,
            KeyCode::Left => Action::PrevItem,
            KeyCode::Down => Action::ScrollDown { large },
            KeyCode::Up => Action::ScrollUp { large },
            KeyCode::Char('o') => Action::OpenOriginal,
            _ => {
                trace!("Lightbox swallowed key {:?}", key_event);
                Action::NoOp
            }
        };

        vec![action]
    }

    fn priority(&self) -> u8 {
        0
    }

    fn name(&self) -> &'static str {
        "LightboxHandler"
    }
}
