//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Every input source (keys, mouse, timer, background scan) is reduced to an
//! `Action` before it touches state. Handlers produce them; the dispatcher
//! consumes them.

use crate::model::ui_state::GridMove;
use crate::resolver::resolve::ResolveProgress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// A terminal resize event.
    Resize(u16, u16),
    /// Periodic tick for spinner and notification expiry.
    Tick,
    /// Input consumed with nothing to do.
    NoOp,

    /// Toggle the help overlay visibility.
    ToggleHelp,
    CloseOverlay,

    /// Give typed characters to the filter field.
    FocusFilter,
    /// Return keyboard focus to the grid.
    FocusGrid,
    FilterInput(char),
    FilterBackspace,
    FilterClear,

    MoveGridFocus(GridMove),
    /// Open the lightbox on the focused card.
    ActivateFocused,
    /// Left click at a terminal cell.
    Click { column: u16, row: u16 },
    /// Mouse wheel, positive is down.
    Wheel(i8),

    CloseLightbox,
    NextItem,
    PrevItem,
    ToggleFit,
    ScrollDown { large: bool },
    ScrollUp { large: bool },
    /// Hand the displayed item's URL to the system opener.
    OpenOriginal,

    /// Progress from the background scan.
    ScanProgress(ResolveProgress),
    /// The scan finished; resolved URLs in index order.
    GalleryResolved(Vec<String>),
}
