//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to the focused component.

use super::Component;
use crate::tui::scroll::ScrollMove;
use crossterm::event::KeyEvent;

/// Whether a component consumed a key or let it bubble up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Modal / compose mode (captures everything while active)
///    │
///    ▼
/// App (global handlers: ?, q, l, Tab, y/Y)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
/// ```
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Hint text for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Page keys (Home, End, PgUp, PgDn) for any scrollable interactive panel
pub trait ScrollableInteractive: Interactive + super::Scrollable {
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match ScrollMove::from_key(key.code) {
            Some(step) => {
                self.scroll(step);
                Handled::Yes
            }
            None => Handled::No,
        }
    }
}

impl<T: Interactive + super::Scrollable> ScrollableInteractive for T {}
