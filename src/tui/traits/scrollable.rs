//! Scrolling and cursor selection capabilities

use super::Component;
use crate::tui::scroll::{ScrollMove, ScrollState};

/// A component that owns a `ScrollState`
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll(&mut self, step: ScrollMove) {
        self.scroll_state_mut().apply(step);
    }
}

/// A scrollable component with a cursor over discrete items
///
/// Implementors supply the cursor; movement is clamped to the item range.
pub trait Selectable: Scrollable {
    fn selected_index(&self) -> Option<usize>;

    fn select(&mut self, index: usize);

    fn item_count(&self) -> usize;

    /// Move the cursor by `delta` items. With no cursor yet, moving down
    /// lands on the first item and moving up on the last.
    fn step(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let last = count - 1;

        let target = match self.selected_index() {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None if delta >= 0 => 0,
            None => last,
        };

        if self.selected_index() != Some(target) {
            self.select(target);
        }
    }

    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    fn select_last(&mut self) {
        if let Some(last) = self.item_count().checked_sub(1) {
            self.select(last);
        }
    }
}
