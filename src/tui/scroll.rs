// Scroll state shared by TUI panels
//
// Each component owns its scroll state; App just renders and routes input.
//
// - The logs panel auto-follows new entries (scrolling up pauses it)
// - The feed panel scrolls manually and keeps the cursor target in view

use crossterm::event::KeyCode;

/// One scroll step requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMove {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

impl ScrollMove {
    /// Page-level keys shared by every scrollable panel
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown => Some(Self::PageDown),
            KeyCode::Home => Some(Self::Top),
            KeyCode::End => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Scroll state for a single panel
///
/// Owns all state needed for scrolling: position, content size, viewport size.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line/item index at top of viewport)
    offset: usize,

    /// Total number of items/lines in content
    total: usize,

    /// Number of items/lines visible in viewport
    viewport: usize,

    /// Whether to auto-follow new content (scroll to bottom)
    /// User scrolling up disables this; scrolling to bottom re-enables
    pub auto_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Create scroll state with auto-follow disabled (manual scroll)
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Move the viewport the minimum amount needed to show `start..end`
    ///
    /// Ranges taller than the viewport are pinned to their first line.
    pub fn ensure_visible(&mut self, start: usize, end: usize) {
        if self.viewport == 0 {
            return;
        }
        if start < self.offset {
            self.offset = start;
        } else if end > self.offset + self.viewport {
            let height = end.saturating_sub(start);
            self.offset = if height > self.viewport {
                start
            } else {
                end - self.viewport
            };
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Apply a user scroll step
    ///
    /// Moving up pauses auto-follow; reaching the bottom resumes it.
    pub fn apply(&mut self, step: ScrollMove) {
        let max = self.max_offset();
        match step {
            ScrollMove::LineUp => {
                if self.offset == 0 {
                    return;
                }
                self.offset -= 1;
            }
            // Dimensions not set yet: render will clamp
            ScrollMove::LineDown if self.total == 0 => self.offset += 1,
            ScrollMove::LineDown => self.offset = (self.offset + 1).min(max),
            ScrollMove::PageUp => self.offset = self.offset.saturating_sub(self.page()),
            ScrollMove::PageDown => self.offset = (self.offset + self.page()).min(max),
            ScrollMove::Top => self.offset = 0,
            ScrollMove::Bottom => self.offset = max,
        }
        self.auto_follow = self.total > 0 && self.offset >= max;
    }

    fn page(&self) -> usize {
        self.viewport.max(1)
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end.max(start))
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Panels that can be focused for input routing
///
/// Comment detail and help are modals: while one is open, all input goes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Posts, composers and comments (default focus)
    #[default]
    Feed,
    /// System logs panel
    Logs,
}

impl FocusablePanel {
    /// Next panel in Tab order. Logs only participate while visible.
    pub fn next(self, logs_visible: bool) -> Self {
        match self {
            FocusablePanel::Feed if logs_visible => FocusablePanel::Logs,
            _ => FocusablePanel::Feed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.apply(ScrollMove::LineUp);
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_scroll_to_bottom_enables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.apply(ScrollMove::LineUp);
        scroll.apply(ScrollMove::PageUp);
        scroll.apply(ScrollMove::Bottom);
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_line_down_to_bottom_resumes_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(8, 5);
        scroll.apply(ScrollMove::Top);
        assert!(!scroll.auto_follow);

        scroll.apply(ScrollMove::PageDown);
        assert_eq!(scroll.offset(), 3);
        assert!(scroll.auto_follow);

        // Already at the bottom: stays put
        scroll.apply(ScrollMove::LineDown);
        assert_eq!(scroll.offset(), 3);
    }

    #[test]
    fn test_page_keys_map_to_moves() {
        assert_eq!(ScrollMove::from_key(KeyCode::Home), Some(ScrollMove::Top));
        assert_eq!(ScrollMove::from_key(KeyCode::PageDown), Some(ScrollMove::PageDown));
        assert_eq!(ScrollMove::from_key(KeyCode::Up), None);
    }

    #[test]
    fn test_manual_scroll_mode() {
        let mut scroll = ScrollState::manual();

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_ensure_visible_moves_minimally() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(100, 10);

        // Already visible: no movement
        scroll.ensure_visible(2, 5);
        assert_eq!(scroll.offset(), 0);

        // Below the viewport: bottom-align
        scroll.ensure_visible(20, 24);
        assert_eq!(scroll.offset(), 14);

        // Above the viewport: top-align
        scroll.ensure_visible(3, 6);
        assert_eq!(scroll.offset(), 3);

        // Taller than the viewport: pin the first line
        scroll.ensure_visible(40, 60);
        assert_eq!(scroll.offset(), 40);
    }

    #[test]
    fn test_focus_cycle_skips_hidden_logs() {
        assert_eq!(FocusablePanel::Feed.next(true), FocusablePanel::Logs);
        assert_eq!(FocusablePanel::Logs.next(true), FocusablePanel::Feed);
        assert_eq!(FocusablePanel::Feed.next(false), FocusablePanel::Feed);
    }
}
