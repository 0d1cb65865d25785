/// Responsive breakpoints for the feed layout.
///
/// Width thresholds live here so render code asks "does this fit" instead of
/// comparing column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane, bare feed
    Compact,
    /// 60-99 cols: identity in the title bar
    Normal,
    /// 100+ cols: profile sidebar and full status bar
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Title bar has room for the commenting identity
    pub fn shows_identity(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    /// Profile card next to the feed
    pub fn shows_sidebar(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    /// Status bar with every counter instead of the short form
    pub fn shows_full_status(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }
}
