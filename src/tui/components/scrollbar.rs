//! Vertical scrollbar for panels that own a `ScrollState`

use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Draw a thumb-only scrollbar inside the right border of `area`.
/// Nothing is drawn when the content fits.
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState, theme: &Theme) {
    if !scroll.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.muted))
        .track_style(Style::default().fg(theme.border));

    // Positions run over the scrollable distance, not the whole content
    let scrollable = scroll.total().saturating_sub(scroll.viewport());
    let mut state = ScrollbarState::new(scrollable).position(scroll.offset());

    f.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state,
    );
}
