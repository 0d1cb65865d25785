// Status bar component
//
// Renders feed totals and the focused panel's key hints at the bottom.

use super::formatters::format_compact_number;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: totals with labels plus key hints
/// - Narrow: compact icon-based totals
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let posts = app.feed.posts().len() as u64;
    let comments = app.feed.total_comments() as u64;
    let applause = app.feed.total_applause();
    let bp = Breakpoint::from_width(area.width);

    let status_text = if !bp.shows_full_status() {
        format!(
            " {} │ 📝 {} │ 💬 {} │ 👏 {}",
            app.uptime(),
            posts,
            format_compact_number(comments),
            format_compact_number(applause),
        )
    } else {
        let hint = app.focus_hint().unwrap_or("?:ajuda");
        format!(
            " {} │ 📝 {} publicações │ 💬 {} comentários │ 👏 {} aplausos │ {}",
            app.uptime(),
            posts,
            format_compact_number(comments),
            format_compact_number(applause),
            hint,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
