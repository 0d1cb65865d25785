// Title bar component
//
// Renders the app title, the commenting identity, and the help hint.

use super::avatar::Avatar;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let identity = app.feed_panel.author();

    let mut spans = vec![Span::styled(
        " ◆ Ignite Feed",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];

    if Breakpoint::from_width(area.width).shows_identity() {
        spans.push(Span::styled(" ──── ", Style::default().fg(theme.border)));
        spans.push(Avatar::borderless(&identity.name).span(theme));
        spans.push(Span::styled(
            format!(" {}", identity.name),
            Style::default().fg(theme.title),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
