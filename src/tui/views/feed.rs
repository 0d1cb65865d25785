// Feed view - main content
//
// The feed panel fills the content slot. On wide terminals a profile
// sidebar shows who is commenting in this session.

use crate::tui::app::App;
use crate::tui::components::avatar::Avatar;
use crate::tui::components::formatters::truncate_to_width;
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::FocusablePanel;
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 28;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let feed_area = if Breakpoint::from_width(area.width).shows_sidebar() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
            .split(area);
        render_sidebar(f, chunks[0], app);
        chunks[1]
    } else {
        area
    };

    let focused = app.is_focused(FocusablePanel::Feed);
    app.feed_panel
        .render_with_feed(f, feed_area, &app.feed, &app.theme, focused, Utc::now());
}

/// Profile card for the commenting identity
fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let identity = app.feed_panel.author();
    let width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::raw(""),
        Line::from(Avatar::new(&identity.name).span(theme)),
        Line::raw(""),
        Line::styled(
            truncate_to_width(&identity.name, width),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            truncate_to_width(&identity.avatar_url, width),
            Style::default().fg(theme.muted),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("💬 ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{} comentários", app.feed.total_comments()),
                Style::default().fg(theme.foreground),
            ),
        ]),
        Line::from(vec![
            Span::styled("👏 ", Style::default().fg(theme.applause)),
            Span::styled(
                format!("{} aplausos", app.feed.total_applause()),
                Style::default().fg(theme.foreground),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(card, area);
}
