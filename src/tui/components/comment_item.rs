// Comment item
//
// One comment: commenter avatar (borderless), name and relative time, the
// delete trigger, the text, and the applaud counter.

use super::avatar::Avatar;
use super::formatters::{truncate_to_width, wrap_text};
use super::post_view::justify;
use crate::config::Identity;
use crate::feed::{time, CommentState};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

pub const APPLAUD: &str = "Aplaudir";
pub const DELETE_HINT: &str = "🗑 d";

/// Readable form used for clipboard copy
pub fn readable(comment: &CommentState, author: &Identity) -> String {
    format!(
        "{} ({}):\n{}\n👏 {}",
        author.name,
        time::published_title(&comment.created_at()),
        comment.content(),
        comment.likes()
    )
}

pub fn render(
    comment: &CommentState,
    author: &Identity,
    selected: bool,
    theme: &Theme,
    width: usize,
    now: DateTime<Utc>,
) -> Vec<Line<'static>> {
    let avatar = Avatar::borderless(&author.name);
    let indent = " ".repeat(avatar.label().width() + 1);
    let body_width = width.saturating_sub(indent.len()).max(1);

    let header_right = if selected {
        Span::styled(DELETE_HINT, Style::default().fg(theme.danger))
    } else {
        Span::raw("")
    };

    let mut lines = vec![
        justify(
            vec![
                avatar.span(theme),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&author.name, body_width),
                    Style::default()
                        .fg(theme.title)
                        .add_modifier(Modifier::BOLD),
                ),
            ],
            header_right,
            width,
        ),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                time::relative_to_now(&comment.created_at(), &now),
                Style::default().fg(theme.muted),
            ),
        ]),
    ];

    for chunk in wrap_text(comment.content(), body_width) {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(chunk, Style::default().fg(theme.foreground)),
        ]));
    }

    let applaud_style = if comment.likes() > 0 {
        Style::default()
            .fg(theme.applause)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    let mut footer = vec![
        Span::raw(indent),
        Span::styled(
            format!("👏 {} • {}", APPLAUD, comment.likes()),
            applaud_style,
        ),
    ];
    if selected {
        footer.push(Span::styled("  a", Style::default().fg(theme.muted)));
    }
    lines.push(Line::from(footer));

    lines
}
