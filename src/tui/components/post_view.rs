// Post view
//
// Renders the read-only part of a post: author header with the relative
// publish time, then content blocks in file order. Links are drawn in the
// link color with a pointer prefix.

use super::avatar::Avatar;
use super::formatters::{truncate_to_width, wrap_text};
use crate::feed::{time, ContentBlock, Post};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Left-aligned spans with one span pushed to the right edge
///
/// Falls back to left-only when the right part doesn't fit.
pub fn justify(left: Vec<Span<'static>>, right: Span<'static>, width: usize) -> Line<'static> {
    let left_width: usize = left.iter().map(|s| s.content.width()).sum();
    let right_width = right.content.width();

    let mut spans = left;
    if left_width + 1 + right_width <= width {
        spans.push(Span::raw(" ".repeat(width - left_width - right_width)));
        spans.push(right);
    }
    Line::from(spans)
}

/// Header + content lines for one post
pub fn render(post: &Post, theme: &Theme, width: usize, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let avatar = Avatar::new(&post.author.name);
    let indent = " ".repeat(avatar.label().width() + 1);
    let name_width = width.saturating_sub(indent.len());

    let mut lines = vec![
        justify(
            vec![
                avatar.span(theme),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&post.author.name, name_width),
                    Style::default()
                        .fg(theme.title)
                        .add_modifier(Modifier::BOLD),
                ),
            ],
            Span::styled(
                time::relative_to_now(&post.published_at, &now),
                Style::default().fg(theme.muted),
            ),
            width,
        ),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(
                truncate_to_width(&post.author.role, name_width),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::raw(""),
    ];

    for block in &post.content {
        match block {
            ContentBlock::Paragraph(text) => {
                for line in wrap_text(text, width) {
                    lines.push(Line::styled(line, Style::default().fg(theme.foreground)));
                }
            }
            ContentBlock::Link(text) => {
                for line in wrap_text(&format!("👉 {}", text), width) {
                    lines.push(Line::styled(
                        line,
                        Style::default()
                            .fg(theme.link)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::sample_feed;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn header_shows_author_and_relative_time() {
        let now = Utc::now();
        let feed = sample_feed(now);
        let post = feed.posts()[0].post();

        let lines = render(post, &Theme::default(), 60, now);
        let header = text_of(&lines[0]);

        assert!(header.starts_with("[MA] Marina Alves"));
        assert!(header.ends_with(&time::relative_to_now(&post.published_at, &now)));
        assert_eq!(text_of(&lines[1]).trim(), post.author.role);
    }

    #[test]
    fn links_follow_paragraphs_in_order() {
        let now = Utc::now();
        let feed = sample_feed(now);
        let post = feed.posts()[0].post();

        let lines: Vec<String> = render(post, &Theme::default(), 200, now)
            .iter()
            .map(text_of)
            .collect();

        let first_link = lines.iter().position(|l| l.starts_with("👉")).unwrap();
        let paragraph = lines.iter().position(|l| l.contains("DoctorCare")).unwrap();
        assert!(paragraph < first_link);
        assert_eq!(lines.last().unwrap(), "👉 #novoprojeto #nlw");
    }

    #[test]
    fn justify_drops_right_part_when_narrow() {
        let line = justify(vec![Span::raw("abcdef")], Span::raw("xyz"), 8);
        assert_eq!(text_of(&line), "abcdef");

        let line = justify(vec![Span::raw("ab")], Span::raw("xyz"), 8);
        assert_eq!(text_of(&line), "ab   xyz");
    }
}
