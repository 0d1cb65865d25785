// Comment composer
//
// The draft box under each post. Shows the placeholder when empty, the
// caret while editing, the validation message when raised, and the publish
// button once the composer is selected.

use super::formatters::wrap_text;
use crate::feed::post::Draft;
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub const HEADING: &str = "Deixe seu comentário";
pub const PLACEHOLDER: &str = "Deixe um comentário";
pub const PUBLISH: &str = "Publicar";

const CARET: &str = "█";

/// How the composer should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerView {
    /// Cursor is on this composer
    pub selected: bool,
    /// Keystrokes go to the draft
    pub editing: bool,
}

pub fn render(draft: &Draft, view: ComposerView, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        HEADING,
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )];

    let text_width = width.saturating_sub(2).max(1);
    let box_style = if view.editing {
        Style::default().fg(theme.selection_fg).bg(theme.selection)
    } else {
        Style::default().fg(theme.foreground)
    };

    if draft.is_empty() && !view.editing {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.border)),
            Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    } else {
        let mut wrapped = wrap_text(draft.text(), text_width);
        // Wrapping eats the trailing space the user just typed
        if view.editing && draft.text().ends_with(' ') {
            if let Some(tail) = wrapped.last_mut() {
                tail.push(' ');
            }
        }
        let last = wrapped.len().saturating_sub(1);
        for (i, chunk) in wrapped.into_iter().enumerate() {
            let prefix = if i == 0 { "> " } else { "  " };
            let mut spans = vec![
                Span::styled(prefix, Style::default().fg(theme.border)),
                Span::styled(chunk, box_style),
            ];
            if view.editing && i == last {
                spans.push(Span::styled(CARET, Style::default().fg(theme.accent)));
            }
            lines.push(Line::from(spans));
        }
    }

    if let Some(message) = draft.validity_message() {
        lines.push(Line::styled(
            format!("⚠ {}", message),
            Style::default().fg(theme.danger),
        ));
    }

    if view.selected || view.editing {
        lines.push(render_button(!draft.is_empty(), view.editing, theme));
    }

    lines
}

/// Publish button; disabled-looking while the draft is empty
fn render_button(enabled: bool, editing: bool, theme: &Theme) -> Line<'static> {
    let button_style = if enabled {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted).bg(theme.selection)
    };

    let hint = if editing {
        "  Enter:publicar  Esc:sair"
    } else {
        "  Enter:escrever"
    };

    Line::from(vec![
        Span::styled(format!(" {} ", PUBLISH), button_style),
        Span::styled(hint, Style::default().fg(theme.muted)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::sample_feed;
    use chrono::Utc;

    fn texts(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    const IDLE: ComposerView = ComposerView {
        selected: false,
        editing: false,
    };

    #[test]
    fn idle_empty_draft_shows_placeholder_only() {
        let feed = sample_feed(Utc::now());
        let lines = texts(&render(feed.posts()[0].draft(), IDLE, &Theme::default(), 40));
        assert_eq!(
            lines,
            vec![
                "Deixe seu comentário".to_string(),
                "> Deixe um comentário".to_string()
            ]
        );
    }

    #[test]
    fn validation_message_and_button_when_selected() {
        let mut feed = sample_feed(Utc::now());
        let post = feed.post_mut(0).unwrap();
        post.invalid();

        let view = ComposerView {
            selected: true,
            editing: false,
        };
        let lines = texts(&render(post.draft(), view, &Theme::default(), 40));

        assert!(lines.contains(&"⚠ Este campo é obrigatório!".to_string()));
        assert!(lines.last().unwrap().starts_with(" Publicar "));
    }

    #[test]
    fn editing_shows_caret_after_text() {
        let mut feed = sample_feed(Utc::now());
        let post = feed.post_mut(0).unwrap();
        post.edit_draft("Parabéns");

        let view = ComposerView {
            selected: true,
            editing: true,
        };
        let lines = texts(&render(post.draft(), view, &Theme::default(), 40));
        assert_eq!(lines[1], "> Parabéns█");
    }
}
