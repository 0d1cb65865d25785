// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and available themes
// - Comment detail: full comment with absolute time and avatar reference

use crate::feed::{time, CommentId};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::avatar::Avatar;
use crate::tui::components::formatters::wrap_text;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay.
/// Returns false when the modal should be dropped.
pub fn render(f: &mut Frame, modal: &Modal, app: &App) -> bool {
    match modal {
        Modal::Help => {
            render_help(f, app);
            true
        }
        // Comment no longer exists - close modal
        Modal::CommentDetail { post, id } => render_comment_detail(f, app, *post, *id),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  Navegação", header_style)),
        kb("↑/↓, j/k", "Mover entre comentários"),
        kb("g / G", "Início / fim do feed"),
        kb("PgUp/PgDn", "Rolar página"),
        kb("Tab", "Alternar feed / logs"),
        Line::raw(""),
        Line::from(Span::styled("  Comentar", header_style)),
        kb("Enter, i", "Escrever no campo"),
        kb("Enter", "Publicar (escrevendo)"),
        kb("Esc", "Parar de escrever"),
        Line::raw(""),
        Line::from(Span::styled("  Comentário", header_style)),
        kb("a, Espaço", "Aplaudir"),
        kb("d, Del", "Excluir"),
        kb("Enter", "Ver detalhes"),
        Line::raw(""),
        Line::from(Span::styled("  Área de transferência", header_style)),
        kb("y", "Copiar texto"),
        kb("Y", "Copiar JSON"),
        Line::raw(""),
        Line::from(Span::styled("  Geral", header_style)),
        kb("l", "Mostrar/ocultar logs"),
        kb("?", "Esta ajuda"),
        kb("q", "Sair"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(Span::styled("  Temas (--theme <NOME>)", header_style)),
    ];

    for name in Theme::list_available() {
        let current = name.eq_ignore_ascii_case(&app.theme.name);
        lines.push(Line::from(vec![
            Span::styled(if current { "  ● " } else { "    " }, key_style),
            Span::styled(name, if current { key_style } else { desc_style }),
        ]));
    }

    let height = (lines.len() as u16 + 2).min(f.area().height);
    let area = centered_rect(46, height, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Ajuda ")
                .title_bottom(Line::from(" ? ou Esc para fechar ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the comment detail modal. Returns false if the comment is gone.
fn render_comment_detail(f: &mut Frame, app: &App, post: usize, id: CommentId) -> bool {
    let Some(state) = app.feed.post(post) else {
        return false;
    };
    let Some(comment) = state.comment(id) else {
        return false;
    };
    let theme = &app.theme;
    let author = app.feed_panel.author();

    let frame_area = f.area();
    let width = (frame_area.width * 70 / 100).clamp(40, 100);
    let inner_width = width.saturating_sub(4) as usize;

    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.foreground);

    let mut lines = vec![
        Line::from(vec![
            Avatar::borderless(&author.name).span(theme),
            Span::raw(" "),
            Span::styled(
                author.name.clone(),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Avatar: ", label),
            Span::styled(author.avatar_url.clone(), Style::default().fg(theme.link)),
        ]),
        Line::from(vec![
            Span::styled("Publicado: ", label),
            Span::styled(time::published_title(&comment.created_at()), value),
        ]),
        Line::from(vec![
            Span::styled("Em resposta a: ", label),
            Span::styled(state.post().author.name.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Id: ", label),
            Span::styled(comment.id().to_string(), label),
        ]),
        Line::raw(""),
    ];

    if comment.content().is_empty() {
        lines.push(Line::styled(
            "(comentário vazio)",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        for chunk in wrap_text(comment.content(), inner_width) {
            lines.push(Line::styled(chunk, value));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("👏 Aplaudir • {}", comment.likes()),
        Style::default()
            .fg(theme.applause)
            .add_modifier(Modifier::BOLD),
    ));

    let height = (lines.len() as u16 + 2).min(frame_area.height);
    let area = centered_rect(width, height, frame_area);
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.highlight))
                .title(" Comentário ")
                .title_bottom(
                    Line::from(" a:aplaudir  d:excluir  y/Y:copiar  Esc:fechar ").centered(),
                ),
        );

    f.render_widget(paragraph, area);
    true
}
