//! Feed panel component
//!
//! Renders every post with its composer and comment list, and owns the feed
//! cursor. The cursor walks a flat list of targets: for each post, its
//! composer first and then its comments in list order.
//!
//! The panel never mutates the feed. App reads [`FeedPanel::selected`],
//! dispatches the matching `PostMsg`, then calls [`FeedPanel::sync`] so the
//! cursor is clamped to whatever the feed looks like now.

use super::scrollbar::render_scrollbar;
use super::{comment_item, composer, post_view};
use crate::config::Identity;
use crate::feed::{CommentId, CommentState, Feed};
use crate::theme::Theme;
use crate::tui::scroll::{FocusablePanel, ScrollState};
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, Scrollable, ScrollableInteractive,
    Selectable,
};
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Something the feed cursor can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedTarget {
    /// The draft box of a post
    Composer { post: usize },
    /// One comment of a post
    Comment { post: usize, id: CommentId },
}

impl FeedTarget {
    /// Index of the post this target belongs to
    pub fn post(&self) -> usize {
        match self {
            FeedTarget::Composer { post } | FeedTarget::Comment { post, .. } => *post,
        }
    }
}

/// Cursor targets in display order
pub fn targets(feed: &Feed) -> Vec<FeedTarget> {
    feed.posts()
        .iter()
        .enumerate()
        .flat_map(|(post, state)| {
            std::iter::once(FeedTarget::Composer { post }).chain(
                state
                    .comments()
                    .iter()
                    .map(move |c| FeedTarget::Comment { post, id: c.id() }),
            )
        })
        .collect()
}

/// Feed panel component
pub struct FeedPanel {
    scroll: ScrollState,

    /// Cursor position in the target list
    cursor: usize,

    /// Target list from the last sync
    targets: Vec<FeedTarget>,

    /// Copy of the comment under the cursor, for clipboard operations
    selected_comment: Option<CommentState>,

    /// Commenting identity (rendered as author of every comment)
    author: Identity,

    /// Keystrokes go to the selected composer's draft
    editing: bool,

    /// Scroll the cursor into view on the next render
    reveal_cursor: bool,
}

impl FeedPanel {
    pub fn new(author: Identity) -> Self {
        Self {
            scroll: ScrollState::manual(),
            cursor: 0,
            targets: Vec::new(),
            selected_comment: None,
            author,
            editing: false,
            reveal_cursor: true,
        }
    }

    /// Re-read targets from the feed and clamp the cursor
    pub fn sync(&mut self, feed: &Feed) {
        self.targets = targets(feed);
        if self.cursor >= self.targets.len() {
            self.cursor = self.targets.len().saturating_sub(1);
        }

        self.selected_comment = match self.selected() {
            Some(FeedTarget::Comment { post, id }) => feed
                .post(post)
                .and_then(|p| p.comment(id))
                .cloned(),
            _ => None,
        };

        // Editing only makes sense on a composer
        if !matches!(self.selected(), Some(FeedTarget::Composer { .. })) {
            self.editing = false;
        }
    }

    pub fn selected(&self) -> Option<FeedTarget> {
        self.targets.get(self.cursor).copied()
    }

    pub fn selected_comment(&self) -> Option<&CommentState> {
        self.selected_comment.as_ref()
    }

    pub fn author(&self) -> &Identity {
        &self.author
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter compose mode if the cursor is on a composer
    pub fn start_editing(&mut self) -> bool {
        self.editing = matches!(self.selected(), Some(FeedTarget::Composer { .. }));
        if self.editing {
            self.reveal_cursor = true;
        }
        self.editing
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Keep the cursor in view after the feed changed shape
    pub fn reveal(&mut self) {
        self.reveal_cursor = true;
    }

    /// Render all posts, highlighting the cursor target
    pub fn render_with_feed(
        &mut self,
        f: &mut Frame,
        area: Rect,
        feed: &Feed,
        theme: &Theme,
        focused: bool,
        now: DateTime<Utc>,
    ) {
        // Borders plus the two-column cursor gutter
        let width = area.width.saturating_sub(2 + 2 + 1) as usize;
        let height = area.height.saturating_sub(2) as usize;

        let selected = if focused { self.selected() } else { None };
        let (lines, selected_range) = self.build_lines(feed, theme, width, now, selected);

        self.scroll.update_dimensions(lines.len(), height);
        if self.reveal_cursor {
            if let Some((start, end)) = selected_range {
                self.scroll.ensure_visible(start, end);
            }
            self.reveal_cursor = false;
        }

        let title = if self.editing {
            " Feed [escrevendo] "
        } else {
            " Feed "
        };

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(
                        Style::default().fg(theme.panel_border(FocusablePanel::Feed, focused)),
                    )
                    .title(title),
            )
            .scroll((self.scroll.offset() as u16, 0));

        f.render_widget(paragraph, area);
        render_scrollbar(f, area, &self.scroll, theme);
    }

    /// Lines for the whole feed plus the line range of the selected target
    fn build_lines(
        &self,
        feed: &Feed,
        theme: &Theme,
        width: usize,
        now: DateTime<Utc>,
        selected: Option<FeedTarget>,
    ) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut range = None;

        let gutter = |chunk: Vec<Line<'static>>, is_selected: bool| -> Vec<Line<'static>> {
            let marker = if is_selected {
                Span::styled("▌ ", Style::default().fg(theme.accent))
            } else {
                Span::raw("  ")
            };
            chunk
                .into_iter()
                .map(|line| {
                    let mut spans = vec![marker.clone()];
                    spans.extend(line.spans);
                    Line::from(spans)
                })
                .collect()
        };

        if feed.posts().is_empty() {
            lines.push(Line::styled(
                "  Nenhuma publicação por aqui.",
                Style::default().fg(theme.muted),
            ));
            return (lines, None);
        }

        for (index, state) in feed.posts().iter().enumerate() {
            if index > 0 {
                lines.push(Line::styled(
                    format!("  {}", "─".repeat(width)),
                    Style::default().fg(theme.border),
                ));
            }

            lines.extend(gutter(post_view::render(state.post(), theme, width, now), false));
            lines.push(Line::raw(""));

            let composer_selected = selected == Some(FeedTarget::Composer { post: index });
            let view = composer::ComposerView {
                selected: composer_selected,
                editing: composer_selected && self.editing,
            };
            let start = lines.len();
            lines.extend(gutter(
                composer::render(state.draft(), view, theme, width),
                composer_selected,
            ));
            if composer_selected {
                range = Some((start, lines.len()));
            }

            for comment in state.comments() {
                lines.push(Line::raw(""));
                let comment_selected = selected
                    == Some(FeedTarget::Comment {
                        post: index,
                        id: comment.id(),
                    });
                let start = lines.len();
                lines.extend(gutter(
                    comment_item::render(
                        comment,
                        &self.author,
                        comment_selected,
                        theme,
                        width,
                        now,
                    ),
                    comment_selected,
                ));
                if comment_selected {
                    range = Some((start, lines.len()));
                }
            }
            lines.push(Line::raw(""));
        }

        (lines, range)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for FeedPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Feed
    }
}

impl Scrollable for FeedPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for FeedPanel {
    fn selected_index(&self) -> Option<usize> {
        (!self.targets.is_empty()).then_some(self.cursor)
    }

    fn select(&mut self, index: usize) {
        self.cursor = index.min(self.targets.len().saturating_sub(1));
        self.editing = false;
        self.reveal_cursor = true;
    }

    fn item_count(&self) -> usize {
        self.targets.len()
    }
}

impl Copyable for FeedPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_comment
            .as_ref()
            .map(|c| comment_item::readable(c, &self.author))
    }

    fn copy_data(&self) -> Option<String> {
        self.selected_comment
            .as_ref()
            .and_then(|c| serde_json::to_string(c).ok())
    }

    fn copy_description(&self) -> String {
        "comentário".to_string()
    }
}

impl Interactive for FeedPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.step(-1);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step(1);
                Handled::Yes
            }
            KeyCode::Char('g') => {
                self.select_first();
                Handled::Yes
            }
            KeyCode::Char('G') => {
                self.select_last();
                Handled::Yes
            }
            _ => self.handle_scroll_keys(key),
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.selected() {
            Some(FeedTarget::Composer { .. }) => Some("↑↓:navegar  Enter:escrever"),
            Some(FeedTarget::Comment { .. }) => {
                Some("↑↓:navegar  a:aplaudir  d:excluir  Enter:detalhes  y:copiar")
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::sample_feed;
    use crate::feed::PostMsg;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn panel_for(feed: &Feed) -> FeedPanel {
        let mut panel = FeedPanel::new(Identity::default());
        panel.sync(feed);
        panel
    }

    #[test]
    fn targets_list_composer_before_comments() {
        let mut feed = sample_feed(Utc::now());
        feed.dispatch(0, PostMsg::DraftChanged("Show!".to_string()));
        feed.dispatch(0, PostMsg::Submit);

        let targets = targets(&feed);
        let first_post: Vec<_> = targets.iter().filter(|t| t.post() == 0).collect();

        assert!(matches!(first_post[0], FeedTarget::Composer { post: 0 }));
        assert_eq!(first_post.len(), 3); // composer, placeholder, new comment
        assert!(matches!(
            targets.last(),
            Some(FeedTarget::Comment { post: 1, .. })
        ));
    }

    #[test]
    fn cursor_moves_and_stays_in_bounds() {
        let feed = sample_feed(Utc::now());
        let mut panel = panel_for(&feed);

        assert_eq!(panel.selected(), Some(FeedTarget::Composer { post: 0 }));

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected_index(), Some(0));

        panel.handle_key(key(KeyCode::Char('j')));
        assert!(matches!(
            panel.selected(),
            Some(FeedTarget::Comment { post: 0, .. })
        ));

        panel.handle_key(key(KeyCode::Char('G')));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected_index(), Some(panel.item_count() - 1));
    }

    #[test]
    fn sync_clamps_cursor_after_delete() {
        let mut feed = sample_feed(Utc::now());
        let mut panel = panel_for(&feed);
        panel.select_last();

        let Some(FeedTarget::Comment { post, id }) = panel.selected() else {
            panic!("expected a comment at the end of the feed");
        };
        feed.dispatch(post, PostMsg::DeleteRequested { id });
        panel.sync(&feed);

        assert_eq!(panel.selected(), Some(FeedTarget::Composer { post: 1 }));
        assert!(panel.selected_comment().is_none());
    }

    #[test]
    fn editing_only_on_composers() {
        let feed = sample_feed(Utc::now());
        let mut panel = panel_for(&feed);

        assert!(panel.start_editing());
        assert!(panel.is_editing());

        // Moving the cursor leaves compose mode
        panel.step(1);
        assert!(!panel.is_editing());
        assert!(!panel.start_editing());
    }

    #[test]
    fn copy_uses_selected_comment() {
        let mut feed = sample_feed(Utc::now());
        feed.dispatch(0, PostMsg::DraftChanged("Excelente!".to_string()));
        feed.dispatch(0, PostMsg::Submit);

        let mut panel = panel_for(&feed);
        assert!(panel.copy_text().is_none());

        panel.select(2);
        panel.sync(&feed);

        assert!(panel.copy_text().unwrap().contains("Excelente!"));
        let json: serde_json::Value = serde_json::from_str(&panel.copy_data().unwrap()).unwrap();
        assert_eq!(json["content"], "Excelente!");
        assert_eq!(json["likes"], 0);
    }
}
