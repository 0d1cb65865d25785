// TUI application state
//
// App owns the feed and the panels, and turns key actions into feed
// messages. Every feed mutation goes through `dispatch`, which applies one
// `PostMsg` to completion, resyncs the cursor, and reports the effect with a
// toast and a log line.

use super::clipboard;
use super::components::feed_panel::{FeedPanel, FeedTarget};
use super::components::logs_panel::LogsPanel;
use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::scroll::FocusablePanel;
use super::traits::{Component, Copyable, Handled, Interactive};
use crate::config::Config;
use crate::feed::{CommentMsg, Effect, Feed, PostMsg};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// Posts with their comment lists and drafts
    pub feed: Feed,

    /// Feed cursor, compose mode and scroll
    pub feed_panel: FeedPanel,

    /// System logs panel (visible when `show_logs`)
    pub logs_panel: LogsPanel,

    /// Log buffer shared with the tracing layer
    pub log_buffer: LogBuffer,

    /// Which panel receives navigation keys
    pub focused: FocusablePanel,

    pub show_logs: bool,

    /// Active modal overlay, if any (captures all input)
    pub modal: Option<Modal>,

    pub toast: Option<Toast>,

    pub theme: Theme,

    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Debounce/repeat behavior for command keys
    input_handler: InputHandler,
}

impl App {
    pub fn new(feed: Feed, log_buffer: LogBuffer, config: &Config) -> Self {
        let theme = Theme::by_name_with_config(
            &config.theme,
            &ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
        );

        let mut feed_panel = FeedPanel::new(config.identity.clone());
        feed_panel.sync(&feed);

        Self {
            feed,
            feed_panel,
            logs_panel: LogsPanel::new(),
            log_buffer,
            focused: FocusablePanel::Feed,
            show_logs: config.show_logs,
            modal: None,
            toast: None,
            theme,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Route a navigation key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Feed => self.feed_panel.handle_key(key),
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    pub fn focus_next(&mut self) {
        self.feed_panel.stop_editing();
        self.focused = self.focused.next(self.show_logs);
        let panel = match self.focused {
            FocusablePanel::Feed => self.feed_panel.id(),
            FocusablePanel::Logs => self.logs_panel.id(),
        };
        tracing::trace!(panel = panel.label(), "Focus changed");
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == FocusablePanel::Logs {
            self.focused = FocusablePanel::Feed;
        }
    }

    /// Key hints for the focused panel
    pub fn focus_hint(&self) -> Option<&'static str> {
        if self.feed_panel.is_editing() {
            return Some("digite seu comentário  Enter:publicar  Esc:sair");
        }
        match self.focused {
            FocusablePanel::Feed => self.feed_panel.focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Feed actions
    // ─────────────────────────────────────────────────────────────

    /// Apply one message to one post and report the outcome
    pub fn dispatch(&mut self, post: usize, msg: PostMsg) -> Effect {
        let effect = self.feed.dispatch(post, msg);
        self.feed_panel.sync(&self.feed);

        match &effect {
            Effect::None => {}
            Effect::Published(id) => {
                tracing::info!(post, comment = %id.short(), "Comment published");
                self.feed_panel.reveal();
                self.show_toast("✓ Comentário publicado");
            }
            Effect::Rejected(e) => {
                tracing::debug!(post, "Submit rejected: {}", e);
                self.show_error_toast(format!("✗ {}", e));
            }
            Effect::Deleted(id) => {
                tracing::info!(post, comment = %id.short(), "Comment deleted");
                self.feed_panel.reveal();
                self.show_toast("✓ Comentário excluído");
            }
            Effect::Applauded { id, likes } => {
                tracing::debug!(post, comment = %id.short(), likes, "Comment applauded");
            }
        }

        effect
    }

    /// Enter compose mode on the selected composer
    pub fn begin_compose(&mut self) -> bool {
        self.focused == FocusablePanel::Feed && self.feed_panel.start_editing()
    }

    fn editing_post(&self) -> Option<usize> {
        match self.feed_panel.selected() {
            Some(FeedTarget::Composer { post }) if self.feed_panel.is_editing() => Some(post),
            _ => None,
        }
    }

    /// Append a typed character to the draft being edited
    pub fn type_char(&mut self, c: char) {
        let Some(post) = self.editing_post() else {
            return;
        };
        let Some(state) = self.feed.post(post) else {
            return;
        };
        let mut text = state.draft().text().to_string();
        text.push(c);
        self.dispatch(post, PostMsg::DraftChanged(text));
    }

    /// Remove the last character of the draft being edited
    pub fn backspace(&mut self) {
        let Some(post) = self.editing_post() else {
            return;
        };
        let Some(state) = self.feed.post(post) else {
            return;
        };
        let mut text = state.draft().text().to_string();
        if text.pop().is_some() {
            self.dispatch(post, PostMsg::DraftChanged(text));
        }
    }

    /// Submit the draft being edited; an empty draft raises the validation message
    pub fn submit_draft(&mut self) {
        let Some(post) = self.editing_post() else {
            return;
        };
        let can_submit = self.feed.post(post).is_some_and(|p| p.can_submit());
        let msg = if can_submit {
            PostMsg::Submit
        } else {
            PostMsg::Invalid
        };
        self.dispatch(post, msg);
    }

    pub fn stop_compose(&mut self) {
        self.feed_panel.stop_editing();
    }

    /// Applaud the comment under the cursor
    pub fn applaud_selected(&mut self) {
        if let Some(FeedTarget::Comment { post, id }) = self.feed_panel.selected() {
            self.dispatch(
                post,
                PostMsg::Comment {
                    id,
                    msg: CommentMsg::Applaud,
                },
            );
        }
    }

    /// Ask the owning post to delete the comment under the cursor
    pub fn delete_selected(&mut self) {
        if let Some(FeedTarget::Comment { post, id }) = self.feed_panel.selected() {
            self.dispatch(
                post,
                PostMsg::Comment {
                    id,
                    msg: CommentMsg::DeleteRequested,
                },
            );
        }
    }

    /// Open the detail modal for the comment under the cursor
    pub fn open_selected_detail(&mut self) {
        if let Some(FeedTarget::Comment { post, id }) = self.feed_panel.selected() {
            self.modal = Some(Modal::comment_detail(post, id));
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────

    /// Readable text of the focused panel's selection
    pub fn copy_current_readable(&self) -> Option<String> {
        match self.focused {
            FocusablePanel::Feed => self.feed_panel.copy_text(),
            FocusablePanel::Logs => self.logs_panel.copy_text(),
        }
    }

    /// JSON of the focused panel's selection
    pub fn copy_current_json(&self) -> Option<String> {
        match self.focused {
            FocusablePanel::Feed => self.feed_panel.copy_data(),
            FocusablePanel::Logs => self.logs_panel.copy_data(),
        }
    }

    /// Copy and confirm with a toast
    pub fn copy_with_toast(&mut self, content: Option<String>, what: &str) {
        let Some(content) = content else {
            self.show_toast("Nada para copiar");
            return;
        };
        match clipboard::copy_to_clipboard(&content) {
            Ok(()) => self.show_toast(format!("✓ {} copiado", what)),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_error_toast("✗ Falha ao copiar");
            }
        }
    }

    /// Copy description for the focused panel
    pub fn copy_description(&self) -> String {
        match self.focused {
            FocusablePanel::Feed => self.feed_panel.copy_description(),
            FocusablePanel::Logs => self.logs_panel.copy_description(),
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::sample_feed;
    use crate::feed::post::REQUIRED_FIELD_MESSAGE;
    use chrono::Utc;

    fn app() -> App {
        App::new(
            sample_feed(Utc::now()),
            LogBuffer::new(),
            &Config::default(),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn typing_outside_compose_mode_is_ignored() {
        let mut app = app();
        type_text(&mut app, "oi");
        assert_eq!(app.feed.posts()[0].draft().text(), "");
    }

    #[test]
    fn compose_and_publish_scenario() {
        let mut app = app();
        assert!(app.begin_compose());

        type_text(&mut app, "Great post!");
        app.submit_draft();
        type_text(&mut app, "Thanks!!");
        app.backspace();
        app.submit_draft();

        let post = &app.feed.posts()[0];
        assert_eq!(post.comment_texts(), vec!["", "Great post!", "Thanks!"]);
        assert_eq!(post.draft().text(), "");
        assert!(app.feed_panel.is_editing());
        assert_eq!(app.toast.as_ref().unwrap().message, "✓ Comentário publicado");
    }

    #[test]
    fn empty_submit_raises_validation() {
        let mut app = app();
        app.begin_compose();
        app.submit_draft();

        let post = &app.feed.posts()[0];
        assert_eq!(post.comment_texts(), vec![""]);
        assert_eq!(post.draft().validity_message(), Some(REQUIRED_FIELD_MESSAGE));
        assert!(app.toast.as_ref().unwrap().is_error);

        // Typing clears the message
        app.type_char('a');
        assert_eq!(app.feed.posts()[0].draft().validity_message(), None);
    }

    #[test]
    fn applaud_and_delete_selected_comment() {
        let mut app = app();
        app.begin_compose();
        type_text(&mut app, "Thanks!");
        app.submit_draft();
        app.stop_compose();

        // composer -> placeholder -> "Thanks!"
        let down = KeyEvent::new(KeyCode::Down, crossterm::event::KeyModifiers::NONE);
        app.dispatch_to_focused(down);
        app.dispatch_to_focused(down);

        app.applaud_selected();
        app.applaud_selected();
        let post = &app.feed.posts()[0];
        assert_eq!(post.comment_texts(), vec!["", "Thanks!"]);
        assert_eq!(post.comments()[1].likes(), 2);
        assert_eq!(post.comments()[0].likes(), 0);

        app.delete_selected();
        assert_eq!(app.feed.posts()[0].comment_texts(), vec![""]);
        assert_eq!(app.toast.as_ref().unwrap().message, "✓ Comentário excluído");
    }

    #[test]
    fn detail_modal_only_for_comments() {
        let mut app = app();
        app.open_selected_detail();
        assert!(app.modal.is_none());

        app.dispatch_to_focused(KeyEvent::new(
            KeyCode::Char('j'),
            crossterm::event::KeyModifiers::NONE,
        ));
        app.open_selected_detail();
        assert!(matches!(app.modal, Some(Modal::CommentDetail { post: 0, .. })));
    }

    #[test]
    fn hiding_logs_returns_focus_to_feed() {
        let mut app = app();
        app.toggle_logs();
        app.focus_next();
        assert!(app.is_focused(FocusablePanel::Logs));

        app.toggle_logs();
        assert!(app.is_focused(FocusablePanel::Feed));
    }
}
