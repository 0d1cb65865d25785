// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::feed::CommentId;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Applaud the comment being viewed
    Applaud,
    /// Delete the comment being viewed (closes the modal)
    Delete,
    /// Copy content (readable format)
    CopyReadable,
    /// Copy content (JSON format)
    CopyJson,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Full view of one comment, including the author's avatar reference
    CommentDetail { post: usize, id: CommentId },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn comment_detail(post: usize, id: CommentId) -> Self {
        Modal::CommentDetail { post, id }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::CommentDetail { .. } => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Char('a') | KeyCode::Char(' ') => ModalAction::Applaud,
                KeyCode::Char('d') | KeyCode::Delete => ModalAction::Delete,
                KeyCode::Char('y') => ModalAction::CopyReadable,
                KeyCode::Char('Y') => ModalAction::CopyJson,
                _ => ModalAction::None,
            },
        }
    }

    /// The comment this modal shows, if any
    pub fn comment(&self) -> Option<(usize, CommentId)> {
        match self {
            Modal::CommentDetail { post, id } => Some((*post, *id)),
            Modal::Help => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_question_mark() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('a')), ModalAction::None);
        assert_eq!(modal.comment(), None);
    }

    #[test]
    fn comment_detail_actions() {
        let id = CommentId::new();
        let mut modal = Modal::comment_detail(1, id);
        assert_eq!(modal.comment(), Some((1, id)));
        assert_eq!(modal.handle_input(KeyCode::Char('a')), ModalAction::Applaud);
        assert_eq!(modal.handle_input(KeyCode::Delete), ModalAction::Delete);
        assert_eq!(modal.handle_input(KeyCode::Char('Y')), ModalAction::CopyJson);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
    }
}
