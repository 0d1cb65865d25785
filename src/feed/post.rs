//! Post state machine
//!
//! A post owns its comment list and the pending draft. All mutation goes
//! through [`PostState::update`] so the view layer only ever emits messages.
//!
//! ```text
//!   draft empty ──DraftChanged(non-empty)──▶ draft non-empty
//!        ▲                                        │
//!        └──────────── Submit (append) ◀──────────┘
//! ```

use super::comment::{CommentId, CommentMsg, CommentState};
use super::model::Post;
use std::fmt;

/// Message shown when submitting an empty comment
pub const REQUIRED_FIELD_MESSAGE: &str = "Este campo é obrigatório!";

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyDraft,
}

impl SubmitError {
    /// User-facing validation text
    pub fn message(&self) -> &'static str {
        match self {
            SubmitError::EmptyDraft => REQUIRED_FIELD_MESSAGE,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SubmitError {}

/// Text typed but not yet published
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    validity: Option<&'static str>,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Validation message raised by the last refused submit, cleared on edit
    pub fn validity_message(&self) -> Option<&'static str> {
        self.validity
    }
}

/// Messages a post understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostMsg {
    /// Replace the draft text (every keystroke)
    DraftChanged(String),
    /// Publish the draft as a new comment
    Submit,
    /// Submission blocked by the required-field check
    Invalid,
    /// A comment asked to be removed
    DeleteRequested { id: CommentId },
    /// Route a message to one comment
    Comment { id: CommentId, msg: CommentMsg },
}

/// What an update did, for the view layer to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Published(CommentId),
    Rejected(SubmitError),
    Deleted(CommentId),
    Applauded { id: CommentId, likes: u32 },
}

/// State record for one post in the feed
#[derive(Debug, Clone)]
pub struct PostState {
    post: Post,
    comments: Vec<CommentState>,
    draft: Draft,
}

impl PostState {
    /// Mount a post. The comment list starts with one empty placeholder entry.
    pub fn new(post: Post) -> Self {
        Self {
            post,
            comments: vec![CommentState::new("")],
            draft: Draft::default(),
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn comments(&self) -> &[CommentState] {
        &self.comments
    }

    pub fn comment(&self, id: CommentId) -> Option<&CommentState> {
        self.comments.iter().find(|c| c.id() == id)
    }

    #[cfg(test)]
    pub fn comment_texts(&self) -> Vec<&str> {
        self.comments.iter().map(|c| c.content()).collect()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Submit is enabled only for a non-empty draft
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Replace the draft text and clear any validation message
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
        self.draft.validity = None;
    }

    /// Raise the required-field message without touching the list
    pub fn invalid(&mut self) {
        self.draft.validity = Some(REQUIRED_FIELD_MESSAGE);
    }

    /// Append the draft to the end of the list and reset it
    pub fn submit(&mut self) -> Result<CommentId, SubmitError> {
        if self.draft.is_empty() {
            self.invalid();
            return Err(SubmitError::EmptyDraft);
        }

        let text = std::mem::take(&mut self.draft.text);
        let comment = CommentState::new(text);
        let id = comment.id();
        self.comments.push(comment);
        self.draft.validity = None;

        tracing::debug!(comment = %id.short(), total = self.comments.len(), "Comment published");
        Ok(id)
    }

    /// Remove the comment with this id. Absent ids are a no-op.
    pub fn delete(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id() != id);
        let removed = self.comments.len() != before;
        if removed {
            tracing::debug!(comment = %id.short(), "Comment deleted");
        }
        removed
    }

    /// Remove every comment whose text equals `text`, keeping the rest in order.
    /// Returns how many were removed.
    #[allow(dead_code)] // value-based delete for library callers; the UI deletes by id
    pub fn delete_matching(&mut self, text: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|c| c.content() != text);
        let removed = before - self.comments.len();
        if removed > 0 {
            tracing::debug!(removed, "Comments deleted by text");
        }
        removed
    }

    /// Apply a message and report what happened
    pub fn update(&mut self, msg: PostMsg) -> Effect {
        match msg {
            PostMsg::DraftChanged(text) => {
                self.edit_draft(text);
                Effect::None
            }
            PostMsg::Submit => match self.submit() {
                Ok(id) => Effect::Published(id),
                Err(e) => Effect::Rejected(e),
            },
            PostMsg::Invalid => {
                self.invalid();
                Effect::Rejected(SubmitError::EmptyDraft)
            }
            PostMsg::DeleteRequested { id } => {
                if self.delete(id) {
                    Effect::Deleted(id)
                } else {
                    Effect::None
                }
            }
            PostMsg::Comment { id, msg } => {
                let Some(comment) = self.comments.iter_mut().find(|c| c.id() == id) else {
                    return Effect::None;
                };
                match comment.update(msg) {
                    Some(request) => self.update(request),
                    None => Effect::Applauded {
                        id,
                        likes: comment.likes(),
                    },
                }
            }
        }
    }
}
