//! Comment item state
//!
//! Each comment record owns its own applause counter. The record is keyed by
//! an opaque id assigned at creation, so removing or adding other comments
//! never resets this counter.

use super::post::PostMsg;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, unique identifier for a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 hex chars, enough to tell comments apart in logs
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requests a comment item can handle or emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentMsg {
    /// Increment the applause counter by one
    Applaud,
    /// Ask the owning post to remove this comment
    DeleteRequested,
}

/// One rendered comment: text plus its local applause counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentState {
    id: CommentId,
    content: String,
    likes: u32,
    created_at: DateTime<Utc>,
}

impl CommentState {
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_time(content, Utc::now())
    }

    pub fn with_time(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: CommentId::new(),
            content: content.into(),
            likes: 0,
            created_at,
        }
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Add one applause. Saturates instead of wrapping.
    pub fn applaud(&mut self) -> u32 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }

    /// Build the deletion request for the parent. Mutates nothing here.
    pub fn request_delete(&self) -> PostMsg {
        PostMsg::DeleteRequested { id: self.id }
    }

    /// Apply a message; returns a request the parent must handle, if any
    pub fn update(&mut self, msg: CommentMsg) -> Option<PostMsg> {
        match msg {
            CommentMsg::Applaud => {
                self.applaud();
                None
            }
            CommentMsg::DeleteRequested => Some(self.request_delete()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applaud_n_times_yields_n() {
        let mut comment = CommentState::new("Thanks!");
        for _ in 0..5 {
            comment.applaud();
        }
        assert_eq!(comment.likes(), 5);
    }

    #[test]
    fn applaud_is_local_to_one_instance() {
        let mut a = CommentState::new("same");
        let b = CommentState::new("same");
        a.update(CommentMsg::Applaud);
        a.update(CommentMsg::Applaud);
        assert_eq!(a.likes(), 2);
        assert_eq!(b.likes(), 0);
    }

    #[test]
    fn applaud_saturates() {
        let mut comment = CommentState::new("x");
        comment.likes = u32::MAX;
        assert_eq!(comment.applaud(), u32::MAX);
    }

    #[test]
    fn delete_request_carries_own_id_and_mutates_nothing() {
        let mut comment = CommentState::new("bye");
        comment.applaud();
        let before = comment.clone();

        let request = comment.update(CommentMsg::DeleteRequested);

        assert_eq!(request, Some(PostMsg::DeleteRequested { id: comment.id() }));
        assert_eq!(comment, before);
    }

    #[test]
    fn ids_are_unique_even_for_equal_text() {
        let a = CommentState::new("dup");
        let b = CommentState::new("dup");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id().short().len(), 8);
    }
}
