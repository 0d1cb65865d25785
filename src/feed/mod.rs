// Feed module - posts and their comment state machines
//
// This module is independent of any rendering. It owns:
// - model: read-only post data (author, timestamp, content blocks)
// - post: per-post state (comment list + draft) and its reducer
// - comment: per-comment state (applause counter) and its messages
// - source: feed assembly from a TOML file or the built-in sample
// - time: pt-BR date presentation

pub mod comment;
pub mod model;
pub mod post;
pub mod source;
pub mod time;

pub use comment::{CommentId, CommentMsg, CommentState};
pub use model::{ContentBlock, Post};
pub use post::{Effect, PostMsg, PostState};

/// All mounted posts, in display order
#[derive(Debug, Clone, Default)]
pub struct Feed {
    posts: Vec<PostState>,
}

impl Feed {
    /// Mount every post (each gets its own comment list and draft)
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into_iter().map(PostState::new).collect(),
        }
    }

    pub fn posts(&self) -> &[PostState] {
        &self.posts
    }

    pub fn post(&self, index: usize) -> Option<&PostState> {
        self.posts.get(index)
    }

    #[cfg(test)]
    pub fn post_mut(&mut self, index: usize) -> Option<&mut PostState> {
        self.posts.get_mut(index)
    }

    /// Route a message to one post. Unknown indexes are ignored.
    pub fn dispatch(&mut self, index: usize, msg: PostMsg) -> Effect {
        match self.posts.get_mut(index) {
            Some(post) => post.update(msg),
            None => {
                tracing::warn!("Message for unknown post {} dropped", index);
                Effect::None
            }
        }
    }

    /// Comments across all posts (placeholders included)
    pub fn total_comments(&self) -> usize {
        self.posts.iter().map(|p| p.comments().len()).sum()
    }

    /// Applause across all comments
    pub fn total_applause(&self) -> u64 {
        self.posts
            .iter()
            .flat_map(|p| p.comments())
            .map(|c| c.likes() as u64)
            .sum()
    }
}
