//! Read-only post data assembled once when the feed is built.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Who wrote a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    /// Avatar reference (usually an image URL); shown in detail views only
    pub avatar_url: String,
}

/// One block of post content
///
/// Serialized adjacently tagged, matching the feed file format:
/// `{ type = "paragraph", content = "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph(String),
    Link(String),
}

#[cfg(test)]
impl ContentBlock {
    pub fn is_link(&self) -> bool {
        matches!(self, ContentBlock::Link(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Paragraph(t) | ContentBlock::Link(t) => t,
        }
    }
}

/// A published post. Content order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub author: Author,
    pub published_at: DateTime<FixedOffset>,
    pub content: Vec<ContentBlock>,
}
