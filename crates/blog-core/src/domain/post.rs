use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned identifier of a post. Monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A path segment that does not spell a post id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid post id `{0}`")]
pub struct InvalidPostId(pub String);

/// Only the canonical decimal form is accepted, so `01` or `+1` never alias post 1.
impl FromStr for PostId {
    type Err = InvalidPostId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => Ok(PostId(n)),
            _ => Err(InvalidPostId(s.to_string())),
        }
    }
}

/// Post entity - a blog post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

/// The caller-supplied part of a post, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}

impl Post {
    /// Create a post from its fields, stamped with the current time.
    pub fn new(id: PostId, fields: NewPost) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            author: fields.author,
            publish_date: Utc::now(),
        }
    }

    /// Overwrite every field except `id` with the values of `other`.
    pub fn replace_with(&mut self, other: Post) {
        self.title = other.title;
        self.content = other.content;
        self.author = other.author;
        self.publish_date = other.publish_date;
    }
}
