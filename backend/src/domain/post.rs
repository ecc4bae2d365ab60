//! Post aggregate: an upstream post enriched with its author and comments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream identifier of a post. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PostId(u64);

/// Reasons a post identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostIdError {
    /// The identifier was zero.
    #[error("post id must be a positive integer")]
    Zero,
    /// The identifier was not an unsigned integer.
    #[error("post id must be a positive integer, got {0:?}")]
    NotNumeric(String),
}

impl PostId {
    /// Validate a raw upstream identifier.
    pub fn new(raw: u64) -> Result<Self, PostIdError> {
        if raw == 0 {
            return Err(PostIdError::Zero);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for PostId {
    type Error = PostIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostId> for u64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl FromStr for PostId {
    type Err = PostIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<u64>()
            .map_err(|_| PostIdError::NotNumeric(s.to_owned()))?;
        Self::new(raw)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The three author fields embedded in every [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Upstream user identifier.
    pub id: u64,
    /// Author's name as recorded upstream.
    pub name: String,
    /// Author's email as recorded upstream.
    pub email: String,
}

/// A comment exactly as the upstream API returned it.
///
/// Comments are not modelled beyond being attached to a post, so the object
/// is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(Map<String, Value>);

impl Comment {
    /// Wrap an upstream JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up one upstream field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Fully assembled post.
///
/// ## Invariants
/// - `user` is always resolved; a bare `userId` never leaves the service.
/// - `comments` is `Some` for single/edit results and `None` for list/create
///   results. It serialises as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Upstream identifier.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Embedded author summary.
    pub user: AuthorSummary,
    /// Comments attached to the post, when the operation includes them.
    pub comments: Option<Vec<Comment>>,
}

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Title of the new post.
    pub title: String,
    /// Body of the new post.
    pub body: String,
    /// Upstream id of the author.
    pub author_id: u64,
}

/// Replacement title and body for an existing post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEdit {
    /// New title.
    pub title: String,
    /// New body.
    pub body: String,
}
