//! Driven port for the upstream posts/users/comments API.
//!
//! The domain owns the record shapes and the error contract so the
//! aggregation services stay independent of the HTTP client in use.

use async_trait::async_trait;

use crate::domain::{Comment, NewPost, NewUser, PostEdit, PostId};

/// A post as stored upstream, before author resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Upstream identifier.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// Numeric reference to the author in the users resource.
    pub user_id: u64,
}

/// A user as stored upstream, before local validation.
///
/// Fields beyond these five (address, company, website) are dropped by the
/// adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Upstream identifier.
    pub id: u64,
    /// Name as recorded upstream.
    pub name: String,
    /// Account handle.
    pub username: String,
    /// Email as recorded upstream.
    pub email: String,
    /// Phone as recorded upstream.
    pub phone: String,
}

/// Errors surfaced while calling the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceholderSourceError {
    /// The request never produced a response.
    #[error("upstream transport failed: {message}")]
    Transport {
        /// Client error description.
        message: String,
    },
    /// The upstream call exceeded the client timeout.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Client error description.
        message: String,
    },
    /// The upstream API answered 404.
    #[error("upstream resource not found: {resource}")]
    NotFound {
        /// Path of the missing resource.
        resource: String,
    },
    /// The upstream API answered with another non-success status.
    #[error("upstream returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Compact preview of the response body.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("upstream response decode failed: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
}

impl PlaceholderSourceError {
    /// Build a [`Self::Transport`] error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`Self::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`Self::NotFound`] error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Build a [`Self::Status`] error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Build a [`Self::Decode`] error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the upstream posts, users and comments resources.
///
/// Every method maps to exactly one upstream request; there are no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceholderSource: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<PostRecord>, PlaceholderSourceError>;

    /// `GET /posts/{id}`
    async fn fetch_post(&self, id: PostId) -> Result<PostRecord, PlaceholderSourceError>;

    /// `POST /posts`
    async fn create_post(&self, post: &NewPost) -> Result<PostRecord, PlaceholderSourceError>;

    /// `PATCH /posts/{id}` with title and body only.
    async fn patch_post(
        &self,
        id: PostId,
        edit: &PostEdit,
    ) -> Result<PostRecord, PlaceholderSourceError>;

    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<UserRecord>, PlaceholderSourceError>;

    /// `GET /users/{id}`
    async fn fetch_user(&self, id: u64) -> Result<UserRecord, PlaceholderSourceError>;

    /// `POST /users`
    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, PlaceholderSourceError>;

    /// `GET /comments?postId={id}`, in upstream order.
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, PlaceholderSourceError>;
}
