//! Driving port for reading assembled posts.
//!
//! HTTP handlers depend on this trait rather than on the aggregation service
//! so they can be exercised with a mock and no upstream traffic.

use async_trait::async_trait;

use crate::domain::{Error, Post, PostId};

/// Use-case port for post reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Every upstream post with its author resolved, in upstream order.
    /// Comments are never attached.
    async fn list_posts(&self) -> Result<Vec<Post>, Error>;

    /// One post with its author resolved and its comments attached.
    async fn get_post(&self, id: PostId) -> Result<Post, Error>;
}
