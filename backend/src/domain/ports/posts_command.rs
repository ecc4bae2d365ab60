//! Driving port for creating and editing posts.

use async_trait::async_trait;

use crate::domain::{Error, NewPost, Post, PostEdit, PostId};

/// Use-case port for post writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Create a post upstream and return it with its author resolved.
    /// A new post carries no comments.
    async fn create_post(&self, post: NewPost) -> Result<Post, Error>;

    /// Replace title and body upstream, then return the post with its author
    /// and comments, shaped like [`super::PostsQuery::get_post`].
    async fn edit_post(&self, id: PostId, edit: PostEdit) -> Result<Post, Error>;
}
