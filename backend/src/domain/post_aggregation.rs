//! Post aggregator: composes upstream posts, users and comments.
//!
//! Every operation is a short chain of dependent upstream calls. Any failing
//! call fails the whole operation; nothing is retried and partial posts are
//! never returned.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt, future, stream};
use tracing::debug;

use super::ports::{PlaceholderSource, PostRecord, PostsCommand, PostsQuery};
use super::source_errors::{Lookup, map_source_error};
use super::{AuthorSummary, Comment, Error, NewPost, Post, PostEdit, PostId};

/// Upper bound on author lookups in flight during one `list_posts` call.
const AUTHOR_LOOKUP_CONCURRENCY: usize = 8;

/// Aggregation service behind the posts endpoints.
#[derive(Clone)]
pub struct PostAggregationService {
    source: Arc<dyn PlaceholderSource>,
}

impl PostAggregationService {
    /// Build the service over an upstream source.
    pub fn new(source: Arc<dyn PlaceholderSource>) -> Self {
        Self { source }
    }

    /// Fetch one user and keep only `{id, name, email}`.
    async fn resolve_author(&self, user_id: u64) -> Result<AuthorSummary, Error> {
        let user = self
            .source
            .fetch_user(user_id)
            .await
            .map_err(|error| map_source_error(error, Lookup::Dependent))?;
        Ok(AuthorSummary {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    async fn comments_for(&self, post_id: PostId) -> Result<Vec<Comment>, Error> {
        self.source
            .list_comments(post_id)
            .await
            .map_err(|error| map_source_error(error, Lookup::Dependent))
    }

    /// Resolve the author of `record` and attach the comments of `comments_of`.
    /// The two lookups do not depend on each other and run together.
    async fn assemble_detailed(
        &self,
        record: PostRecord,
        comments_of: PostId,
    ) -> Result<Post, Error> {
        let (author, comments) = future::try_join(
            self.resolve_author(record.user_id),
            self.comments_for(comments_of),
        )
        .await?;
        Ok(assemble(record, author, Some(comments)))
    }
}

fn assemble(record: PostRecord, user: AuthorSummary, comments: Option<Vec<Comment>>) -> Post {
    let PostRecord {
        id, title, body, ..
    } = record;
    Post {
        id,
        title,
        body,
        user,
        comments,
    }
}

#[async_trait]
impl PostsQuery for PostAggregationService {
    async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        let records = self
            .source
            .list_posts()
            .await
            .map_err(|error| map_source_error(error, Lookup::Dependent))?;

        // Many posts share an author; look each author up once per call.
        let mut author_ids: Vec<u64> = records.iter().map(|record| record.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: Vec<AuthorSummary> = stream::iter(author_ids.iter().copied())
            .map(|user_id| self.resolve_author(user_id))
            .buffered(AUTHOR_LOOKUP_CONCURRENCY)
            .try_collect()
            .await?;
        let by_id: HashMap<u64, AuthorSummary> = author_ids.into_iter().zip(authors).collect();

        debug!(posts = records.len(), authors = by_id.len(), "assembling post list");
        records
            .into_iter()
            .map(|record| {
                let author = by_id.get(&record.user_id).cloned().ok_or_else(|| {
                    Error::internal(format!("author {} was not resolved", record.user_id))
                })?;
                Ok(assemble(record, author, None))
            })
            .collect()
    }

    async fn get_post(&self, id: PostId) -> Result<Post, Error> {
        let record = self
            .source
            .fetch_post(id)
            .await
            .map_err(|error| map_source_error(error, Lookup::Post(id)))?;
        self.assemble_detailed(record, id).await
    }
}

#[async_trait]
impl PostsCommand for PostAggregationService {
    async fn create_post(&self, post: NewPost) -> Result<Post, Error> {
        let record = self
            .source
            .create_post(&post)
            .await
            .map_err(|error| map_source_error(error, Lookup::Dependent))?;
        debug!(post_id = %record.id, "post created upstream");
        let author = self.resolve_author(record.user_id).await?;
        Ok(assemble(record, author, None))
    }

    async fn edit_post(&self, id: PostId, edit: PostEdit) -> Result<Post, Error> {
        let record = self
            .source
            .patch_post(id, &edit)
            .await
            .map_err(|error| map_source_error(error, Lookup::Post(id)))?;
        self.assemble_detailed(record, id).await
    }
}
