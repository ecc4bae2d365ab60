//! Reqwest-backed adapter for the upstream posts/users/comments API.
//!
//! This adapter owns transport details only: URL construction, request
//! serialisation, status and timeout mapping, and JSON decoding into port
//! records. One pooled [`Client`] is built at construction and shared by
//! every call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{
    CommentDto, NewPostBody, NewUserBody, PostDto, PostEditBody, UserDto, into_comments,
};
use crate::domain::ports::{PlaceholderSource, PlaceholderSourceError, PostRecord, UserRecord};
use crate::domain::{Comment, NewPost, NewUser, PostEdit, PostId, TRACE_ID_HEADER, TraceId};

/// `User-Agent` sent upstream when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("post-aggregator/", env!("CARGO_PKG_VERSION"));

/// Upstream source adapter issuing JSON requests against one base URL.
pub struct PlaceholderHttpSource {
    client: Client,
    base_url: Url,
}

impl PlaceholderHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(base_url, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter that identifies itself with `user_agent`.
    ///
    /// A base URL without a trailing slash is treated as a directory, so
    /// `https://host/api` and `https://host/api/` resolve `posts` to the same
    /// `https://host/api/posts`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        mut base_url: Url,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn request(
        &self,
        method: Method,
        resource: &str,
    ) -> Result<RequestBuilder, PlaceholderSourceError> {
        let url = self.base_url.join(resource).map_err(|error| {
            PlaceholderSourceError::transport(format!(
                "invalid upstream URL for {resource}: {error}"
            ))
        })?;
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        Ok(match TraceId::current() {
            Some(trace_id) => builder.header(TRACE_ID_HEADER, trace_id.to_string()),
            None => builder,
        })
    }

    /// Send `request`, check the status and decode the JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, PlaceholderSourceError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(resource, status = status.as_u16(), bytes = body.len(), "upstream response");

        if status == StatusCode::NOT_FOUND {
            return Err(PlaceholderSourceError::not_found(format!("/{resource}")));
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        decode(body.as_ref(), resource)
    }
}

#[async_trait]
impl PlaceholderSource for PlaceholderHttpSource {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, PlaceholderSourceError> {
        let request = self.request(Method::GET, "posts")?;
        let posts: Vec<PostDto> = self.execute(request, "posts").await?;
        posts
            .into_iter()
            .map(PostDto::into_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(PlaceholderSourceError::decode)
    }

    async fn fetch_post(&self, id: PostId) -> Result<PostRecord, PlaceholderSourceError> {
        let resource = format!("posts/{id}");
        let request = self.request(Method::GET, &resource)?;
        let post: PostDto = self.execute(request, &resource).await?;
        post.into_record().map_err(PlaceholderSourceError::decode)
    }

    async fn create_post(&self, post: &NewPost) -> Result<PostRecord, PlaceholderSourceError> {
        let request = self
            .request(Method::POST, "posts")?
            .json(&NewPostBody::from(post));
        let created: PostDto = self.execute(request, "posts").await?;
        created.into_record().map_err(PlaceholderSourceError::decode)
    }

    async fn patch_post(
        &self,
        id: PostId,
        edit: &PostEdit,
    ) -> Result<PostRecord, PlaceholderSourceError> {
        let resource = format!("posts/{id}");
        let request = self
            .request(Method::PATCH, &resource)?
            .json(&PostEditBody::from(edit));
        let patched: PostDto = self.execute(request, &resource).await?;
        patched.into_record().map_err(PlaceholderSourceError::decode)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, PlaceholderSourceError> {
        let request = self.request(Method::GET, "users")?;
        let users: Vec<UserDto> = self.execute(request, "users").await?;
        Ok(users.into_iter().map(UserRecord::from).collect())
    }

    async fn fetch_user(&self, id: u64) -> Result<UserRecord, PlaceholderSourceError> {
        let resource = format!("users/{id}");
        let request = self.request(Method::GET, &resource)?;
        let user: UserDto = self.execute(request, &resource).await?;
        Ok(user.into())
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, PlaceholderSourceError> {
        let request = self
            .request(Method::POST, "users")?
            .json(&NewUserBody::from(user));
        let created: UserDto = self.execute(request, "users").await?;
        Ok(created.into())
    }

    async fn list_comments(
        &self,
        post_id: PostId,
    ) -> Result<Vec<Comment>, PlaceholderSourceError> {
        let request = self
            .request(Method::GET, "comments")?
            .query(&[("postId", post_id.get())]);
        let comments: Vec<CommentDto> = self.execute(request, "comments").await?;
        Ok(into_comments(comments))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], resource: &str) -> Result<T, PlaceholderSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        PlaceholderSourceError::decode(format!("invalid JSON from /{resource}: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> PlaceholderSourceError {
    if error.is_timeout() {
        PlaceholderSourceError::timeout(error.to_string())
    } else {
        PlaceholderSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PlaceholderSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PlaceholderSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => PlaceholderSourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests;
