//! Wire shapes of the upstream API.
//!
//! Responses are decoded into these DTOs first and then mapped into the
//! port's records in one pass. Unknown upstream fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ports::{PostRecord, UserRecord};
use crate::domain::{Comment, NewPost, NewUser, PostEdit, PostId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDto {
    pub(super) id: u64,
    pub(super) title: String,
    pub(super) body: String,
    pub(super) user_id: u64,
}

impl PostDto {
    pub(super) fn into_record(self) -> Result<PostRecord, String> {
        let id = PostId::new(self.id).map_err(|err| format!("post record: {err}"))?;
        Ok(PostRecord {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) username: String,
    pub(super) email: String,
    pub(super) phone: String,
}

impl From<UserDto> for UserRecord {
    fn from(value: UserDto) -> Self {
        let UserDto {
            id,
            name,
            username,
            email,
            phone,
        } = value;
        Self {
            id,
            name,
            username,
            email,
            phone,
        }
    }
}

/// Comments are JSON objects carried through as-is.
pub(super) type CommentDto = Map<String, Value>;

pub(super) fn into_comments(raw: Vec<CommentDto>) -> Vec<Comment> {
    raw.into_iter().map(Comment::new).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewPostBody<'a> {
    title: &'a str,
    body: &'a str,
    user_id: u64,
}

impl<'a> From<&'a NewPost> for NewPostBody<'a> {
    fn from(value: &'a NewPost) -> Self {
        Self {
            title: &value.title,
            body: &value.body,
            user_id: value.author_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct PostEditBody<'a> {
    title: &'a str,
    body: &'a str,
}

impl<'a> From<&'a PostEdit> for PostEditBody<'a> {
    fn from(value: &'a PostEdit) -> Self {
        Self {
            title: &value.title,
            body: &value.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewUserBody<'a> {
    name: &'a str,
    username: &'a str,
    email: &'a str,
    phone: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserBody<'a> {
    fn from(value: &'a NewUser) -> Self {
        Self {
            name: value.name.as_ref(),
            username: value.username.as_ref(),
            email: value.email.as_ref(),
            phone: value.phone.as_ref(),
        }
    }
}
