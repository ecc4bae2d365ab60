//! Posts API handlers.
//!
//! ```text
//! GET   /posts/            every post, authors resolved, no comments
//! POST  /posts/new         {"title":"..","body":"..","userId":1} -> 201
//! GET   /posts/{id}        one post with comments
//! PATCH /posts/{id}/edit   {"title":"..","body":".."}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::{NewPost, Post, PostEdit, PostId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PostSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, field_error, invalid_post_id};

const AUTHOR_ID_FIELD: FieldName = FieldName::new("userId");

/// Request body for `POST /posts/new`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[schema(example = "Test title")]
    pub title: String,
    #[schema(example = "Test body")]
    pub body: String,
    /// Upstream id of the author.
    #[schema(example = 1)]
    pub user_id: u64,
}

impl TryFrom<CreatePostRequest> for NewPost {
    type Error = crate::domain::Error;

    fn try_from(value: CreatePostRequest) -> Result<Self, Self::Error> {
        if value.user_id == 0 {
            return Err(field_error(
                AUTHOR_ID_FIELD,
                "author_id_zero",
                "userId must be a positive integer",
            ));
        }
        Ok(Self {
            title: value.title,
            body: value.body,
            author_id: value.user_id,
        })
    }
}

/// Request body for `PATCH /posts/{id}/edit`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct EditPostRequest {
    #[schema(example = "Edited Title")]
    pub title: String,
    #[schema(example = "Edited body")]
    pub body: String,
}

impl From<EditPostRequest> for PostEdit {
    fn from(value: EditPostRequest) -> Self {
        Self {
            title: value.title,
            body: value.body,
        }
    }
}

fn parse_post_id(raw: &str) -> ApiResult<PostId> {
    raw.parse().map_err(|err| invalid_post_id(raw, &err))
}

/// List every post with its author resolved.
#[utoipa::path(
    get,
    path = "/posts/",
    responses(
        (status = 200, description = "Posts in upstream order", body = [PostSchema]),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
pub async fn list_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Post>>> {
    let posts = state.posts.list_posts().await?;
    Ok(web::Json(posts))
}

/// Create a post upstream and return it with its author resolved.
#[utoipa::path(
    post,
    path = "/posts/new",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Created post, without comments", body = PostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let new_post = NewPost::try_from(payload.into_inner())?;
    let post = state.posts_command.create_post(new_post).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Fetch one post with its author and comments.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = u64, Path, description = "Upstream post identifier")),
    responses(
        (status = 200, description = "Post with comments", body = PostSchema),
        (status = 400, description = "Invalid post id", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Post>> {
    let id = parse_post_id(&path.into_inner())?;
    let post = state.posts.get_post(id).await?;
    Ok(web::Json(post))
}

/// Replace a post's title and body, then return it with author and comments.
#[utoipa::path(
    patch,
    path = "/posts/{id}/edit",
    params(("id" = u64, Path, description = "Upstream post identifier")),
    request_body = EditPostRequest,
    responses(
        (status = 200, description = "Edited post with comments", body = PostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "editPost"
)]
pub async fn edit_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EditPostRequest>,
) -> ApiResult<web::Json<Post>> {
    let id = parse_post_id(&path.into_inner())?;
    let post = state
        .posts_command
        .edit_post(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(post))
}

/// Register the posts routes, including the slash-less listing alias.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/posts").route(web::get().to(list_posts)))
        .service(
            web::scope("/posts")
                .route("/", web::get().to(list_posts))
                .route("/new", web::post().to(create_post))
                .route("/{id}", web::get().to(get_post))
                .route("/{id}/edit", web::patch().to(edit_post)),
        );
}
