//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. The
//! document is served at `/api-docs/openapi.json` behind the Swagger UI at
//! `/docs/`, and printed by the `openapi-dump` binary.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::inbound::http::posts::{CreatePostRequest, EditPostRequest};
use crate::inbound::http::schemas::{
    AuthorSummarySchema, ErrorCodeSchema, ErrorSchema, PostSchema, UserSchema,
};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post aggregator API",
        description = "Posts enriched with their author and comments, and validated users, assembled from an upstream JSON API."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::edit_post,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PostSchema,
        AuthorSummarySchema,
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreatePostRequest,
        EditPostRequest,
        CreateUserRequest
    )),
    tags(
        (name = "posts", description = "Posts with resolved authors and comments"),
        (name = "users", description = "Validated upstream users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs/` serving [`ApiDoc`] from `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}
