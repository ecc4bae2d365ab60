//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the serialised shape of their domain counterparts and
//! live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested post does not exist upstream.
    #[schema(rename = "not_found")]
    NotFound,
    /// The upstream API failed or returned unusable data.
    #[schema(rename = "bad_gateway")]
    BadGateway,
    /// The upstream API did not answer in time.
    #[schema(rename = "gateway_timeout")]
    GatewayTimeout,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "bad_gateway")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "upstream returned status 503")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::AuthorSummary`].
#[derive(ToSchema)]
#[schema(as = AuthorSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AuthorSummarySchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Leanne Graham")]
    name: String,
    #[schema(example = "Sincere@april.biz")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::Post`].
///
/// `comments` is `null` on list and create responses and an array on read
/// and edit responses. Comment objects are passed through from upstream.
#[derive(ToSchema)]
#[schema(as = Post)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PostSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "sunt aut facere")]
    title: String,
    #[schema(example = "quia et suscipit")]
    body: String,
    user: AuthorSummarySchema,
    #[schema(value_type = Option<Vec<Object>>)]
    comments: Option<Vec<serde_json::Value>>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: u64,
    /// Title-cased full name.
    #[schema(example = "Leanne Graham")]
    name: String,
    #[schema(example = "Bret")]
    username: String,
    #[schema(example = "Sincere@april.biz")]
    email: String,
    /// At least seven characters.
    #[schema(example = "1-770-736-8031 x56442")]
    phone: String,
}
