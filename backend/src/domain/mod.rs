//! Domain primitives, ports and aggregation services.
//!
//! Purpose: define the post and user aggregates, the transport-agnostic error
//! envelope, and the services that assemble aggregates from the upstream
//! API. Nothing in here knows about actix or reqwest.
//!
//! Public surface:
//! - Error / ErrorCode: caller-facing error payload.
//! - Post, AuthorSummary, Comment, PostId: the post aggregate.
//! - User and its validated fields: the user aggregate.
//! - PostAggregationService, UserDirectoryService: driving port
//!   implementations over [`ports::PlaceholderSource`].

pub mod error;
pub mod ports;
pub mod post;
mod post_aggregation;
mod source_errors;
pub mod trace_id;
pub mod user;
mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::post::{AuthorSummary, Comment, NewPost, Post, PostEdit, PostId, PostIdError};
pub use self::post_aggregation::PostAggregationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, FullName, NewUser, PHONE_MIN_LEN, PhoneNumber, User, UserValidationError,
    Username,
};
pub use self::user_directory::UserDirectoryService;
