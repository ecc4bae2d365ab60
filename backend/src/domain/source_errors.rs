//! Translation of upstream port failures into caller-facing errors.

use serde_json::json;
use tracing::warn;

use super::ports::PlaceholderSourceError;
use super::{Error, PostId};

/// Role an upstream call plays inside an aggregate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// The resource the caller asked for by id. A 404 here is the caller's
    /// not-found.
    Post(PostId),
    /// Any other call (listings, creations, author and comment lookups). A
    /// 404 here means upstream is inconsistent.
    Dependent,
}

pub(crate) fn map_source_error(error: PlaceholderSourceError, lookup: Lookup) -> Error {
    warn!(%error, ?lookup, "upstream call failed");
    let message = error.to_string();
    match (error, lookup) {
        (PlaceholderSourceError::NotFound { resource }, Lookup::Post(id)) => {
            Error::not_found(format!("post {id} not found"))
                .with_details(json!({ "resource": resource }))
        }
        (PlaceholderSourceError::NotFound { resource }, Lookup::Dependent) => {
            Error::bad_gateway(message).with_details(json!({ "resource": resource }))
        }
        (PlaceholderSourceError::Timeout { .. }, _) => Error::gateway_timeout(message),
        (PlaceholderSourceError::Status { status, .. }, _) => {
            Error::bad_gateway(message).with_details(json!({ "upstreamStatus": status }))
        }
        (PlaceholderSourceError::Transport { .. } | PlaceholderSourceError::Decode { .. }, _) => {
            Error::bad_gateway(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn post_seven() -> Lookup {
        Lookup::Post(PostId::new(7).expect("valid id"))
    }

    #[rstest]
    #[case::primary_missing(PlaceholderSourceError::not_found("/posts/7"), post_seven(), ErrorCode::NotFound)]
    #[case::author_missing(PlaceholderSourceError::not_found("/users/99"), Lookup::Dependent, ErrorCode::BadGateway)]
    #[case::timeout(PlaceholderSourceError::timeout("slow"), post_seven(), ErrorCode::GatewayTimeout)]
    #[case::server_error(PlaceholderSourceError::status(500, "boom"), Lookup::Dependent, ErrorCode::BadGateway)]
    #[case::transport(PlaceholderSourceError::transport("refused"), Lookup::Dependent, ErrorCode::BadGateway)]
    #[case::decode(PlaceholderSourceError::decode("eof"), post_seven(), ErrorCode::BadGateway)]
    fn maps_each_failure_kind(
        #[case] error: PlaceholderSourceError,
        #[case] lookup: Lookup,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(map_source_error(error, lookup).code(), expected);
    }

    #[test]
    fn not_found_keeps_resource_in_details() {
        let error = map_source_error(PlaceholderSourceError::not_found("/posts/7"), post_seven());
        assert_eq!(error.message(), "post 7 not found");
        assert_eq!(
            error.details().and_then(|d| d.get("resource")),
            Some(&json!("/posts/7"))
        );
    }
}
