//! Shared validation helpers for inbound HTTP adapters.
//!
//! Malformed JSON bodies and unparseable path segments are rejected by actix
//! extractors before a handler runs. The configs here turn those rejections
//! into the same `invalid_request` envelope handlers produce themselves.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, PostIdError, UserValidationError};

/// Field names surfaced in validation error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Build an `invalid_request` error pointing at one field.
pub(crate) fn field_error(field: FieldName, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

/// Reject a malformed post identifier path segment.
pub(crate) fn invalid_post_id(raw: &str, err: &PostIdError) -> Error {
    let code = match err {
        PostIdError::Zero => "post_id_zero",
        PostIdError::NotNumeric(_) => "post_id_not_numeric",
    };
    Error::invalid_request(format!("invalid post id: {err}")).with_details(json!({
        "field": "id",
        "value": raw,
        "code": code,
    }))
}

/// Surface a user rule violation before any upstream call is made.
pub(crate) fn invalid_user(err: &UserValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": err.code(),
    }))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let code = match &err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "payload_too_large"
        }
        _ => "malformed_body",
    };
    Error::invalid_request(format!("invalid JSON body: {err}"))
        .with_details(json!({ "code": code }))
        .into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid path: {err}"))
        .with_details(json!({ "code": "malformed_path" }))
        .into()
}

/// JSON extractor configuration mapping body errors to `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor configuration mapping segment errors to `invalid_request`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, FullName};
    use rstest::rstest;

    #[rstest]
    #[case("0", PostIdError::Zero, "post_id_zero")]
    #[case("abc", PostIdError::NotNumeric("abc".into()), "post_id_not_numeric")]
    fn invalid_post_id_reports_value_and_code(
        #[case] raw: &str,
        #[case] err: PostIdError,
        #[case] code: &str,
    ) {
        let error = invalid_post_id(raw, &err);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "id", "value": raw, "code": code }))
        );
    }

    #[rstest]
    fn invalid_user_reports_field_and_code() {
        let err = FullName::new("Cher").expect_err("single word");
        let error = invalid_user(&err);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "name", "code": "name_not_full" }))
        );
    }

    #[rstest]
    fn field_error_carries_field_name() {
        let error = field_error(FieldName::new("title"), "empty", "title must not be empty");
        assert_eq!(error.message(), "title must not be empty");
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "title", "code": "empty" }))
        );
    }
}
