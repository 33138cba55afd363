//! Request extraction failures mapped onto the domain error type.
//!
//! Actix reports malformed bodies, path segments and query strings through
//! its own error types. The handlers installed by [`json_config`],
//! [`path_config`] and [`query_config`] turn them into the same JSON
//! envelope the domain errors use.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::web;
use serde_json::json;

use crate::domain::Error;

/// Extraction error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingBody,
    InvalidJson,
    UnsupportedContentType,
    InvalidPath,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingBody => "missing_body",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::UnsupportedContentType => "unsupported_content_type",
            ErrorCode::InvalidPath => "invalid_path",
            ErrorCode::InvalidQuery => "invalid_query",
        }
    }
}

fn with_code(error: Error, code: ErrorCode, reason: impl std::fmt::Display) -> Error {
    error.with_details(json!({
        "code": code.as_str(),
        "reason": reason.to_string(),
    }))
}

/// Map a JSON body extraction failure to a 400.
pub(crate) fn json_payload_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::ContentType => with_code(
            Error::invalid_request("request body must be JSON"),
            ErrorCode::UnsupportedContentType,
            err,
        ),
        JsonPayloadError::Deserialize(inner) if inner.is_eof() => with_code(
            Error::invalid_request("request body is required"),
            ErrorCode::MissingBody,
            err,
        ),
        _ => with_code(
            Error::invalid_request("request body is not valid"),
            ErrorCode::InvalidJson,
            err,
        ),
    }
}

/// Map a path segment that does not parse as an identifier to a 404; no
/// resource can live at such a path.
pub(crate) fn path_error(err: &PathError) -> Error {
    with_code(
        Error::not_found("resource not found"),
        ErrorCode::InvalidPath,
        err,
    )
}

/// Map a malformed query string to a 400.
pub(crate) fn query_error(err: &QueryPayloadError) -> Error {
    with_code(
        Error::invalid_request("query string is not valid"),
        ErrorCode::InvalidQuery,
        err,
    )
}

/// JSON extractor configuration shared by every handler.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| json_payload_error(&err).into())
}

/// Path extractor configuration shared by every handler.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| path_error(&err).into())
}

/// Query extractor configuration shared by every handler.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| query_error(&err).into())
}
