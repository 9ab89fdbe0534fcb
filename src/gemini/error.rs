use thiserror::Error;

use crate::gemini::response::Response;
use crate::gemini::status::StatusCode;

/// A request that could not be served.
///
/// Carries the status to report and an optional meta line. Without a meta,
/// the status's reason phrase is sent instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status} (meta: {meta:?})")]
pub struct GeminiError {
    pub status: StatusCode,
    pub meta: Option<String>,
}

impl GeminiError {
    pub fn new(status: StatusCode, meta: Option<String>) -> Self {
        Self { status, meta }
    }

    /// 59 BAD REQUEST with the given meta.
    pub fn bad_request(meta: impl Into<String>) -> Self {
        Self::new(StatusCode::BadRequest, Some(meta.into()))
    }

    /// 51 NOT FOUND with the given meta.
    pub fn not_found(meta: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, Some(meta.into()))
    }

    /// 40 TEMPORARY FAILURE with the table's phrase as meta.
    pub fn temporary_failure() -> Self {
        Self::new(StatusCode::TemporaryFailure, None)
    }

    /// Converts the failure into a header-only response.
    pub fn to_response(&self) -> Response {
        let meta = self
            .meta
            .clone()
            .unwrap_or_else(|| self.status.reason_phrase().to_string());
        Response::new(self.status, Some(meta), None)
    }
}

impl From<GeminiError> for Response {
    fn from(err: GeminiError) -> Self {
        err.to_response()
    }
}
