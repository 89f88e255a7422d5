//! Error types for the API client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message used when a failed envelope carries no `error` text.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message used when a failed download carries no `error` text.
pub const DEFAULT_DOWNLOAD_ERROR_MESSAGE: &str = "Download failed";

/// Error codes raised by the backend.
///
/// | Code           | HTTP | When                              |
/// |----------------|------|-----------------------------------|
/// | VALIDATION     | 400  | Missing or out-of-range input     |
/// | NOT_FOUND      | 404  | Entity not found                  |
/// | ALREADY_EXISTS | 409  | Duplicate resource                |
/// | INTERNAL_ERROR | 500  | Unhandled / infrastructure errors |
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    Validation,
    NotFound,
    AlreadyExists,
    #[default]
    InternalError,
}

impl ApiErrorCode {
    /// Maps a wire code to a known variant. Unknown codes fall back to
    /// [`ApiErrorCode::InternalError`].
    pub fn from_wire(code: &str) -> Self {
        match code {
            "VALIDATION" => ApiErrorCode::Validation,
            "NOT_FOUND" => ApiErrorCode::NotFound,
            "ALREADY_EXISTS" => ApiErrorCode::AlreadyExists,
            _ => ApiErrorCode::InternalError,
        }
    }

    /// The HTTP status the backend pairs with this code.
    pub fn default_status(self) -> u16 {
        match self {
            ApiErrorCode::Validation => 400,
            ApiErrorCode::NotFound => 404,
            ApiErrorCode::AlreadyExists => 409,
            ApiErrorCode::InternalError => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApiErrorCode::Validation => "VALIDATION",
            ApiErrorCode::NotFound => "NOT_FOUND",
            ApiErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ApiErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error shape produced by every non-download client operation.
///
/// Built either from an envelope with `success == false` or from a transport
/// failure. Transport failures that never produced an HTTP status carry
/// `status_code == 0`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: ApiErrorCode,
    pub status_code: u16,
    /// The envelope's `traceId`, when the backend sent one.
    pub trace_id: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, code: ApiErrorCode, status_code: u16) -> Self {
        Self {
            message: message.into(),
            code,
            status_code,
            trace_id: None,
        }
    }

    /// Builds the error from the optional `error`/`code` fields of a failed
    /// response body, applying the given default message.
    pub fn from_parts(
        error: Option<String>,
        code: Option<&str>,
        status_code: u16,
        default_message: &str,
    ) -> Self {
        Self::new(
            error.unwrap_or_else(|| default_message.to_string()),
            code.map(ApiErrorCode::from_wire).unwrap_or_default(),
            status_code,
        )
    }

    /// A transport-level failure: no structured envelope was received.
    pub fn transport(message: impl Into<String>, status_code: u16) -> Self {
        Self::new(message, ApiErrorCode::InternalError, status_code)
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        let trace_id = trace_id.into();
        if !trace_id.is_empty() {
            self.trace_id = Some(trace_id);
        }
        self
    }
}
