//! Error types for the library layer.

use std::fmt;

use reviewdesk_api::ApiError;

/// Errors produced by the library layer, wrapping API errors and adding
/// input validation and configuration failures.
#[derive(Debug)]
pub enum ReviewDeskError {
    /// An error from the underlying API client.
    Api(ApiError),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// Settings could not be turned into a working client.
    Config(String),
}

impl ReviewDeskError {
    /// The text a view shows for this failure: the backend's message for API
    /// errors, `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(e) => e.message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ReviewDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ReviewDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for ReviewDeskError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}
