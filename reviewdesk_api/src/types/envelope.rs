use serde::{Deserialize, Serialize};

/// Uniform wrapper around every backend reply.
///
/// A successful envelope has `success == true`, a non-null `data` and no
/// `error`/`code`. A failed one has `data == null`, a human-readable `error`
/// and one of the fixed error codes. Endpoints without a payload decode as
/// `ApiResponse<()>` with `data == None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,

    pub data: Option<T>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    /// Correlates a reply with backend logs.
    #[serde(default)]
    pub trace_id: String,
}

impl<T> ApiResponse<T> {
    /// A successful envelope wrapping `data`.
    pub fn ok(data: T, trace_id: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
            trace_id: trace_id.into(),
        }
    }

    /// A failed envelope.
    pub fn failure(
        error: impl Into<String>,
        code: impl Into<String>,
        trace_id: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            code: Some(code.into()),
            trace_id: trace_id.into(),
        }
    }

    /// Consumes the envelope, returning its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Body of a failed download. Only the error fields matter.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub trace_id: Option<String>,
}

/// A single page of a list endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
