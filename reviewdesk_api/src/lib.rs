//! Typed client for the review-analysis backend: the response envelope, the
//! error taxonomy, the HTTP client and the review/metrics/usages services.

mod client;
mod errors;
mod query;
pub mod services;
pub mod types;
pub use self::client::{process_response, Client, RequestOptions};
pub use self::errors::{ApiError, ApiErrorCode, DEFAULT_DOWNLOAD_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE};
pub use self::query::{ListQuery, Query, PAGE_SIZE};
pub use self::services::{ReviewMetricsService, ReviewService, ReviewUsagesService};
