//! The metrics view: an aggregate summary next to a paginated metrics list.

use reviewdesk_api::types::{ApiResponse, ReviewMetricItem, ReviewMetricSummary};
use reviewdesk_api::{ApiError, Client};

use crate::error::ReviewDeskError;
use crate::paging::{ListController, ListSnapshot, PageSource};
use crate::sources::MetricsSource;

/// Shown when the summary fetch fails without an API message.
pub const SUMMARY_FALLBACK_ERROR: &str = "Error loading metrics summary";

pub struct MetricsView {
    list: ListController<MetricsSource>,
    summary: Option<ReviewMetricSummary>,
    summary_loading: bool,
    summary_error: Option<String>,
}

impl MetricsView {
    pub fn new(client: Client) -> Self {
        Self {
            list: ListController::new(MetricsSource::new(client)),
            summary: None,
            summary_loading: false,
            summary_error: None,
        }
    }

    /// Fetches the summary and the first page concurrently.
    pub async fn mount(&mut self) {
        self.load(0).await;
    }

    /// Re-fetches the summary and the current page.
    pub async fn refresh(&mut self) {
        let offset = self.list.offset();
        self.load(offset).await;
    }

    pub async fn next_page(&mut self) -> bool {
        self.list.next_page().await
    }

    pub async fn prev_page(&mut self) {
        self.list.prev_page().await;
    }

    /// Fetches only the summary.
    pub async fn load_summary(&mut self) {
        self.summary_loading = true;
        self.summary_error = None;
        let result = self.list.source().service().summary().await;
        self.apply_summary(result);
    }

    /// Fetches the summary and the page at `offset` concurrently.
    pub async fn load(&mut self, offset: u64) {
        self.summary_loading = true;
        self.summary_error = None;

        let ticket = self.list.begin_fetch(offset);
        let limit = self.list.limit();
        let source = self.list.source();
        let (summary, page) = tokio::join!(
            source.service().summary(),
            source.fetch_page(limit, offset)
        );

        self.apply_summary(summary);
        self.list.complete(ticket, page);
    }

    fn apply_summary(&mut self, result: Result<ApiResponse<ReviewMetricSummary>, ApiError>) {
        match result {
            Ok(resp) => self.summary = resp.into_data(),
            Err(err) => {
                tracing::warn!("Failed to load metrics summary: {}", err);
                self.summary_error =
                    Some(ReviewDeskError::from(err).user_message(SUMMARY_FALLBACK_ERROR));
            }
        }
        self.summary_loading = false;
    }

    pub fn summary(&self) -> Option<&ReviewMetricSummary> {
        self.summary.as_ref()
    }

    pub fn items(&self) -> &[ReviewMetricItem] {
        self.list.items()
    }

    pub fn list(&self) -> &ListController<MetricsSource> {
        &self.list
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.list.snapshot()
    }

    pub fn is_loading_summary(&self) -> bool {
        self.summary_loading
    }

    pub fn is_loading_list(&self) -> bool {
        self.list.is_loading()
    }

    /// The error shown above the view: a list failure takes precedence over a
    /// summary failure.
    pub fn error(&self) -> Option<&str> {
        self.list.error().or(self.summary_error.as_deref())
    }

    pub fn summary_error(&self) -> Option<&str> {
        self.summary_error.as_deref()
    }

    /// Percentage of successful analyses, 0 when nothing was analyzed.
    pub fn success_rate(&self) -> f64 {
        self.summary.as_ref().map(success_rate).unwrap_or(0.0)
    }
}

/// `success_count / total_reviews * 100`, or 0 when there are no reviews.
pub fn success_rate(summary: &ReviewMetricSummary) -> f64 {
    if summary.total_reviews == 0 {
        return 0.0;
    }
    summary.success_count as f64 / summary.total_reviews as f64 * 100.0
}
