//! Single-review detail view.

use reviewdesk_api::types::ReviewDetail;
use reviewdesk_api::{Client, ReviewService};

use crate::error::ReviewDeskError;
use crate::validation::validate_review_id;

pub const DETAIL_FALLBACK_ERROR: &str = "Error loading review detail";

pub struct ReviewDetailView {
    service: ReviewService,
    detail: Option<ReviewDetail>,
    loading: bool,
    error: Option<String>,
}

impl ReviewDetailView {
    pub fn new(client: Client) -> Self {
        Self {
            service: ReviewService::new(client),
            detail: None,
            loading: false,
            error: None,
        }
    }

    /// Loads the review `id`. A previously shown detail stays until the new
    /// one arrives; on failure only the error changes.
    pub async fn fetch(&mut self, id: &str) {
        self.loading = true;
        self.error = None;

        let result = match validate_review_id(id) {
            Ok(id) => self.service.get_by_id(id).await.map_err(ReviewDeskError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(resp) => {
                if let Some(detail) = resp.into_data() {
                    self.detail = Some(detail);
                }
            }
            Err(err) => {
                tracing::warn!("Failed to load review {}: {}", id, err);
                self.error = Some(err.user_message(DETAIL_FALLBACK_ERROR));
            }
        }
        self.loading = false;
    }

    /// Drops the shown detail and any error.
    pub fn clear(&mut self) {
        self.detail = None;
        self.error = None;
    }

    pub fn detail(&self) -> Option<&ReviewDetail> {
        self.detail.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
