//! The analyze-then-respond workflow: submit a review, let the agent edit the
//! suggested reply, then record and mark it as sent.

use reviewdesk_api::types::{CreateReviewRequest, CreateReviewUsageRequest, ReviewResponse};
use reviewdesk_api::{Client, ReviewService, ReviewUsagesService};

use crate::error::ReviewDeskError;
use crate::validation::{validate_language, validate_review_text};

pub const ANALYZE_FALLBACK_ERROR: &str = "Unexpected error while analyzing the review";
pub const SEND_FALLBACK_ERROR: &str = "Unexpected error while sending the response";

pub struct AnalysisSession {
    reviews: ReviewService,
    usages: ReviewUsagesService,
    result: Option<ReviewResponse>,
    analyzing: bool,
    sending: bool,
    send_success: bool,
    error: Option<String>,
}

impl AnalysisSession {
    pub fn new(client: Client) -> Self {
        Self {
            reviews: ReviewService::new(client.clone()),
            usages: ReviewUsagesService::new(client),
            result: None,
            analyzing: false,
            sending: false,
            send_success: false,
            error: None,
        }
    }

    /// Submits `text` for analysis.
    ///
    /// Invalid input is returned as an error and leaves the session as it
    /// was. Otherwise the previous result is cleared and replaced by the new
    /// one, or the failure is recorded in [`error`](Self::error).
    pub async fn analyze(&mut self, text: &str, language: Option<&str>) -> Result<(), ReviewDeskError> {
        let body = CreateReviewRequest {
            text: validate_review_text(text)?,
            language: validate_language(language)?,
        };

        self.result = None;
        self.error = None;
        self.send_success = false;
        self.analyzing = true;

        match self.reviews.analyze(&body).await {
            Ok(resp) => {
                if let Some(result) = resp.into_data() {
                    tracing::info!(
                        "Review {} analyzed as {}",
                        result.review_id,
                        result.sentiment
                    );
                    self.result = Some(result);
                }
            }
            Err(err) => {
                tracing::warn!("Review analysis failed: {}", err);
                self.error = Some(ReviewDeskError::from(err).user_message(ANALYZE_FALLBACK_ERROR));
            }
        }
        self.analyzing = false;
        Ok(())
    }

    /// Records `edited_response` as used for the current result and marks it
    /// as sent. Does nothing when there is no result yet.
    pub async fn send_response(&mut self, edited_response: &str) {
        let review_id = match &self.result {
            Some(result) => result.review_id.clone(),
            None => return,
        };

        self.sending = true;
        self.error = None;
        self.send_success = false;

        let body = CreateReviewUsageRequest {
            review_id: review_id.clone(),
            edited_response: edited_response.to_string(),
            response_sent: true,
        };
        let outcome = match self.usages.create(&body).await {
            Ok(()) => self.usages.mark_as_sent(&review_id).await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Response for review {} sent", review_id);
                self.send_success = true;
            }
            Err(err) => {
                tracing::warn!("Sending response for review {} failed: {}", review_id, err);
                self.error = Some(ReviewDeskError::from(err).user_message(SEND_FALLBACK_ERROR));
            }
        }
        self.sending = false;
    }

    /// Returns the session to its initial state.
    pub fn reset(&mut self) {
        self.result = None;
        self.analyzing = false;
        self.sending = false;
        self.send_success = false;
        self.error = None;
    }

    pub fn result(&self) -> Option<&ReviewResponse> {
        self.result.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn send_success(&self) -> bool {
        self.send_success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
