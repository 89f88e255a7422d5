//! Review-related types returned by the `api/reviews` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a review (a UUID string).
pub type ReviewID = String;

/// Classification label produced by the analysis service.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}
impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sentiment::Positive => "POSITIVE",
                Sentiment::Neutral => "NEUTRAL",
                Sentiment::Negative => "NEGATIVE",
            }
        )
    }
}

/// Body of `POST api/reviews`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Result of analyzing a single review.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: ReviewID,

    pub summary: String,

    pub sentiment: Sentiment,

    pub suggested_actions: Vec<String>,

    /// Draft reply the agent can edit before sending.
    pub suggested_response: String,

    pub model_provider: String,

    pub model_version: String,

    #[serde(default)]
    pub language: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// One row of `GET api/reviews/history`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewHistoryItem {
    pub review_id: ReviewID,

    /// The review as submitted by the customer.
    pub raw_text: String,

    pub sentiment: Sentiment,

    pub created_at: DateTime<Utc>,
}

/// Full record returned by `GET api/reviews/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetail {
    pub review_id: ReviewID,

    pub raw_text: String,

    pub summary: String,

    pub sentiment: Sentiment,

    pub suggested_actions: Vec<String>,

    pub suggested_response: String,

    pub model_provider: String,

    pub model_version: String,

    #[serde(default)]
    pub language: Option<String>,

    pub created_at: DateTime<Utc>,
}
