//! Records of agents reusing (and sending) suggested responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::review::ReviewID;

/// One row of `GET api/review-usages`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUsageItem {
    pub id: String,

    pub review_id: ReviewID,

    /// May be empty when no agent was recorded.
    #[serde(default)]
    pub agent_id: String,

    #[serde(default)]
    pub edited_response: String,

    pub response_sent: bool,

    pub sent_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

/// Body of `POST api/review-usages`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewUsageRequest {
    pub review_id: ReviewID,

    pub edited_response: String,

    pub response_sent: bool,
}
