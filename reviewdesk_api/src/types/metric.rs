//! Token, cost and latency metrics recorded for each analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::review::ReviewID;

/// One row of `GET api/review-metrics`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewMetricItem {
    pub id: String,

    pub review_id: ReviewID,

    pub input_tokens: u64,

    pub output_tokens: u64,

    pub total_tokens: u64,

    /// Estimated cost in USD.
    pub estimated_cost: f64,

    pub latency_ms: u64,

    /// `"success"` or an error status string.
    pub status: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentBreakdown {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

/// Aggregates returned by `GET api/review-metrics/summary`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewMetricSummary {
    pub total_reviews: u64,

    pub total_tokens: u64,

    pub total_cost: f64,

    pub average_latency_ms: f64,

    pub success_count: u64,

    pub error_count: u64,

    pub sentiment_breakdown: SentimentBreakdown,
}
