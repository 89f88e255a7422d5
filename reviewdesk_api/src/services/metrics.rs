use crate::{
    query::ListQuery,
    types::{ApiResponse, Page, ReviewMetricItem, ReviewMetricSummary},
    ApiError, Client,
};

/// Endpoints under `api/review-metrics`.
#[derive(Clone, Debug)]
pub struct ReviewMetricsService {
    client: Client,
}

impl ReviewMetricsService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one page of per-analysis metrics.
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<ApiResponse<Page<ReviewMetricItem>>, ApiError> {
        self.client
            .get_with_query("api/review-metrics", &ListQuery::new(limit, offset), None)
            .await
    }

    /// Fetches the aggregate summary across all analyses.
    pub async fn summary(&self) -> Result<ApiResponse<ReviewMetricSummary>, ApiError> {
        self.client.get("api/review-metrics/summary", None).await
    }
}
