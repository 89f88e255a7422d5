use crate::{
    query::ListQuery,
    types::{ApiResponse, CreateReviewRequest, Page, ReviewDetail, ReviewHistoryItem, ReviewResponse},
    ApiError, Client,
};

/// Endpoints under `api/reviews`.
#[derive(Clone, Debug)]
pub struct ReviewService {
    client: Client,
}

impl ReviewService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Submits a review for analysis.
    pub async fn analyze(
        &self,
        body: &CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, ApiError> {
        self.client.post("api/reviews", body, None).await
    }

    /// Fetches one page of previously analyzed reviews.
    pub async fn history(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<ApiResponse<Page<ReviewHistoryItem>>, ApiError> {
        self.client
            .get_with_query("api/reviews/history", &ListQuery::new(limit, offset), None)
            .await
    }

    /// Fetches a single review by its ID.
    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse<ReviewDetail>, ApiError> {
        self.client
            .get(format!("api/reviews/{}", id).as_str(), None)
            .await
    }
}
