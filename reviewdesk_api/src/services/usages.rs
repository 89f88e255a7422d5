use serde::de::IgnoredAny;

use crate::{
    query::ListQuery,
    types::{ApiResponse, CreateReviewUsageRequest, Page, ReviewUsageItem},
    ApiError, Client,
};

/// Endpoints under `api/review-usages`.
#[derive(Clone, Debug)]
pub struct ReviewUsagesService {
    client: Client,
}

impl ReviewUsagesService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one page of usage records.
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<ApiResponse<Page<ReviewUsageItem>>, ApiError> {
        self.client
            .get_with_query("api/review-usages", &ListQuery::new(limit, offset), None)
            .await
    }

    /// Records that an agent used a suggested response. Any payload in the
    /// reply is ignored.
    pub async fn create(&self, body: &CreateReviewUsageRequest) -> Result<(), ApiError> {
        self.client
            .post::<IgnoredAny, _>("api/review-usages", body, None)
            .await?;
        Ok(())
    }

    /// Marks the response for `review_id` as sent.
    pub async fn mark_as_sent(&self, review_id: &str) -> Result<(), ApiError> {
        let empty = serde_json::Map::new();
        self.client
            .patch::<IgnoredAny, _>(
                format!("api/review-usages/{}/sent", review_id).as_str(),
                &empty,
                None,
            )
            .await?;
        Ok(())
    }
}
