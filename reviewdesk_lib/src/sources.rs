//! [`PageSource`] adapters over the list endpoints.

use async_trait::async_trait;
use reviewdesk_api::types::{Page, ReviewHistoryItem, ReviewMetricItem, ReviewUsageItem};
use reviewdesk_api::{Client, ReviewMetricsService, ReviewService, ReviewUsagesService};

use crate::error::ReviewDeskError;
use crate::paging::{ListController, PageSource};

/// Review history, newest first.
#[derive(Clone, Debug)]
pub struct HistorySource {
    service: ReviewService,
}

impl HistorySource {
    pub fn new(client: Client) -> Self {
        Self {
            service: ReviewService::new(client),
        }
    }
}

#[async_trait]
impl PageSource for HistorySource {
    type Item = ReviewHistoryItem;
    const FALLBACK_ERROR: &'static str = "Error loading history";

    async fn fetch_page(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Option<Page<ReviewHistoryItem>>, ReviewDeskError> {
        let resp = self.service.history(limit, offset).await?;
        Ok(resp.into_data())
    }
}

/// Per-analysis token, cost and latency metrics.
#[derive(Clone, Debug)]
pub struct MetricsSource {
    service: ReviewMetricsService,
}

impl MetricsSource {
    pub fn new(client: Client) -> Self {
        Self {
            service: ReviewMetricsService::new(client),
        }
    }

    pub fn service(&self) -> &ReviewMetricsService {
        &self.service
    }
}

#[async_trait]
impl PageSource for MetricsSource {
    type Item = ReviewMetricItem;
    const FALLBACK_ERROR: &'static str = "Error loading metrics";

    async fn fetch_page(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Option<Page<ReviewMetricItem>>, ReviewDeskError> {
        let resp = self.service.list(limit, offset).await?;
        Ok(resp.into_data())
    }
}

/// Usage records of suggested responses.
#[derive(Clone, Debug)]
pub struct UsagesSource {
    service: ReviewUsagesService,
}

impl UsagesSource {
    pub fn new(client: Client) -> Self {
        Self {
            service: ReviewUsagesService::new(client),
        }
    }
}

#[async_trait]
impl PageSource for UsagesSource {
    type Item = ReviewUsageItem;
    const FALLBACK_ERROR: &'static str = "Error loading usage records";

    async fn fetch_page(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Option<Page<ReviewUsageItem>>, ReviewDeskError> {
        let resp = self.service.list(limit, offset).await?;
        Ok(resp.into_data())
    }
}

pub type HistoryList = ListController<HistorySource>;
pub type UsagesList = ListController<UsagesSource>;

/// History list controller bound to `client`.
pub fn history_list(client: Client) -> HistoryList {
    ListController::new(HistorySource::new(client))
}

/// Usages list controller bound to `client`.
pub fn usages_list(client: Client) -> UsagesList {
    ListController::new(UsagesSource::new(client))
}
