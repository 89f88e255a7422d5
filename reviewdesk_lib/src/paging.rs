//! Offset/limit list state shared by the history, metrics and usages views.
//!
//! A [`ListController`] owns the window (`offset`, fixed `limit`), the last
//! good page, and the loading/error state of one view. Every fetch is tagged
//! with a [`FetchTicket`]; only the most recently issued ticket may change
//! state, so a slow response that resolves after a newer one is dropped.

use async_trait::async_trait;
use serde::Serialize;

use reviewdesk_api::types::Page;
pub use reviewdesk_api::PAGE_SIZE;

use crate::error::ReviewDeskError;

/// A list endpoint the controller can page through.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    /// Shown when a fetch fails with something other than an API error.
    const FALLBACK_ERROR: &'static str;

    /// Fetches `limit` items starting at `offset`. `Ok(None)` means the
    /// backend answered successfully without a payload.
    async fn fetch_page(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Option<Page<Self::Item>>, ReviewDeskError>;
}

/// Lifecycle of a list view.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Identifies one fetch. Issued by [`ListController::begin_fetch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    offset: u64,
}

impl FetchTicket {
    /// The offset this fetch was issued for.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// Serializable view of a controller's state, minus the items.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    pub phase: ListPhase,
}

/// 1-based page containing `offset`.
pub fn current_page(offset: u64, limit: u64) -> u64 {
    (offset / limit.max(1)).saturating_add(1)
}

/// Number of pages needed to show `total` items.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1))
}

/// Paginated list state for one view.
pub struct ListController<S: PageSource> {
    source: S,
    limit: u64,
    items: Vec<S::Item>,
    total: u64,
    offset: u64,
    phase: ListPhase,
    error: Option<String>,
    /// Sequence number of the latest ticket handed out.
    latest: u64,
}

impl<S: PageSource> ListController<S> {
    /// Creates an idle controller with the fixed [`PAGE_SIZE`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            limit: PAGE_SIZE,
            items: Vec::new(),
            total: 0,
            offset: 0,
            phase: ListPhase::Idle,
            error: None,
            latest: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> u64 {
        current_page(self.offset, self.limit)
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.limit)
    }

    /// Whether [`next_page`](Self::next_page) would fetch anything.
    pub fn has_next_page(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            offset: self.offset,
            limit: self.limit,
            total: self.total,
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            is_loading: self.is_loading(),
            error: self.error.clone(),
            phase: self.phase,
        }
    }

    /// Marks a fetch for `offset` as in flight and returns its ticket. Any
    /// ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self, offset: u64) -> FetchTicket {
        self.latest += 1;
        self.phase = ListPhase::Loading;
        self.error = None;
        FetchTicket {
            seq: self.latest,
            offset,
        }
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when the ticket is
    /// stale. On success the items and total are replaced and the offset
    /// moves to the ticket's offset; on failure the last good page stays and
    /// the error message is recorded.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Option<Page<S::Item>>, ReviewDeskError>,
    ) -> bool {
        if ticket.seq != self.latest {
            tracing::debug!(
                "Discarding stale page response for offset {} (ticket {}, latest {})",
                ticket.offset,
                ticket.seq,
                self.latest
            );
            return false;
        }

        match result {
            Ok(Some(page)) => {
                self.items = page.items;
                self.total = page.total;
                self.offset = ticket.offset;
                self.error = None;
                self.phase = ListPhase::Loaded;
            }
            Ok(None) => {
                self.error = None;
                self.phase = ListPhase::Loaded;
            }
            Err(err) => {
                tracing::warn!("Failed to load page at offset {}: {}", ticket.offset, err);
                self.error = Some(err.user_message(S::FALLBACK_ERROR));
                self.phase = ListPhase::Failed;
            }
        }
        true
    }

    /// Fetches the page starting at `offset` and applies it.
    pub async fn load(&mut self, offset: u64) {
        let ticket = self.begin_fetch(offset);
        let result = self.source.fetch_page(self.limit, offset).await;
        self.complete(ticket, result);
    }

    /// Initial fetch at offset 0.
    pub async fn mount(&mut self) {
        self.load(0).await;
    }

    /// Moves one page forward. Returns `false` without fetching when the
    /// current page is the last one.
    pub async fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.load(self.offset.saturating_add(self.limit)).await;
        true
    }

    /// Moves one page back, clamping at 0. At offset 0 this re-fetches the
    /// first page.
    pub async fn prev_page(&mut self) {
        self.load(self.offset.saturating_sub(self.limit)).await;
    }

    /// Re-fetches the current page.
    pub async fn refresh(&mut self) {
        self.load(self.offset).await;
    }
}
