//! Shared query infrastructure: the [`Query`] trait and the offset/limit [`ListQuery`].

use url::Url;

/// Page size used by every list view.
pub const PAGE_SIZE: u64 = 20;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Offset/limit window over a list endpoint.
///
/// `offset` is the zero-based index of the first item, `limit` the page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u64,
    pub offset: u64,
}

impl Default for ListQuery {
    fn default() -> ListQuery {
        ListQuery {
            limit: PAGE_SIZE,
            offset: 0,
        }
    }
}

impl ListQuery {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the index of the first result.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string())
            .append_pair("offset", &self.offset.to_string());
        url
    }
}
