//! Pagination helpers for list requests
//!
//! List endpoints page with `limit`/`offset` and report the number of matches
//! in the second element of the response.

/// Largest page the API accepts.
pub const MAX_PAGE_SIZE: usize = 500;

/// Default page size when nothing is configured.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Pagination parameters for list requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().limit(100).offset(200);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Items per page (default: 100, max: 500)
    pub limit: Option<usize>,
    /// Number of items to skip
    pub offset: Option<usize>,
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size, clamped to the API maximum.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.clamp(1, MAX_PAGE_SIZE));
        self
    }

    /// Set the offset.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Effective page size.
    pub fn page_size(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Convert to query string parameters.
    ///
    /// `limit` is always sent so the server never falls back to a tiny default.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.page_size().to_string())];

        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }

        params
    }

    /// Params for the page following one that returned `received` items.
    pub fn next_page(&self, received: usize) -> Self {
        Self {
            limit: self.limit,
            offset: Some(self.offset.unwrap_or(0) + received),
        }
    }
}

/// One page of a list response with the server-reported total.
#[derive(Debug, Clone)]
pub struct PagedResponse<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total matches across all pages (`totalCount`, falling back to `count`)
    pub total_count: Option<usize>,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>, total_count: Option<usize>) -> Self {
        Self { items, total_count }
    }

    /// Whether more items exist past `fetched_so_far`.
    ///
    /// An empty page always ends the listing, even if the total disagrees.
    /// Without a total, a full page means there may be another one.
    pub fn has_more(&self, fetched_so_far: usize, page_size: usize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        match self.total_count {
            Some(total) => fetched_so_far < total,
            None => self.items.len() >= page_size,
        }
    }
}
