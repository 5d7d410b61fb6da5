//! Pagination helpers for GitHub list endpoints
//!
//! GitHub pages are 1-indexed and capped at 100 items. A page shorter than
//! the requested size is the last one.

use crate::config::MAX_PAGE_SIZE;

/// Pagination parameters for API requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().per_page(50).page(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    /// Number of items per page (max 100)
    pub per_page: usize,
    /// Page number, starting at 1
    pub page: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            per_page: MAX_PAGE_SIZE,
            page: 1,
        }
    }
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size, clamped to what GitHub accepts.
    pub fn per_page(mut self, size: usize) -> Self {
        self.per_page = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Params for the following page.
    pub fn next_page(&self) -> Self {
        Self {
            per_page: self.per_page,
            page: self.page + 1,
        }
    }

    /// A page holding fewer items than requested ends the listing.
    pub fn is_last_page(&self, received: usize) -> bool {
        received < self.per_page
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}
