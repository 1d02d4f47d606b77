//! Pagination types for list views.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Number of items to skip before the current page starts.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.limit as usize
    }

    /// Number of items in a full page.
    #[must_use]
    pub fn take(&self) -> usize {
        self.limit as usize
    }

    /// Returns a copy with `page` floored at 1 and `limit` clamped to `1..=max`.
    #[must_use]
    pub fn clamped(&self, max: u32) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, max),
        }
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages; zero when there are no matching items.
    pub total_pages: u64,
}

impl PageMeta {
    /// Computes metadata for a query that matched `total` items in total.
    #[must_use]
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        // Integer ceiling; an empty result has zero pages, not one.
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };

        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

impl<T> PageResponse<T> {
    /// Creates a paginated response; `total` is the pre-pagination match count.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self {
            data,
            pagination: PageMeta::new(page, limit, total),
        }
    }
}
