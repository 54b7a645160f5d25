//! Pagination.

use fresh_catalog::Product;
use serde::{Deserialize, Serialize};

/// Pagination info for one result page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed, already clamped into range).
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Total number of items after filtering, before pagination.
    pub total: u32,
    /// Total number of pages (at least 1, even for zero items).
    pub total_pages: u32,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    ///
    /// The requested page is clamped into `[1, total_pages]`; an
    /// out-of-range request resolves to the nearest valid page rather than
    /// erroring. Zero items still mean one (empty) page.
    pub fn new(page: u32, limit: u32, total: u32) -> Self {
        let limit = limit.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + limit - 1) / limit
        };
        let page = page.clamp(1, total_pages);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page within the full result.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.limit
    }

    /// Page numbers for pager controls (e.g. `[3, 4, 5, 6, 7]`).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<u32> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let window = max_visible as u32;
        let half = window / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + window - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(window).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), 0 when there are no items.
    pub fn start_item(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.limit + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> u32 {
        (self.page * self.limit).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, crate::query::DEFAULT_PAGE_SIZE, 0)
    }
}

/// Slice an ordered result into one page.
///
/// Returns the page's products together with the resolved pagination info.
/// The requested page is clamped, so a too-large page number yields the last
/// page and page 0 yields the first.
pub fn paginate(products: Vec<Product>, page: u32, limit: u32) -> (Vec<Product>, Pagination) {
    let pagination = Pagination::new(page, limit, products.len() as u32);
    let items = products
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit as usize)
        .collect();
    (items, pagination)
}
