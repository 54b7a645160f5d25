//! Result page container.

use crate::page::Pagination;
use crate::query::BrowseQuery;
use fresh_catalog::Product;
use serde::{Deserialize, Serialize};

/// One page of filtered, sorted products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowseResults {
    /// The products on this page, in sort order.
    pub items: Vec<Product>,
    /// Pagination info (total count, resolved page, page count).
    pub pagination: Pagination,
    /// The normalized query that produced this page, with any locked fields
    /// and server-side page clamping applied. UI controls and URL builders
    /// should derive from this, not from the raw request.
    pub applied: BrowseQuery,
}

impl BrowseResults {
    /// Count of matching products after filtering, before pagination.
    pub fn total_count(&self) -> u32 {
        self.pagination.total
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
