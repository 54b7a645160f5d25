//! Filtering, sorting, pagination, and facets for FreshCart product listings.
//!
//! Every catalog-like page (all products, a single category, deals,
//! recommended) runs the same pipeline:
//!
//! ```text
//! raw query params -> BrowseQuery::from_query_string -> PageContext::lock
//!     -> apply_filters -> sort_products -> paginate -> BrowseResults
//! ```
//!
//! alongside a facet computation that only ever offers filter values
//! meaningful for the current page. [`BrowseQuery::to_url`] is the exact
//! inverse of parsing, so every pagination link, sort link, and filter chip
//! round-trips through the same canonical query string.
//!
//! The whole crate is pure and total: no input can make it panic or return
//! an error. Malformed query values degrade to "unconstrained", out-of-range
//! pages clamp, and an empty catalog produces a well-formed empty page.
//!
//! # Example
//!
//! ```
//! use fresh_browse::prelude::*;
//! use fresh_catalog::fixtures::sample_catalog;
//!
//! let catalog = sample_catalog();
//! let query = BrowseQuery::from_query_string("onSale=true&limit=4");
//! let response = PageContext::Deals.browse(&catalog, query);
//!
//! assert_eq!(response.results.total_count(), 3);
//! assert_eq!(response.results.pagination.total_pages, 1);
//! ```

pub mod codec;
pub mod context;
pub mod engine;
pub mod facets;
pub mod page;
pub mod query;
pub mod results;
pub mod sort;
pub mod url;

pub use context::{BrowseResponse, PageContext, RECOMMENDED_RATING_FLOOR};
pub use engine::apply_filters;
pub use facets::{FacetOptions, FacetValue, FilterOptions, PriceRange, RATING_LADDER};
pub use page::{paginate, Pagination};
pub use query::{BrowseQuery, SortKey, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use results::BrowseResults;
pub use sort::sort_products;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::context::{BrowseResponse, PageContext, RECOMMENDED_RATING_FLOOR};
    pub use crate::engine::apply_filters;
    pub use crate::facets::{FacetOptions, FacetValue, FilterOptions, PriceRange};
    pub use crate::page::{paginate, Pagination};
    pub use crate::query::{BrowseQuery, SortKey, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
    pub use crate::results::BrowseResults;
    pub use crate::sort::sort_products;
}
