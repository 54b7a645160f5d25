//! Page contexts.
//!
//! Each catalog-like page locks certain query fields before the pipeline
//! runs: the deals page forces on-sale, the recommended page forces a
//! rating floor, a category page pins the path-derived category. Locked
//! values are applied after parsing and echoed back in the applied query,
//! so the UI never renders a "remove filter" control for something the page
//! itself requires.

use crate::engine::apply_filters;
use crate::facets::{FacetOptions, FilterOptions};
use crate::page::paginate;
use crate::query::BrowseQuery;
use crate::results::BrowseResults;
use crate::sort::sort_products;
use fresh_catalog::Product;
use serde::{Deserialize, Serialize};

/// Minimum average rating for the recommended page.
pub const RECOMMENDED_RATING_FLOOR: f64 = 4.0;

/// The catalog-like pages of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContext {
    /// The generic all-products listing; the query is taken as-is.
    AllProducts,
    /// A single category page; the category comes from the URL path and
    /// overrides any `category` query parameter.
    Category(String),
    /// The deals page; only on-sale products.
    Deals,
    /// The recommended page; only products at or above the rating floor.
    Recommended,
}

/// A result page together with the filter options to render beside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowseResponse {
    /// The filtered, sorted, paginated page.
    pub results: BrowseResults,
    /// The facets still meaningful for this page.
    pub options: FilterOptions,
}

impl PageContext {
    /// Stable label for cache keys and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageContext::AllProducts => "all",
            PageContext::Category(_) => "category",
            PageContext::Deals => "deals",
            PageContext::Recommended => "recommended",
        }
    }

    /// Overwrite the fields this page locks. The forced value always wins
    /// over whatever the query parameters carried.
    pub fn lock(&self, mut query: BrowseQuery) -> BrowseQuery {
        match self {
            PageContext::AllProducts => {}
            PageContext::Category(name) => query.category = Some(name.clone()),
            PageContext::Deals => query.on_sale = true,
            PageContext::Recommended => query.rating = Some(RECOMMENDED_RATING_FLOOR),
        }
        query
    }

    /// The subset of the catalog facets are computed from on this page.
    pub fn facet_basis(&self, catalog: &[Product]) -> Vec<Product> {
        match self {
            PageContext::AllProducts => catalog.to_vec(),
            PageContext::Category(name) => catalog
                .iter()
                .filter(|p| p.category == *name)
                .cloned()
                .collect(),
            PageContext::Deals => catalog.iter().filter(|p| p.on_sale).cloned().collect(),
            PageContext::Recommended => catalog
                .iter()
                .filter(|p| {
                    p.rating
                        .map_or(false, |r| r.average >= RECOMMENDED_RATING_FLOOR)
                })
                .cloned()
                .collect(),
        }
    }

    /// Facet flags for this page.
    pub fn facet_options(&self) -> FacetOptions {
        match self {
            PageContext::AllProducts => FacetOptions {
                lock_category: false,
                available_only: false,
            },
            PageContext::Category(_) => FacetOptions {
                lock_category: true,
                available_only: true,
            },
            PageContext::Deals | PageContext::Recommended => FacetOptions {
                lock_category: false,
                available_only: true,
            },
        }
    }

    /// Run the full browse pipeline for this page.
    ///
    /// Normalizes and locks the query, filters, sorts, paginates, and
    /// computes facets. The applied query echoed in the results reflects
    /// the locked fields and the page the paginator actually resolved.
    pub fn browse(&self, catalog: &[Product], query: BrowseQuery) -> BrowseResponse {
        let mut applied = self.lock(query.normalize());

        let mut matched = apply_filters(catalog, &applied);
        sort_products(&mut matched, applied.sort);
        let (items, pagination) = paginate(matched, applied.page, applied.limit);
        applied.page = pagination.page;

        tracing::debug!(
            context = self.as_str(),
            total = pagination.total,
            page = pagination.page,
            total_pages = pagination.total_pages,
            "browse query applied"
        );

        let basis = self.facet_basis(catalog);
        let options = FilterOptions::compute(catalog, &basis, &applied, self.facet_options());

        BrowseResponse {
            results: BrowseResults {
                items,
                pagination,
                applied,
            },
            options,
        }
    }

    /// Deterministic cache key for a query on this page.
    ///
    /// Built from the canonical query string after locking, so two requests
    /// that render the same page share a key.
    pub fn cache_key(&self, query: &BrowseQuery) -> String {
        let locked = self.lock(query.clone().normalize());
        let qs = locked.to_query_string();
        if qs.is_empty() {
            format!("browse:{}", self.as_str())
        } else {
            format!("browse:{}:{}", self.as_str(), qs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;
    use fresh_catalog::fixtures::sample_catalog;

    #[test]
    fn test_all_products_takes_query_as_is() {
        let catalog = sample_catalog();
        let response = PageContext::AllProducts.browse(&catalog, BrowseQuery::new());
        assert_eq!(response.results.total_count(), 8);
        assert_eq!(response.options.categories.len(), 5);
    }

    #[test]
    fn test_category_page_locks_category() {
        let catalog = sample_catalog();
        let context = PageContext::Category("Breakfast".to_string());
        // A conflicting query parameter must not win over the path.
        let query = BrowseQuery::new().with_category("Dairy");
        let response = context.browse(&catalog, query);

        assert_eq!(response.results.total_count(), 2);
        assert_eq!(
            response.results.applied.category.as_deref(),
            Some("Breakfast")
        );
        assert!(response.options.categories.is_empty());
    }

    #[test]
    fn test_deals_page_forces_on_sale() {
        let catalog = sample_catalog();
        let response = PageContext::Deals.browse(&catalog, BrowseQuery::new());
        assert_eq!(response.results.total_count(), 3);
        assert!(response.results.applied.on_sale);
        assert!(response.results.items.iter().all(|p| p.on_sale));
    }

    #[test]
    fn test_recommended_page_forces_rating_floor() {
        let catalog = sample_catalog();
        let response = PageContext::Recommended.browse(&catalog, BrowseQuery::new());
        assert_eq!(
            response.results.applied.rating,
            Some(RECOMMENDED_RATING_FLOOR)
        );
        assert_eq!(response.results.total_count(), 6);
        assert!(response
            .results
            .items
            .iter()
            .all(|p| p.rating.unwrap().average >= RECOMMENDED_RATING_FLOOR));
    }

    #[test]
    fn test_applied_page_reflects_clamping() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().with_pagination(999, 4);
        let response = PageContext::AllProducts.browse(&catalog, query);
        assert_eq!(response.results.pagination.page, 2);
        assert_eq!(response.results.applied.page, 2);
        // Pagination links built from the applied query point at real pages.
        assert_eq!(response.results.applied.to_query_string(), "page=2&limit=4");
    }

    #[test]
    fn test_facets_narrowed_on_deals() {
        let catalog = sample_catalog();
        let response = PageContext::Deals.browse(&catalog, BrowseQuery::new());
        let names: Vec<&str> = response
            .options
            .categories
            .iter()
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(names, vec!["Breakfast", "Cooking Essentials", "Grains & Rice"]);
    }

    #[test]
    fn test_cache_key_distinguishes_contexts() {
        let query = BrowseQuery::new();
        let all = PageContext::AllProducts.cache_key(&query);
        let deals = PageContext::Deals.cache_key(&query);
        let grains = PageContext::Category("Grains & Rice".to_string()).cache_key(&query);
        let dairy = PageContext::Category("Dairy".to_string()).cache_key(&query);

        assert_eq!(all, "browse:all");
        assert_eq!(deals, "browse:deals:onSale=true");
        assert_ne!(grains, dairy);
        assert!(grains.contains("category=Grains%20%26%20Rice"));
    }

    #[test]
    fn test_cache_key_is_canonical() {
        let context = PageContext::AllProducts;
        let a = BrowseQuery::new().with_brand("Peak").with_sort(SortKey::PriceAsc);
        let b = BrowseQuery::from_query_string("sort=price_asc&brand=Peak");
        assert_eq!(context.cache_key(&a), context.cache_key(&b));
    }
}
