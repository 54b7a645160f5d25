//! Facet computation.
//!
//! Computes the filter controls a page should offer: category and brand
//! lists, the observed price range, and the rating ladder. The caller picks
//! the basis catalog (the context-narrowed subset), which is what keeps
//! pages like "deals" from offering a filter that would yield zero results.

use crate::query::BrowseQuery;
use fresh_catalog::Product;
use serde::{Deserialize, Serialize};

/// Selectable rating thresholds, in display order ("N stars & up").
pub const RATING_LADDER: [u32; 4] = [4, 3, 2, 1];

/// A single selectable facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value, as it would appear in the query string.
    pub value: String,
    /// Number of basis products carrying this value.
    pub count: u32,
    /// Whether the currently applied query selects this value.
    pub selected: bool,
}

/// Observed effective-price range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Context flags for facet computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacetOptions {
    /// Suppress the category facet entirely (the page locks the category).
    pub lock_category: bool,
    /// Draw the category/brand vocabulary from the basis instead of the
    /// full catalog, so only values with results are offered.
    pub available_only: bool,
}

/// The filter options a page offers for the current context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOptions {
    /// Selectable categories, alphabetical. Empty when the page locks the
    /// category.
    pub categories: Vec<FacetValue>,
    /// Selectable brands, alphabetical.
    pub brands: Vec<FacetValue>,
    /// Observed effective-price range over the basis.
    pub price_range: PriceRange,
    /// Rating thresholds ("4 & up" first), counted against the basis.
    pub ratings: Vec<FacetValue>,
}

impl FilterOptions {
    /// Compute the filter options for a page.
    ///
    /// Counts and the price range are always drawn from `basis`, the
    /// context-narrowed subset; `catalog` supplies the full vocabulary when
    /// `available_only` is unset. `applied` marks values as selected.
    pub fn compute(
        catalog: &[Product],
        basis: &[Product],
        applied: &BrowseQuery,
        options: FacetOptions,
    ) -> Self {
        let vocabulary = if options.available_only { basis } else { catalog };

        let categories = if options.lock_category {
            Vec::new()
        } else {
            term_values(vocabulary, basis, category_of, applied.category.as_deref())
        };
        let brands = term_values(vocabulary, basis, brand_of, applied.brand.as_deref());

        let ratings = RATING_LADDER
            .iter()
            .map(|&threshold| FacetValue {
                value: threshold.to_string(),
                count: basis
                    .iter()
                    .filter(|p| {
                        p.rating
                            .map_or(false, |r| r.average >= f64::from(threshold))
                    })
                    .count() as u32,
                selected: applied.rating == Some(f64::from(threshold)),
            })
            .collect();

        Self {
            categories,
            brands,
            price_range: price_range(basis),
            ratings,
        }
    }
}

fn category_of(product: &Product) -> &str {
    &product.category
}

fn brand_of(product: &Product) -> &str {
    &product.brand
}

/// Distinct values of a term field, alphabetical, counted against the basis.
fn term_values(
    vocabulary: &[Product],
    basis: &[Product],
    field: fn(&Product) -> &str,
    selected: Option<&str>,
) -> Vec<FacetValue> {
    let mut names: Vec<&str> = vocabulary.iter().map(field).collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|name| FacetValue {
            value: name.to_string(),
            count: basis.iter().filter(|p| field(p) == name).count() as u32,
            selected: selected == Some(name),
        })
        .collect()
}

/// Min/max effective price over the basis; `{0, 0}` for an empty basis.
fn price_range(basis: &[Product]) -> PriceRange {
    let mut prices = basis.iter().map(|p| p.effective_price());
    match prices.next() {
        None => PriceRange { min: 0.0, max: 0.0 },
        Some(first) => {
            let (mut min, mut max) = (first, first);
            for price in prices {
                min = min.min(price);
                max = max.max(price);
            }
            PriceRange { min, max }
        }
    }
}
