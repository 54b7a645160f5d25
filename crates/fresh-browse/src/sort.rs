//! Product ordering.

use crate::query::SortKey;
use fresh_catalog::Product;
use std::cmp::Ordering;

/// Order products by a sort key.
///
/// Every ordering is stable: products with equal keys keep their relative
/// catalog order, which keeps pagination deterministic.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::NameAsc => products.sort_by(|a, b| compare_names(a, b)),
        SortKey::NameDesc => products.sort_by(|a, b| compare_names(b, a)),
        SortKey::PriceAsc => {
            products.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        SortKey::PriceDesc => {
            products.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortKey::RatingDesc => products.sort_by(compare_rating_desc),
        SortKey::DiscountDesc => {
            products.sort_by(|a, b| discount_of(b).total_cmp(&discount_of(a)))
        }
        // The catalog arrives newest-first from the source; there is no
        // timestamp on the listing record to re-sort by.
        SortKey::Newest => {}
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Highest rating first; unrated products sort last.
fn compare_rating_desc(a: &Product, b: &Product) -> Ordering {
    match (a.average_rating(), b.average_rating()) {
        (Some(ra), Some(rb)) => rb.total_cmp(&ra),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn discount_of(product: &Product) -> f64 {
    product.discount_percentage.unwrap_or(0.0)
}
