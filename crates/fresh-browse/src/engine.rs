//! Filter predicate evaluation.

use crate::query::BrowseQuery;
use fresh_catalog::Product;

impl BrowseQuery {
    /// Whether a product passes every filter field present on this query.
    ///
    /// Category and brand are exact, case-sensitive matches (the catalog's
    /// controlled vocabulary); search is a case-insensitive substring test
    /// over name, brand, and category. Price bounds are inclusive and
    /// compare against the effective price. A rating floor excludes
    /// products with no reviews.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category != *category {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if product.brand != *brand {
                return false;
            }
        }

        let price = product.effective_price();
        if let Some(min_price) = self.min_price {
            if price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if price > max_price {
                return false;
            }
        }

        if let Some(min_rating) = self.rating {
            match product.rating {
                Some(rating) if rating.average >= min_rating => {}
                _ => return false,
            }
        }

        if self.on_sale && !product.on_sale {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Apply a query's filters to a catalog.
///
/// With no filters present this is the identity: same products, same order.
pub fn apply_filters(catalog: &[Product], query: &BrowseQuery) -> Vec<Product> {
    if !query.has_filters() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|product| query.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresh_catalog::fixtures::sample_catalog;

    #[test]
    fn test_no_filters_is_identity() {
        let catalog = sample_catalog();
        let result = apply_filters(&catalog, &BrowseQuery::new());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().with_category("Dairy");
        assert_eq!(apply_filters(&catalog, &query).len(), 1);

        let query = BrowseQuery::new().with_category("dairy");
        assert!(apply_filters(&catalog, &query).is_empty());
    }

    #[test]
    fn test_brand_exact_match() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().with_brand("Nestle");
        let result = apply_filters(&catalog, &query);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.brand == "Nestle"));
    }

    #[test]
    fn test_price_band_uses_effective_price() {
        let catalog = sample_catalog();
        // Dangote Rice is 52000 base but 48500 on sale; a band that covers
        // only the base price must not match it.
        let query = BrowseQuery::new().with_price_range(Some(50000.0), Some(60000.0));
        assert!(apply_filters(&catalog, &query).is_empty());

        let query = BrowseQuery::new().with_price_range(Some(48500.0), Some(48500.0));
        let result = apply_filters(&catalog, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Dangote Rice Premium Quality");
    }

    #[test]
    fn test_rating_floor_excludes_unrated() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().with_rating(0.0);
        let result = apply_filters(&catalog, &query);
        // Mamador has no reviews and cannot satisfy any rating floor.
        assert_eq!(result.len(), 7);
        assert!(result.iter().all(|p| p.rating.is_some()));
    }

    #[test]
    fn test_on_sale_filter() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().on_sale_only();
        let result = apply_filters(&catalog, &query);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.on_sale));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().with_search("GOLDEN");
        let result = apply_filters(&catalog, &query);
        // Matches "Nestle Golden Morn Cereal" and "Golden Penny Semovita".
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_matches_brand_and_category() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new().with_search("dangote");
        assert_eq!(apply_filters(&catalog, &query).len(), 1);

        let query = BrowseQuery::new().with_search("noodles");
        assert_eq!(apply_filters(&catalog, &query).len(), 1);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let catalog = sample_catalog();
        let query = BrowseQuery::new()
            .with_category("Breakfast")
            .with_brand("Nestle")
            .on_sale_only();
        let result = apply_filters(&catalog, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Nestle Golden Morn Cereal");
    }

    #[test]
    fn test_empty_catalog() {
        let query = BrowseQuery::new().with_search("rice");
        assert!(apply_filters(&[], &query).is_empty());
    }
}
