//! Browse query model.

use serde::{Deserialize, Serialize};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Upper bound on the user-requested page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort keys for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Name A-Z (the listing default).
    #[default]
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// Biggest discount first.
    DiscountDesc,
    /// Newest first (catalog order).
    Newest,
}

impl SortKey {
    /// All sort keys, in dropdown order.
    pub const ALL: [SortKey; 7] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::DiscountDesc,
        SortKey::Newest,
    ];

    /// Parse a query-string value. Unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "rating" => SortKey::RatingDesc,
            "discount" => SortKey::DiscountDesc,
            "newest" => SortKey::Newest,
            _ => SortKey::default(),
        }
    }

    /// The query-string value for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::RatingDesc => "rating",
            SortKey::DiscountDesc => "discount",
            SortKey::Newest => "newest",
        }
    }

    /// Label for the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Customer Rating",
            SortKey::DiscountDesc => "Biggest Discount",
            SortKey::Newest => "Newest Arrivals",
        }
    }
}

/// A filter/sort/pagination request for a product listing.
///
/// All filter fields are optional; `None` means unconstrained, never an
/// empty string or zero. Construct one from query parameters with
/// [`BrowseQuery::from_query_string`] or programmatically with the `with_*`
/// builders, then pass it through a [`crate::context::PageContext`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseQuery {
    /// Exact category name to match.
    pub category: Option<String>,
    /// Exact brand name to match.
    pub brand: Option<String>,
    /// Inclusive lower bound on the effective price.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on the effective price.
    pub max_price: Option<f64>,
    /// Minimum average rating.
    pub rating: Option<f64>,
    /// Only show products on sale.
    pub on_sale: bool,
    /// Case-insensitive substring search over name, brand, and category.
    pub search: Option<String>,
    /// Sort key.
    pub sort: SortKey,
    /// Current page (1-indexed).
    pub page: u32,
    /// Products per page.
    pub limit: u32,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            category: None,
            brand: None,
            min_price: None,
            max_price: None,
            rating: None,
            on_sale: false,
            search: None,
            sort: SortKey::default(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowseQuery {
    /// Create an unconstrained query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter to a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Filter to an effective-price band. Either bound may be open.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Filter to a minimum average rating.
    pub fn with_rating(mut self, min: f64) -> Self {
        self.rating = Some(min);
        self
    }

    /// Only show products on sale.
    pub fn on_sale_only(mut self) -> Self {
        self.on_sale = true;
        self
    }

    /// Free-text search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: u32, limit: u32) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Whether any filter field constrains the result set.
    pub fn has_filters(&self) -> bool {
        self.category.is_some()
            || self.brand.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.rating.is_some()
            || self.on_sale
            || self.search.is_some()
    }

    /// Clamp and default the query into its canonical, always-valid form.
    ///
    /// Strings are trimmed (empty after trimming means absent), numeric
    /// filters are clamped non-negative, `page` is at least 1, and `limit`
    /// is clamped into `[1, MAX_PAGE_SIZE]`. Idempotent.
    pub fn normalize(mut self) -> Self {
        self.category = normalize_text(self.category);
        self.brand = normalize_text(self.brand);
        self.search = normalize_text(self.search);
        self.min_price = normalize_number(self.min_price);
        self.max_price = normalize_number(self.max_price);
        self.rating = normalize_number(self.rating);
        self.page = self.page.max(1);
        self.limit = self.limit.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn normalize_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(|v| v.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = BrowseQuery::new();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort, SortKey::NameAsc);
        assert!(!query.has_filters());
    }

    #[test]
    fn test_builder() {
        let query = BrowseQuery::new()
            .with_category("Dairy")
            .with_price_range(Some(500.0), Some(2000.0))
            .with_sort(SortKey::PriceAsc)
            .with_pagination(2, 10);

        assert_eq!(query.category.as_deref(), Some("Dairy"));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 10);
        assert!(query.has_filters());
    }

    #[test]
    fn test_normalize_clamps() {
        let query = BrowseQuery::new().with_pagination(0, 0).normalize();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);

        let query = BrowseQuery::new().with_pagination(1, 5000).normalize();
        assert_eq!(query.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_normalize_trims_strings() {
        let query = BrowseQuery::new()
            .with_category("  Dairy ")
            .with_brand("   ")
            .normalize();
        assert_eq!(query.category.as_deref(), Some("Dairy"));
        assert_eq!(query.brand, None);
    }

    #[test]
    fn test_normalize_numbers() {
        let query = BrowseQuery::new()
            .with_price_range(Some(-50.0), Some(f64::NAN))
            .normalize();
        assert_eq!(query.min_price, Some(0.0));
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn test_normalize_idempotent() {
        let query = BrowseQuery::new()
            .with_category("  Grains & Rice ")
            .with_rating(-2.0)
            .with_pagination(0, 900);
        let once = query.normalize();
        let twice = once.clone().normalize();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
    }

    #[test]
    fn test_sort_key_display_names() {
        assert_eq!(SortKey::PriceAsc.display_name(), "Price: Low to High");
        assert_eq!(SortKey::Newest.display_name(), "Newest Arrivals");
    }

    #[test]
    fn test_sort_key_unknown_falls_back() {
        assert_eq!(SortKey::from_str("bogus"), SortKey::NameAsc);
        assert_eq!(SortKey::from_str(""), SortKey::NameAsc);
    }
}
