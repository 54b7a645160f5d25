//! Canonical URL building.
//!
//! The exact inverse of query parsing: for any query `q`,
//! `BrowseQuery::from_query_string(&q.to_query_string()) == q.normalize()`.
//! Field order is fixed and parameters at their default/absent state are
//! omitted, so equivalent queries always produce byte-identical URLs —
//! safe to use as cache keys and stable to share.

use crate::query::{BrowseQuery, SortKey, DEFAULT_PAGE_SIZE};

impl BrowseQuery {
    /// Render the canonical query string, without a leading `?`.
    ///
    /// Empty when every field is at its default.
    pub fn to_query_string(&self) -> String {
        let query = self.clone().normalize();
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        if let Some(brand) = &query.brand {
            params.push(("brand", brand.clone()));
        }
        if let Some(min_price) = query.min_price {
            params.push(("minPrice", format_number(min_price)));
        }
        if let Some(max_price) = query.max_price {
            params.push(("maxPrice", format_number(max_price)));
        }
        if let Some(rating) = query.rating {
            params.push(("rating", format_number(rating)));
        }
        if query.on_sale {
            params.push(("onSale", "true".to_string()));
        }
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }
        if query.sort != SortKey::default() {
            params.push(("sort", query.sort.as_str().to_string()));
        }
        if query.page != 1 {
            params.push(("page", query.page.to_string()));
        }
        if query.limit != DEFAULT_PAGE_SIZE {
            params.push(("limit", query.limit.to_string()));
        }

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, percent_encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Render a relative URL under `base_path`.
    pub fn to_url(&self, base_path: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            base_path.to_string()
        } else {
            format!("{}?{}", base_path, qs)
        }
    }

    /// The same query moved to another page. Used for pagination links.
    pub fn at_page(&self, page: u32) -> Self {
        let mut query = self.clone();
        query.page = page;
        query
    }

    /// The same query with a different sort, reset to the first page.
    pub fn with_sort_reset(&self, sort: SortKey) -> Self {
        let mut query = self.clone();
        query.sort = sort;
        query.page = 1;
        query
    }
}

/// Render a number without a trailing `.0` so integral values stay terse.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Percent-encode everything outside the URL-safe unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
