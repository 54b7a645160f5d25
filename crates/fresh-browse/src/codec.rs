//! Query-parameter parsing.
//!
//! Parsing never fails: malformed values degrade to "unconstrained" and
//! unrecognized keys are ignored, so a shared or hand-edited URL always
//! yields a usable query.

use crate::query::{BrowseQuery, SortKey, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

impl BrowseQuery {
    /// Parse a query from raw key/value pairs.
    ///
    /// Each recognized key (`category`, `brand`, `minPrice`, `maxPrice`,
    /// `rating`, `onSale`, `search`, `sort`, `page`, `limit`) is read
    /// independently; when a key repeats, the first occurrence wins. The
    /// result is normalized.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = BrowseQuery::default();
        let mut seen = std::collections::HashSet::new();

        for (key, value) in pairs {
            if !seen.insert(key.to_string()) {
                continue;
            }
            match key {
                "category" => query.category = Some(value.to_string()),
                "brand" => query.brand = Some(value.to_string()),
                "minPrice" => query.min_price = parse_number(value),
                "maxPrice" => query.max_price = parse_number(value),
                "rating" => query.rating = parse_number(value),
                "onSale" => query.on_sale = value == "true",
                "search" => query.search = Some(value.to_string()),
                "sort" => query.sort = SortKey::from_str(value),
                "page" => query.page = parse_page(value),
                "limit" => query.limit = parse_limit(value),
                _ => {}
            }
        }

        query.normalize()
    }

    /// Parse a query from a raw query string, with or without a leading `?`.
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let pairs: Vec<(String, String)> = qs
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                (percent_decode(key), percent_decode(value))
            })
            .collect();

        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Parse a numeric filter value. Anything that is not a finite number is
/// treated as absent.
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_page(value: &str) -> u32 {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .map(|p| p.clamp(1, u32::MAX as i64) as u32)
        .unwrap_or(1)
}

fn parse_limit(value: &str) -> u32 {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .map(|l| l.clamp(1, MAX_PAGE_SIZE as i64) as u32)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Decode percent-escapes and `+` as space. Malformed escapes pass through
/// literally rather than failing.
pub(crate) fn percent_decode(s: &str) -> String {
    let raw = s.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        match raw[i] {
            b'%' => {
                let decoded = raw
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match decoded {
                    Some(byte) => {
                        bytes.push(byte);
                        i += 3;
                    }
                    None => {
                        bytes.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                bytes.push(b' ');
                i += 1;
            }
            byte => {
                bytes.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
