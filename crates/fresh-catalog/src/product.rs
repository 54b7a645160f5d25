//! Product record and pricing helpers.

use crate::error::CatalogError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Customer rating summary for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average star rating (0.0 - 5.0).
    pub average: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

impl Rating {
    /// Create a rating summary.
    pub fn new(average: f64, count: u32) -> Self {
        Self { average, count }
    }
}

/// A product as supplied by the commerce backend.
///
/// Records are read-only to the storefront: the backend owns inventory,
/// pricing, and ratings. Wire names are camelCase to match the backend's
/// JSON payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name as shown in listings.
    pub name: String,
    /// Category name (controlled vocabulary from the catalog).
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Base price in the store currency's minor display unit.
    pub price: f64,
    /// Discounted price, present when the product is on sale.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Advertised discount percentage, when the backend computed one.
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    /// Whether the product is currently on sale.
    #[serde(default)]
    pub on_sale: bool,
    /// Whether the product is currently in stock.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Customer rating, absent for products with no reviews yet.
    #[serde(default)]
    pub rating: Option<Rating>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// The price the customer actually pays.
    ///
    /// The sale price when the product is on sale and one is set, otherwise
    /// the base price. An on-sale product without a sale price is treated as
    /// not discounted.
    pub fn effective_price(&self) -> f64 {
        if self.on_sale {
            if let Some(sale_price) = self.sale_price {
                return sale_price;
            }
        }
        self.price
    }

    /// Whether the effective price is actually below the base price.
    pub fn is_discounted(&self) -> bool {
        self.effective_price() < self.price
    }

    /// Amount saved versus the base price, zero when not discounted.
    pub fn savings(&self) -> f64 {
        (self.price - self.effective_price()).max(0.0)
    }

    /// Average rating, if the product has any reviews.
    pub fn average_rating(&self) -> Option<f64> {
        self.rating.map(|r| r.average)
    }
}

/// Parse a catalog payload from the backend's JSON array.
pub fn catalog_from_json(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products = serde_json::from_str(json)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, sale_price: Option<f64>, on_sale: bool) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Test Product".to_string(),
            category: "Pantry".to_string(),
            brand: "Acme".to_string(),
            price,
            sale_price,
            discount_percentage: None,
            on_sale,
            in_stock: true,
            rating: None,
        }
    }

    #[test]
    fn test_effective_price_on_sale() {
        let p = product(2000.0, Some(1500.0), true);
        assert_eq!(p.effective_price(), 1500.0);
        assert!(p.is_discounted());
        assert_eq!(p.savings(), 500.0);
    }

    #[test]
    fn test_effective_price_not_on_sale() {
        let p = product(2000.0, Some(1500.0), false);
        assert_eq!(p.effective_price(), 2000.0);
        assert!(!p.is_discounted());
    }

    #[test]
    fn test_effective_price_missing_sale_price() {
        let p = product(2000.0, None, true);
        assert_eq!(p.effective_price(), 2000.0);
        assert_eq!(p.savings(), 0.0);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {
                "id": "p1",
                "name": "Gino Tomato Paste",
                "category": "Cooking Essentials",
                "brand": "Gino",
                "price": 1200.0,
                "salePrice": 950.0,
                "onSale": true,
                "rating": { "average": 4.3, "count": 89 }
            }
        ]"#;

        let catalog = catalog_from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Gino Tomato Paste");
        assert_eq!(catalog[0].effective_price(), 950.0);
        assert!(catalog[0].in_stock);
    }

    #[test]
    fn test_catalog_from_json_malformed() {
        assert!(catalog_from_json("not json").is_err());
    }
}
