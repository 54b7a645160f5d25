//! Sample catalog data.
//!
//! The same 8 grocery products the storefront ships as mock data, used by
//! tests and doc examples. Ordered newest-first, the order the backend
//! returns listings in.

use crate::ids::ProductId;
use crate::product::{Product, Rating};

fn product(
    id: &str,
    name: &str,
    category: &str,
    brand: &str,
    price: f64,
    sale_price: Option<f64>,
    discount_percentage: Option<f64>,
    rating: Option<Rating>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        price,
        sale_price,
        discount_percentage,
        on_sale: sale_price.is_some(),
        in_stock: true,
        rating,
    }
}

/// The 8-product sample catalog.
///
/// Exactly 3 products are on sale and exactly 3 have an effective price in
/// the 10000-20000 band. One product has no reviews yet.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(
            "prod-001",
            "Dangote Rice Premium Quality",
            "Grains & Rice",
            "Dangote",
            52000.0,
            Some(48500.0),
            Some(7.0),
            Some(Rating::new(4.7, 214)),
        ),
        product(
            "prod-002",
            "Gino Tomato Paste",
            "Cooking Essentials",
            "Gino",
            1200.0,
            Some(950.0),
            Some(21.0),
            Some(Rating::new(4.3, 89)),
        ),
        product(
            "prod-003",
            "Nestle Golden Morn Cereal",
            "Breakfast",
            "Nestle",
            3500.0,
            Some(2800.0),
            Some(20.0),
            Some(Rating::new(4.5, 156)),
        ),
        product(
            "prod-004",
            "Indomie Instant Noodles Carton",
            "Noodles & Pasta",
            "Indomie",
            11200.0,
            None,
            None,
            Some(Rating::new(4.8, 402)),
        ),
        product(
            "prod-005",
            "Peak Milk Powder Refill",
            "Dairy",
            "Peak",
            18500.0,
            None,
            None,
            Some(Rating::new(4.6, 230)),
        ),
        product(
            "prod-006",
            "Mamador Pure Vegetable Oil",
            "Cooking Essentials",
            "Mamador",
            9800.0,
            None,
            None,
            None,
        ),
        product(
            "prod-007",
            "Golden Penny Semovita",
            "Grains & Rice",
            "Golden Penny",
            14700.0,
            None,
            None,
            Some(Rating::new(3.9, 64)),
        ),
        product(
            "prod-008",
            "Milo Chocolate Malt Drink",
            "Breakfast",
            "Nestle",
            21500.0,
            None,
            None,
            Some(Rating::new(4.4, 178)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.iter().filter(|p| p.on_sale).count(), 3);
        assert_eq!(catalog.iter().filter(|p| p.rating.is_none()).count(), 1);
    }

    #[test]
    fn test_sample_catalog_price_band() {
        let catalog = sample_catalog();
        let in_band = catalog
            .iter()
            .filter(|p| {
                let price = p.effective_price();
                (10000.0..=20000.0).contains(&price)
            })
            .count();
        assert_eq!(in_band, 3);
    }

    #[test]
    fn test_sale_products_have_sale_price() {
        for p in sample_catalog() {
            if p.on_sale {
                let sale_price = p.sale_price.unwrap();
                assert!(sale_price < p.price);
                assert_eq!(p.effective_price(), sale_price);
            }
        }
    }
}
