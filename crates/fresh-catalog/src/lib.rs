//! Product catalog types for the FreshCart storefront.
//!
//! This crate models the product records the hosted commerce backend hands
//! to the storefront: the [`Product`] shape, its [`Rating`], and the
//! effective-price rule that every listing surface prices against. The
//! catalog is read-only from the storefront's point of view; records are
//! fetched per request and never mutated.
//!
//! # Example
//!
//! ```
//! use fresh_catalog::fixtures::sample_catalog;
//!
//! let catalog = sample_catalog();
//! let on_sale = catalog.iter().filter(|p| p.on_sale).count();
//! assert_eq!(on_sale, 3);
//! ```

pub mod error;
pub mod fixtures;
pub mod ids;
pub mod product;

pub use error::CatalogError;
pub use ids::ProductId;
pub use product::{catalog_from_json, Product, Rating};
