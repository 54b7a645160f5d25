//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while ingesting catalog data.
///
/// The browse pipeline itself is total and never returns errors; only
/// loading a catalog payload from the backend can fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog payload could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
