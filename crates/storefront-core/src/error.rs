//! Error types for the storefront

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for catalog and model operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Catalog file does not exist at the given path
    #[error("Catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    /// Catalog JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Price was negative, NaN or infinite
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StoreError>;
