//! Catalog loading
//!
//! The storefront does not own product data. The desktop host reads a JSON
//! file (or the built-in sample) once at startup and hands the products to
//! the pages.
//!
//! Accepted shapes:
//!
//! ```json
//! { "products": [ { "imageUrl": "...", "title": "...", "price": 28 } ] }
//! ```
//!
//! or a bare array of products.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::nav::Category;
use crate::product::Product;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// An ordered list of products
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

/// A product together with its position in the catalog.
///
/// Titles repeat and may be blank, so the position is what identifies an
/// item (e.g. as a favorites key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub position: usize,
    pub product: Product,
}

impl CatalogEntry {
    /// Unique key within one catalog: position, then the slug for
    /// readability (`"0-red-hat"`, or `"3"` for a blank title).
    pub fn key(&self) -> String {
        let slug = self.product.slug();
        if slug.is_empty() {
            self.position.to_string()
        } else {
            format!("{}-{}", self.position, slug)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse catalog JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let products = match serde_json::from_str(json)? {
            CatalogFile::Wrapped { products } => products,
            CatalogFile::Bare(products) => products,
        };
        Ok(Self { products })
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::CatalogNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), count = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The catalog bundled with the binary
    pub fn sample() -> Self {
        match Self::from_json(SAMPLE_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "Bundled sample catalog is malformed");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product with its position
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.select(|_| true)
    }

    /// Products filed under a category, in catalog order
    pub fn in_category(&self, category: Category) -> Vec<CatalogEntry> {
        self.select(|p| category.matches(&p.category))
    }

    /// Case-insensitive substring match on title or category.
    ///
    /// A blank query returns every product.
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries();
        }
        self.select(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
    }

    fn select(&self, keep: impl Fn(&Product) -> bool) -> Vec<CatalogEntry> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| keep(p))
            .map(|(position, p)| CatalogEntry {
                position,
                product: p.clone(),
            })
            .collect()
    }
}
