//! Product display projection
//!
//! The subset of catalog data a product card needs. Produced by the catalog
//! collaborator per render and never mutated by the view layer.

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Title shown when a product arrives without one
pub const UNTITLED_PRODUCT: &str = "Untitled product";

/// Price text shown when a product arrives without a price
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// Read-only display data for one catalog item.
///
/// Every field defaults when absent from the source data so an incomplete
/// record still renders, with placeholders in place of the missing parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Image location, resolved by the host's image service
    pub image_url: String,
    /// Accessible description of the image
    pub alt_text: String,
    pub title: String,
    /// Free-form category label (e.g. "Clothing")
    pub category: String,
    pub price: Option<Price>,
}

impl Product {
    /// Create a fully populated product
    pub fn new(
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: title.into(),
            category: category.into(),
            price: Some(price),
        }
    }

    /// Title, or a placeholder when blank
    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or(UNTITLED_PRODUCT)
    }

    /// Alt text, falling back to the display title
    pub fn display_alt(&self) -> &str {
        non_blank(&self.alt_text).unwrap_or_else(|| self.display_title())
    }

    /// Formatted price, or a placeholder when unknown
    pub fn display_price(&self) -> String {
        match self.price {
            Some(price) => price.to_string(),
            None => PRICE_UNAVAILABLE.to_string(),
        }
    }

    /// Whether there is an image to request
    pub fn has_image(&self) -> bool {
        non_blank(&self.image_url).is_some()
    }

    /// Readable key derived from the title.
    ///
    /// Lowercase alphanumerics (any script) separated by single dashes, so
    /// "Red Hat (XL)" becomes "red-hat-xl" and "Чайник" becomes "чайник".
    /// Not unique: equal or blank titles give equal slugs. Use
    /// `CatalogEntry::key` to tell catalog items apart.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for ch in self.title.chars() {
            if ch.is_alphanumeric() {
                slug.extend(ch.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
