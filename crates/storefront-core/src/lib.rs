//! Storefront Core Library
//!
//! The display model behind the storefront view layer.
//!
//! ## Overview
//!
//! Nothing in here renders markup. The crate holds the read-only product
//! projection handed to `ProductCard`, the price type it formats, the static
//! navigation table shared by the header and the router, and a small catalog
//! loader the desktop host uses as its data source.
//!
//! ## Quick Start
//!
//! ```ignore
//! use storefront_core::{Catalog, Category};
//!
//! let catalog = Catalog::sample();
//! for entry in catalog.in_category(Category::Fashion) {
//!     let product = &entry.product;
//!     println!("{} - {}", product.display_title(), product.display_price());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod nav;
pub mod price;
pub mod product;

// Re-exports
pub use catalog::{Catalog, CatalogEntry};
pub use error::{Result, StoreError};
pub use nav::{
    category_links, Category, NavLink, HOME_LINK, LOGIN_LINK, PRODUCT_DETAIL_PLACEHOLDER,
};
pub use price::Price;
pub use product::Product;
