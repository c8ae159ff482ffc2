//! Shared application state.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! let mut favorites = use_favorites();
//! toggle_favorite(&mut favorites.write(), entry.key());
//! ```

use std::collections::BTreeSet;

use dioxus::prelude::*;
use storefront_core::Catalog;

/// Hook to access the catalog loaded at startup.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

/// Hook to access the set of favorited product slugs.
///
/// Lives for the session only; nothing is persisted.
pub fn use_favorites() -> Signal<BTreeSet<String>> {
    use_context::<Signal<BTreeSet<String>>>()
}

/// Flip a product's favorite flag. Returns whether it is now a favorite.
pub fn toggle_favorite(favorites: &mut BTreeSet<String>, slug: String) -> bool {
    if favorites.remove(&slug) {
        false
    } else {
        favorites.insert(slug);
        true
    }
}
