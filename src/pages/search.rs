//! Search results page.

use dioxus::prelude::*;

use super::listing::CatalogListing;
use crate::context::use_catalog;

#[component]
pub fn SearchResults(query: String) -> Element {
    let catalog = use_catalog();
    let entries = catalog.search(&query);
    tracing::debug!(%query, hits = entries.len(), "Catalog search");

    rsx! {
        CatalogListing {
            heading: format!("Results for \"{}\"", query),
            entries,
            empty_message: "No products match your search.".to_string(),
        }
    }
}
