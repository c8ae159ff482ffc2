//! Home page - the whole catalog.

use dioxus::prelude::*;

use super::listing::CatalogListing;
use crate::context::use_catalog;

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();

    rsx! {
        CatalogListing {
            heading: "All products".to_string(),
            entries: catalog.entries(),
            empty_message: "The catalog is empty.".to_string(),
        }
    }
}
