//! Category page - one header category, e.g. `/fashion`.

use dioxus::prelude::*;
use storefront_core::Category;

use super::listing::CatalogListing;
use super::not_found::NotFoundMessage;
use crate::context::use_catalog;

#[component]
pub fn CategoryPage(category: String) -> Element {
    let catalog = use_catalog();

    let Some(found) = Category::from_slug(&category) else {
        tracing::debug!(%category, "Unknown category");
        return rsx! {
            NotFoundMessage { path: format!("/{}", category) }
        };
    };

    rsx! {
        CatalogListing {
            heading: found.label().to_string(),
            entries: catalog.in_category(found),
            empty_message: format!("No {} products yet.", found.label().to_lowercase()),
        }
    }
}
