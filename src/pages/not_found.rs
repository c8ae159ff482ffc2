//! Fallback for paths no route claims.

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundMessage { path: format!("/{}", segments.join("/")) }
    }
}

/// Shared "nothing here" block, also used for unknown categories.
#[component]
pub fn NotFoundMessage(path: String) -> Element {
    rsx! {
        section { class: "py-8",
            h1 { class: "page-heading", "Page not found" }
            p { class: "empty-state", "Nothing lives at {path}." }
        }
    }
}
