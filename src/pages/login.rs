//! Login page.
//!
//! Sign-in is delegated to an external identity provider; this page only
//! marks the destination of the header's login link.

use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "py-8",
            h1 { class: "page-heading", "Login" }
            p { class: "empty-state", "Sign-in is not available in this build." }
        }
    }
}
