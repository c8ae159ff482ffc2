//! Main Layout Component
//!
//! Page shell: one `SiteHeader`, then one centered `main` region holding the
//! page content as given.

use dioxus::prelude::*;

use crate::components::SiteHeader;
use crate::tokens;

/// Wraps page content below the site header
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MainLayout {
///         on_navigate: move |href: String| { navigator().push(href); },
///         ProductGrid {
///             for product in products {
///                 ProductCard { product }
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn MainLayout(
    /// Page content, rendered unmodified
    children: Element,
    /// Passed to the header links
    #[props(default)]
    on_navigate: Option<EventHandler<String>>,
    /// Passed to the header search box
    #[props(default)]
    on_search: Option<EventHandler<String>>,
) -> Element {
    rsx! {
        SiteHeader { on_navigate, on_search }
        main { class: tokens::MAIN,
            {children}
        }
    }
}
