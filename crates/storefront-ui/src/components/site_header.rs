//! Site Header Component
//!
//! Three-column bar: brand link, search box, category and login links.
//! All destinations come from the static table in `storefront_core::nav`.

use dioxus::prelude::*;
use storefront_core::{category_links, NavLink, HOME_LINK, LOGIN_LINK};

use crate::components::SearchInput;
use crate::tokens;

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    /// Host router hook. When set, link clicks skip the default navigation
    /// and hand the href here instead.
    #[props(default)]
    pub on_navigate: Option<EventHandler<String>>,
    /// Forwarded to the search box
    #[props(default)]
    pub on_search: Option<EventHandler<String>>,
}

/// Persistent top navigation
///
/// - Left: brand link to `/`
/// - Center: search input
/// - Right: category links, then the login link
#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        header { class: tokens::HEADER,
            nav { class: tokens::HEADER_NAV,
                NavAnchor { link: HOME_LINK, on_navigate }
                div { class: tokens::HEADER_SEARCH_CELL,
                    SearchInput { onsearch: props.on_search }
                }
                ul { class: tokens::HEADER_LINK_LIST,
                    for link in category_links() {
                        li { key: "{link.href}",
                            NavAnchor { link, on_navigate }
                        }
                    }
                    li { class: tokens::HEADER_LOGIN_ITEM,
                        NavAnchor { link: LOGIN_LINK, on_navigate }
                    }
                }
            }
        }
    }
}

/// A static link, optionally routed through the host
#[component]
fn NavAnchor(link: NavLink, on_navigate: Option<EventHandler<String>>) -> Element {
    rsx! {
        a {
            href: link.href,
            onclick: move |e| {
                if let Some(handler) = &on_navigate {
                    e.prevent_default();
                    tracing::debug!(href = link.href, "Header navigation");
                    handler.call(link.href.to_string());
                }
            },
            "{link.label}"
        }
    }
}
