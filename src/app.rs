use std::collections::BTreeSet;

use dioxus::prelude::*;
use storefront_ui::MainLayout;

use crate::pages::{CategoryPage, Home, Login, NotFound, SearchResults};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - every product in the catalog
/// - `/login` - sign-in entry point
/// - `/search/:query` - catalog search results
/// - `/:category` - one category listing (`/smartphone`, `/fashion`, ...)
///
/// All routes render inside [`StoreLayout`].
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/search/:query")]
        SearchResults { query: String },
        #[route("/:category")]
        CategoryPage { category: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, favorites state, and routing. The catalog itself
/// is injected as root context by `main`.
#[component]
pub fn App() -> Element {
    let favorites: Signal<BTreeSet<String>> = use_signal(BTreeSet::new);
    use_context_provider(|| favorites);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Shared page shell: routes header links and searches through the router.
#[component]
fn StoreLayout() -> Element {
    let navigator = use_navigator();

    let on_navigate = move |href: String| match href.parse::<Route>() {
        Ok(route) => {
            navigator.push(route);
        }
        Err(e) => {
            tracing::warn!(%href, "Unroutable link: {}", e);
        }
    };

    let on_search = move |query: String| {
        let query = query.trim().to_string();
        tracing::debug!(%query, "Search submitted");
        if query.is_empty() {
            navigator.push(Route::Home {});
        } else {
            navigator.push(Route::SearchResults { query });
        }
    };

    rsx! {
        MainLayout { on_navigate, on_search,
            Outlet::<Route> {}
        }
    }
}
