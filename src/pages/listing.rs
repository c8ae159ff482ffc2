//! Product listing shared by every catalog page.
//!
//! This is where the card controls get their behavior: favorites toggle the
//! session favorites set, add-to-collection is recorded in the log.

use dioxus::prelude::*;
use storefront_core::{CatalogEntry, Product};
use storefront_ui::{ProductCard, ProductGrid};

use crate::context::{toggle_favorite, use_favorites};

/// Heading plus a grid of product cards, or a message when empty.
///
/// Favorites are keyed by [`CatalogEntry::key`], so items sharing a title
/// (or having none) are favorited separately.
#[component]
pub fn CatalogListing(
    heading: String,
    entries: Vec<CatalogEntry>,
    empty_message: String,
) -> Element {
    let mut favorites = use_favorites();

    rsx! {
        section { class: "py-8",
            h1 { class: "page-heading", "{heading}" }
            if entries.is_empty() {
                p { class: "empty-state", "{empty_message}" }
            } else {
                ProductGrid {
                    for entry in entries.into_iter() {
                        {
                            let key = entry.key();
                            let favorited = favorites.read().contains(&key);
                            let toggle_key = key.clone();
                            rsx! {
                                ProductCard {
                                    key: "{key}",
                                    product: entry.product,
                                    favorited,
                                    on_toggle_favorite: move |p: Product| {
                                        let now = toggle_favorite(&mut favorites.write(), toggle_key.clone());
                                        tracing::info!(key = %toggle_key, product = %p.display_title(), favorited = now, "Favorite toggled");
                                    },
                                    on_add_to_collection: move |p: Product| {
                                        tracing::info!(product = %p.display_title(), price = %p.display_price(), "Add to collection requested");
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use dioxus::dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };

    use super::*;
    use storefront_core::Catalog;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Build the dom and collect the ids of every element with a click listener
    fn mount(app: fn() -> Element) -> (VirtualDom, Vec<ElementId>) {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        let clickable = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();
        (dom, clickable)
    }

    fn click(dom: &mut VirtualDom, id: ElementId) {
        let data: Rc<dyn Any> =
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        dom.runtime().handle_event("click", Event::new(data, true), id);
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
    }

    fn SampleListing() -> Element {
        let favorites: Signal<BTreeSet<String>> =
            use_signal(|| BTreeSet::from(["0-red-hat".to_string()]));
        use_context_provider(|| favorites);

        rsx! {
            CatalogListing {
                heading: "All products".to_string(),
                entries: Catalog::sample().entries(),
                empty_message: "Nothing here".to_string(),
            }
        }
    }

    fn EmptyListing() -> Element {
        let favorites: Signal<BTreeSet<String>> = use_signal(BTreeSet::new);
        use_context_provider(|| favorites);

        rsx! {
            CatalogListing {
                heading: "Furniture".to_string(),
                entries: Vec::new(),
                empty_message: "Nothing here".to_string(),
            }
        }
    }

    /// Two untitled products and two non-Latin titles
    fn lookalike_catalog() -> Catalog {
        Catalog::from_json(r#"[{}, {}, {"title": "Чайник"}, {"title": "日本茶"}]"#)
            .expect("valid catalog")
    }

    fn LookalikeListing() -> Element {
        let favorites: Signal<BTreeSet<String>> = use_signal(BTreeSet::new);
        use_context_provider(|| favorites);

        rsx! {
            CatalogListing {
                heading: "Lookalikes".to_string(),
                entries: lookalike_catalog().entries(),
                empty_message: "Nothing here".to_string(),
            }
        }
    }

    #[test]
    fn renders_one_card_per_product() {
        let html = render(SampleListing);
        let count = Catalog::sample().len();
        assert_eq!(html.matches("group relative space-y-4").count(), count);
        assert!(html.contains("All products"));
        assert!(!html.contains("Nothing here"));
    }

    #[test]
    fn favorites_from_context_are_pressed() {
        let html = render(SampleListing);
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    }

    #[test]
    fn empty_listing_shows_message() {
        let html = render(EmptyListing);
        assert!(html.contains("Nothing here"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn lookalike_products_toggle_independently() {
        let (mut dom, clickable) = mount(LookalikeListing);
        // Favorite and add-to-collection on each of the four cards
        assert_eq!(clickable.len(), 8);

        // Every card's favorite is clicked once. A shared key would cancel
        // the toggles out pairwise.
        for id in &clickable {
            click(&mut dom, *id);
        }
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 4);
        assert_eq!(html.matches(r#"aria-pressed="false""#).count(), 0);

        for id in &clickable {
            click(&mut dom, *id);
        }
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 0);
    }
}
