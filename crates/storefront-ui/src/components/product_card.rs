//! Product Card Component
//!
//! Displays one catalog item: image, title, category, price, and two
//! controls (favorite, add to collection).
//!
//! The card owns no state. The controls only do something when the parent
//! passes `on_toggle_favorite` / `on_add_to_collection`; the rendered markup
//! is the same either way.

use dioxus::prelude::*;
use storefront_core::{Product, PRODUCT_DETAIL_PLACEHOLDER};

use crate::components::{Button, ButtonVariant, Icon, IconKind};
use crate::tokens;

/// Label of the favorite control
pub const FAVORITE_LABEL: &str = "Favorite";

/// Label of the add-to-collection control
pub const ADD_TO_COLLECTION_LABEL: &str = "Add to Collection";

/// Properties for the ProductCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    /// Display data for the item
    pub product: Product,
    /// Product-detail destination
    #[props(default = PRODUCT_DETAIL_PLACEHOLDER.to_string())]
    pub href: String,
    /// Whether the host has this item favorited (`aria-pressed`)
    #[props(default = false)]
    pub favorited: bool,
    /// Called with the product when the heart is clicked
    #[props(default)]
    pub on_toggle_favorite: Option<EventHandler<Product>>,
    /// Called with the product when "Add to Collection" is clicked
    #[props(default)]
    pub on_add_to_collection: Option<EventHandler<Product>>,
}

/// A single product tile
///
/// Missing data renders as placeholders: no image gives an empty figure,
/// a blank title shows "Untitled product", no price shows
/// "Price unavailable".
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProductCard {
///         product: entry.product.clone(),
///         favorited: favorites.read().contains(&entry.key()),
///         on_toggle_favorite: move |_: Product| toggle_favorite(entry.key()),
///     }
/// }
/// ```
#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product.clone();
    let title = product.display_title().to_string();
    let alt = product.display_alt().to_string();
    let price = product.display_price();
    let (width, height) = (tokens::IMAGE_WIDTH, tokens::IMAGE_HEIGHT);

    let on_toggle_favorite = props.on_toggle_favorite;
    let on_add_to_collection = props.on_add_to_collection;
    let favorite_target = product.clone();
    let collection_target = product.clone();

    rsx! {
        div { class: tokens::CARD,
            a { class: tokens::CARD_LINK, href: "{props.href}",
                figure { class: tokens::CARD_FIGURE,
                    if product.has_image() {
                        img {
                            alt: "{alt}",
                            width: "{width}",
                            height: "{height}",
                            class: tokens::CARD_IMAGE,
                            src: "{product.image_url}",
                        }
                    } else {
                        div {
                            class: tokens::CARD_IMAGE_PLACEHOLDER,
                            "role": "img",
                            "aria-label": "{alt}",
                        }
                    }
                }
            }
            div { class: tokens::CARD_META,
                div {
                    h3 { class: tokens::CARD_TITLE, "{title}" }
                    p { class: tokens::CARD_CATEGORY, "{product.category}" }
                }
                p { class: tokens::CARD_PRICE, "{price}" }
            }
            div { class: tokens::CARD_ACTIONS,
                Button {
                    variant: ButtonVariant::Icon,
                    aria_label: FAVORITE_LABEL.to_string(),
                    pressed: props.favorited,
                    onclick: move |_| {
                        if let Some(handler) = &on_toggle_favorite {
                            handler.call(favorite_target.clone());
                        }
                    },
                    Icon { kind: IconKind::Heart }
                }
                Button {
                    variant: ButtonVariant::Wide,
                    onclick: move |_| {
                        if let Some(handler) = &on_add_to_collection {
                            handler.call(collection_target.clone());
                        }
                    },
                    Icon { kind: IconKind::Plus }
                    "{ADD_TO_COLLECTION_LABEL}"
                }
            }
        }
    }
}

/// Responsive grid for a listing of cards
#[component]
pub fn ProductGrid(children: Element) -> Element {
    rsx! {
        div { class: tokens::PRODUCT_GRID,
            {children}
        }
    }
}

