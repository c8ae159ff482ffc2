//! Server-side render tests for the storefront components
//!
//! Components are rendered to HTML with dioxus-ssr and checked on the markup
//! they produce. Event handlers cannot fire here; tests that involve them
//! check that wiring a handler does not change what is rendered.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use storefront_core::{Price, Product};
use storefront_ui::*;

// ============================================================================
// Helpers
// ============================================================================

fn red_hat() -> Product {
    Product::new(
        "https://bundui-images.netlify.app/products/04.jpeg",
        "Red Hat",
        "Red Hat",
        "Clothing",
        Price::from_major(28),
    )
}

fn render_root(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn card_props(product: Product) -> ProductCardProps {
    ProductCardProps {
        product,
        href: "#".to_string(),
        favorited: false,
        on_toggle_favorite: None,
        on_add_to_collection: None,
    }
}

fn render_card(props: ProductCardProps) -> String {
    let mut dom = VirtualDom::new_with_props(ProductCard, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_header() -> String {
    let mut dom = VirtualDom::new_with_props(
        SiteHeader,
        SiteHeaderProps {
            on_navigate: None,
            on_search: None,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

// ============================================================================
// ProductCard
// ============================================================================

#[test]
fn card_shows_title_category_and_price() {
    let html = render_card(card_props(red_hat()));
    assert!(html.contains("Red Hat"));
    assert!(html.contains("Clothing"));
    assert!(html.contains("$28"));
    assert!(html.contains(ADD_TO_COLLECTION_LABEL));
}

#[test]
fn card_image_alt_is_exact() {
    let html = render_card(card_props(red_hat()));
    assert!(html.contains(r#"alt="Red Hat""#));
    assert!(html.contains(r#"src="https://bundui-images.netlify.app/products/04.jpeg""#));
    assert!(html.contains(r#"width="300""#));
    assert!(html.contains(r#"height="500""#));
}

#[test]
fn card_links_to_placeholder_by_default() {
    let html = render_card(card_props(red_hat()));
    assert!(html.contains(r##"href="#""##));

    let mut props = card_props(red_hat());
    props.href = "/products/red-hat".to_string();
    let html = render_card(props);
    assert!(html.contains(r#"href="/products/red-hat""#));
}

#[test]
fn card_renders_two_icon_controls() {
    let html = render_card(card_props(red_hat()));
    assert_eq!(html.matches("<button").count(), 2);
    assert_eq!(html.matches(r#"data-slot="button""#).count(), 2);
    assert!(html.contains("lucide lucide-heart"));
    assert!(html.contains("lucide lucide-plus"));
    assert!(html.contains(r#"aria-label="Favorite""#));
}

#[test]
fn card_render_is_idempotent() {
    let first = render_card(card_props(red_hat()));
    let second = render_card(card_props(red_hat()));
    assert_eq!(first, second);
}

#[test]
fn card_favorited_state_is_aria_pressed() {
    let html = render_card(card_props(red_hat()));
    assert!(html.contains(r#"aria-pressed="false""#));

    let mut props = card_props(red_hat());
    props.favorited = true;
    let html = render_card(props);
    assert!(html.contains(r#"aria-pressed="true""#));
}

#[test]
fn card_with_missing_fields_renders_placeholders() {
    let html = render_card(card_props(Product::default()));
    assert!(html.contains("Untitled product"));
    assert!(html.contains("Price unavailable"));
    assert!(!html.contains("<img"));
    assert!(html.contains(r#"role="img""#));
    assert!(html.contains(r#"aria-label="Untitled product""#));
}

#[test]
fn card_fractional_price() {
    let mut product = red_hat();
    product.price = Some(Price::from_minor(2850));
    let html = render_card(card_props(product));
    assert!(html.contains("$28.50"));
}

fn CardWithoutHandlers() -> Element {
    rsx! {
        ProductCard { product: red_hat() }
    }
}

fn CardWithHandlers() -> Element {
    rsx! {
        ProductCard {
            product: red_hat(),
            on_toggle_favorite: move |_: Product| {},
            on_add_to_collection: move |_: Product| {},
        }
    }
}

#[test]
fn card_handlers_do_not_change_markup() {
    assert_eq!(
        render_root(CardWithoutHandlers),
        render_root(CardWithHandlers)
    );
}

#[test]
fn card_props_default_to_inert_controls() {
    fn DefaultCardProps() -> Element {
        // Optional props left out must come back as their defaults
        let props = ProductCardProps::builder().product(red_hat()).build();
        assert!(props.on_toggle_favorite.is_none());
        assert!(props.on_add_to_collection.is_none());
        assert!(!props.favorited);
        assert_eq!(props.href, "#");
        rsx! {}
    }
    render_root(DefaultCardProps);
}

// ============================================================================
// SiteHeader
// ============================================================================

#[test]
fn header_links_in_order() {
    let html = render_header();
    let expected = [
        r#"href="/""#,
        r#"href="/smartphone""#,
        r#"href="/electronic""#,
        r#"href="/furniture""#,
        r#"href="/fashion""#,
        r#"href="/login""#,
    ];

    let mut cursor = 0;
    for href in expected {
        let pos = html[cursor..]
            .find(href)
            .unwrap_or_else(|| panic!("{} missing or out of order in {}", href, html));
        cursor += pos + href.len();
    }
    assert_eq!(html.matches("<a ").count(), expected.len());
}

#[test]
fn header_login_does_not_reuse_furniture() {
    let html = render_header();
    assert_eq!(html.matches(r#"href="/furniture""#).count(), 1);
    assert!(html.contains(">Login</a>"));
}

#[test]
fn header_has_named_search_input() {
    let html = render_header();
    assert!(html.contains(r#"name="search""#));
    assert!(html.contains(r#"type="search""#));
    assert!(html.contains(r#"placeholder="Search product...""#));
    assert_eq!(html.matches("<input").count(), 1);
}

#[test]
fn header_labels() {
    let html = render_header();
    for label in ["Store", "Smartphone", "Electronic", "Furniture", "Fashion", "Login"] {
        assert!(html.contains(&format!(">{}</a>", label)), "missing {}", label);
    }
}

fn HeaderWithRouting() -> Element {
    rsx! {
        SiteHeader {
            on_navigate: move |_: String| {},
            on_search: move |_: String| {},
        }
    }
}

#[test]
fn header_routing_hook_does_not_change_markup() {
    assert_eq!(render_header(), render_root(HeaderWithRouting));
}

// ============================================================================
// MainLayout
// ============================================================================

fn LayoutMinimal() -> Element {
    rsx! {
        MainLayout {
            span {}
        }
    }
}

fn LayoutWithText() -> Element {
    rsx! {
        MainLayout {
            p { "hello storefront" }
        }
    }
}

fn LayoutWithGrid() -> Element {
    rsx! {
        MainLayout {
            ProductGrid {
                ProductCard { product: red_hat() }
                ProductCard { product: Product::default() }
            }
        }
    }
}

fn assert_single_header_then_main(html: &str) {
    assert_eq!(html.matches("<header").count(), 1, "{}", html);
    assert_eq!(html.matches("<main").count(), 1, "{}", html);
    let header = html.find("<header").unwrap_or(usize::MAX);
    let main = html.find("<main").unwrap_or(0);
    assert!(header < main, "header must precede main: {}", html);
}

#[test]
fn layout_places_header_before_main() {
    let apps: [fn() -> Element; 3] = [LayoutMinimal, LayoutWithText, LayoutWithGrid];
    for app in apps {
        assert_single_header_then_main(&render_root(app));
    }
}

#[test]
fn layout_passes_content_through_inside_main() {
    let html = render_root(LayoutWithText);
    let main = html.find("<main").unwrap();
    let content = html.find("<p>hello storefront</p>").unwrap();
    assert!(content > main);
    assert!(html.contains(r#"class="container m-auto""#));
}

#[test]
fn layout_grid_renders_every_card() {
    let html = render_root(LayoutWithGrid);
    assert_eq!(html.matches("group relative space-y-4").count(), 2);
    assert!(html.contains("$28"));
    assert!(html.contains("Untitled product"));
}
