//! Lucide stroke icons
//!
//! Geometry is copied from the Lucide set (24x24 viewbox, 2px round
//! strokes). Icons are decorative; the enclosing control carries the label.

use dioxus::prelude::*;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const HEART_PATHS: &[&str] = &[
    "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
];

const PLUS_PATHS: &[&str] = &["M5 12h14", "M12 5v14"];

/// Available icons
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Heart,
    Plus,
}

impl IconKind {
    /// Returns the CSS class for this icon
    pub fn class(&self) -> &'static str {
        match self {
            IconKind::Heart => "lucide lucide-heart",
            IconKind::Plus => "lucide lucide-plus",
        }
    }

    /// SVG path data, drawn in order
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Heart => HEART_PATHS,
            IconKind::Plus => PLUS_PATHS,
        }
    }
}

/// Inline SVG icon
#[component]
pub fn Icon(kind: IconKind) -> Element {
    rsx! {
        svg {
            "xmlns": SVG_NS,
            "width": "24",
            "height": "24",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            class: kind.class(),
            "aria-hidden": "true",
            for d in kind.paths().iter() {
                path { "d": *d }
            }
        }
    }
}
