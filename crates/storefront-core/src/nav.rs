//! Static navigation table
//!
//! Every destination the header and product cards emit is known at build
//! time. The host router resolves these paths; nothing here navigates.

use std::fmt;

/// Product-detail destination. No detail route exists yet.
pub const PRODUCT_DETAIL_PLACEHOLDER: &str = "#";

/// A labelled static link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Brand link on the left of the header
pub const HOME_LINK: NavLink = NavLink {
    label: "Store",
    href: "/",
};

/// Authentication entry point on the right of the header
pub const LOGIN_LINK: NavLink = NavLink {
    label: "Login",
    href: "/login",
};

/// Top-level catalog categories, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Smartphone,
    Electronic,
    Furniture,
    Fashion,
}

impl Category {
    /// All categories in the order the header lists them
    pub const ALL: [Category; 4] = [
        Category::Smartphone,
        Category::Electronic,
        Category::Furniture,
        Category::Fashion,
    ];

    /// URL path segment
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Smartphone => "smartphone",
            Category::Electronic => "electronic",
            Category::Furniture => "furniture",
            Category::Fashion => "fashion",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Smartphone => "Smartphone",
            Category::Electronic => "Electronic",
            Category::Furniture => "Furniture",
            Category::Fashion => "Fashion",
        }
    }

    /// Absolute path of the category listing
    pub fn path(&self) -> &'static str {
        match self {
            Category::Smartphone => "/smartphone",
            Category::Electronic => "/electronic",
            Category::Furniture => "/furniture",
            Category::Fashion => "/fashion",
        }
    }

    /// Other product category labels filed under this category
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Smartphone => &["smartphones", "phones"],
            Category::Electronic => &["electronics"],
            Category::Furniture => &[],
            Category::Fashion => &["clothing", "apparel"],
        }
    }

    /// Parse a path segment (case-insensitive)
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug.trim()))
    }

    /// Whether a product's free-form category label belongs here
    pub fn matches(&self, label: &str) -> bool {
        let label = label.trim();
        self.slug().eq_ignore_ascii_case(label)
            || self.label().eq_ignore_ascii_case(label)
            || self.aliases().iter().any(|a| a.eq_ignore_ascii_case(label))
    }

    /// Header link for this category
    pub fn link(&self) -> NavLink {
        NavLink {
            label: self.label(),
            href: self.path(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category links in header order
pub fn category_links() -> Vec<NavLink> {
    Category::ALL.iter().map(Category::link).collect()
}
