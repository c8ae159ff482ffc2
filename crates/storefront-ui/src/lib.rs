//! Storefront UI Components
//!
//! Dioxus components for a catalog listing page:
//!
//! - [`MainLayout`]: page shell, header on top and a centered content region
//! - [`SiteHeader`]: brand link, search box, category links, login link
//! - [`ProductCard`]: one catalog item with favorite and add-to-collection
//!   controls
//!
//! Every component is a pure function of its props. Behavior enters only
//! through optional `EventHandler` props; when a host leaves them unset the
//! controls render identically and do nothing when activated.
//!
//! ## Styling
//!
//! Components emit utility class names from [`tokens`]. The stylesheet that
//! gives those names meaning belongs to the host.

pub mod components;
pub mod tokens;

pub use components::*;
