//! Reusable storefront components
//!
//! Primitives (`Button`, `Icon`, `SearchInput`) compose into the three page
//! components (`SiteHeader`, `MainLayout`, `ProductCard`).

mod button;
mod icon;
mod input;
mod main_layout;
mod product_card;
mod site_header;

pub use button::*;
pub use icon::*;
pub use input::*;
pub use main_layout::*;
pub use product_card::*;
pub use site_header::*;
