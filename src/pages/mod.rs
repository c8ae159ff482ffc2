//! Page components for the storefront.

mod category;
mod home;
mod listing;
mod login;
mod not_found;
mod search;

pub use category::CategoryPage;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use search::SearchResults;
