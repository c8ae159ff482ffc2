//! Style tokens
//!
//! Utility class strings are a structural contract with the host stylesheet.
//! They are kept here as named constants so components stay readable and
//! tests can assert on them.

// === Image hints passed to the image service ===
pub const IMAGE_WIDTH: u32 = 300;
pub const IMAGE_HEIGHT: u32 = 500;

// === MainLayout ===
pub const MAIN: &str = "container m-auto";

// === SiteHeader ===
pub const HEADER: &str = "py-4 border-b border-solid";
pub const HEADER_NAV: &str = "container m-auto grid grid-cols-3";
pub const HEADER_SEARCH_CELL: &str = "flex justify-between";
pub const HEADER_LINK_LIST: &str = "list-none flex justify-end gap-4 items-center";
pub const HEADER_LOGIN_ITEM: &str = "ml-6";

// === SearchInput ===
pub const SEARCH_INPUT: &str = "flex h-9 w-full min-w-0 rounded-md border border-input bg-transparent px-3 py-1 text-base shadow-xs outline-none placeholder:text-muted-foreground focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] md:text-sm";
pub const SEARCH_PLACEHOLDER: &str = "Search product...";

// === ProductCard ===
pub const CARD: &str = "group relative space-y-4 md:w-[280px]";
pub const CARD_LINK: &str = "block";
pub const CARD_FIGURE: &str = "group-hover:opacity-90";
pub const CARD_IMAGE: &str = "aspect-square w-full rounded-lg";
pub const CARD_IMAGE_PLACEHOLDER: &str = "aspect-square w-full rounded-lg bg-muted";
pub const CARD_META: &str = "flex justify-between";
pub const CARD_TITLE: &str = "text-lg font-medium";
pub const CARD_CATEGORY: &str = "text-muted-foreground text-sm";
pub const CARD_PRICE: &str = "text-lg font-medium";
pub const CARD_ACTIONS: &str = "flex gap-4";

// === ProductGrid ===
pub const PRODUCT_GRID: &str = "grid grid-cols-1 gap-8 py-8 sm:grid-cols-2 lg:grid-cols-4";

// === Buttons ===
pub const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground dark:bg-input/30 dark:border-input dark:hover:bg-input/50";
// `shrink-0` belongs to the icon button only; the wide button must flex.
pub const BUTTON_ICON: &str = "shrink-0 size-9";
pub const BUTTON_WIDE: &str = "h-9 px-4 py-2 has-[>svg]:px-3 flex-1";
