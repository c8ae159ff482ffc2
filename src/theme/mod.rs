//! Visual theme: the stylesheet behind the components' utility classes.

mod styles;

pub use styles::GLOBAL_STYLES;
