//! Visual theme for the Jazz Portal.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;
