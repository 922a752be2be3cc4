//! Reusable UI components for the portal.

mod button;
mod feature_card;
mod input;
mod parallax;

pub use button::*;
pub use feature_card::*;
pub use input::*;
pub use parallax::*;
