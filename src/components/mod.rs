//! UI Components for the portal pages.

mod card_carousel;
mod login_panel;

pub use card_carousel::CardCarousel;
pub use login_panel::LoginPanel;
