//! Page components for the Jazz Portal.

mod landing;
mod services;

pub use landing::Landing;
pub use services::Services;
