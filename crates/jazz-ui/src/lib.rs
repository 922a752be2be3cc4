//! Jazz Portal UI Components
//!
//! Dioxus components shared by the portal pages: buttons, form inputs,
//! the carousel feature card and the parallax background. Components are
//! purely presentational; state lives in `jazz-core` and in the pages
//! that own it.

pub mod components;

pub use components::*;
