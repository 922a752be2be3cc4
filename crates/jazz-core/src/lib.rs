//! Jazz Portal Landing Core Library
//!
//! Headless logic behind the portal's landing page.
//!
//! ## Overview
//!
//! The landing page greets visitors, sends signed-in users on to the
//! services area, pages through a carousel of feature cards, smoothly
//! scrolls to a section requested by another page and slowly rotates a
//! decorative background. None of that needs a live renderer: the host
//! document, the clock and the application services are all injected,
//! so every behavior here runs (and is tested) without a window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use jazz_core::*;
//!
//! let clock = ManualClock::new();
//! let services = LandingServices {
//!     auth: Arc::new(SessionAuth::new()),
//!     cache: Arc::new(MemoryCache::new()),
//!     toaster: Arc::new(LogToaster),
//! };
//! let mut landing = LandingController::new(LandingConfig::default(), services, Arc::new(clock.clone()));
//! let mut document = MemoryDocument::new(1280);
//!
//! landing.init(&MemoryNavigator::at("/"), &mut document);
//! clock.advance(std::time::Duration::from_secs(4));
//! landing.run_due(&mut document);
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod controller;
pub mod document;
pub mod error;
pub mod rotator;
pub mod scheduler;
pub mod scroll;
pub mod services;

// Re-exports
pub use carousel::{Carousel, CarouselGeometry, CarouselLayout, CarouselState};
pub use config::LandingConfig;
pub use content::{FeatureCard, LandingCopy, FEATURE_CARDS, LANDING_COPY};
pub use controller::{
    CallToAction, LandingController, LandingJob, LandingServices, LoginPanelState,
};
pub use document::{
    ClassList, Document, ElementMetrics, GeometryProvider, LayerSurface, MemoryDocument,
    ScrollSurface,
};
pub use error::{LandingError, LandingResult};
pub use rotator::BackgroundRotator;
pub use scheduler::{Clock, Fired, ManualClock, Scheduler, SystemClock, TimerId};
pub use scroll::{ScrollAnimation, ScrollAnimator, ScrollTick};
pub use services::{
    AuthenticationService, DataCache, LogToaster, MemoryCache, MemoryNavigator, Navigator,
    SessionAuth, ToastLevel, Toaster, ROOT_ROUTE, SCROLL_FLAG_KEY, SCROLL_ID_KEY,
    SERVICES_ROUTE,
};
