//! Portal context provider.
//!
//! Provides the application services to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(crate::startup_context);
//!
//! // In child components
//! let portal = use_portal();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use jazz_core::{LandingConfig, LandingServices, LogToaster, MemoryCache, SessionAuth};

/// Services and settings shared by every page.
///
/// The session and cache are cheap handles over shared state, so clones
/// handed to different pages observe the same sign-in and cached values.
#[derive(Clone)]
pub struct PortalContext {
    pub config: LandingConfig,
    pub session: SessionAuth,
    pub cache: MemoryCache,
    pub toaster: LogToaster,
}

impl PortalContext {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config,
            session: SessionAuth::new(),
            cache: MemoryCache::new(),
            toaster: LogToaster,
        }
    }

    /// Service handles for a landing controller.
    pub fn landing_services(&self) -> LandingServices {
        LandingServices {
            auth: Arc::new(self.session.clone()),
            cache: Arc::new(self.cache.clone()),
            toaster: Arc::new(self.toaster),
        }
    }
}

/// Hook to access the portal services from context.
pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>()
}
