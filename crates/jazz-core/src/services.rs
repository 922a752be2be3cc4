//! Collaborator services consumed by the landing page.
//!
//! The landing controller only needs narrow views of the application's
//! session, router, cache and notification services. Each is a trait
//! here, with a small in-memory implementation used by the desktop shell
//! and by tests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

/// Route the landing page sends signed-in users to
pub const SERVICES_ROUTE: &str = "/services";

/// Root route, where the landing page is mounted
pub const ROOT_ROUTE: &str = "/";

/// Cache key: whether to scroll to a section on load
pub const SCROLL_FLAG_KEY: &str = "scroll_flag";

/// Cache key: id of the section to scroll to
pub const SCROLL_ID_KEY: &str = "scroll_id";

/// Session status.
pub trait AuthenticationService {
    fn is_logged_in(&self) -> bool;
}

/// Router view: current location and navigation.
pub trait Navigator {
    fn current_url(&self) -> String;
    fn navigate_by_url(&self, path: &str);
}

/// Key-value cache shared across pages.
pub trait DataCache {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Notification popups.
pub trait Toaster {
    fn pop(&self, level: ToastLevel, title: &str, body: &str);
}

/// In-memory session holding the signed-in user name.
#[derive(Debug, Clone, Default)]
pub struct SessionAuth {
    user: Arc<RwLock<Option<String>>>,
}

impl SessionAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: impl Into<String>) -> Self {
        let auth = Self::new();
        auth.sign_in(user);
        auth
    }

    pub fn sign_in(&self, user: impl Into<String>) {
        let user = user.into();
        tracing::info!("Session started for {}", user);
        *self.user.write() = Some(user);
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.user.write().take() {
            tracing::info!("Session ended for {}", user);
        }
    }

    pub fn user(&self) -> Option<String> {
        self.user.read().clone()
    }
}

impl AuthenticationService for SessionAuth {
    fn is_logged_in(&self) -> bool {
        self.user.read().is_some()
    }
}

/// In-memory cache of JSON values.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the landing page to scroll to `section_id` on its next load.
    pub fn request_scroll_to(&self, section_id: &str) {
        self.set(SCROLL_FLAG_KEY, Value::Bool(true));
        self.set(SCROLL_ID_KEY, Value::String(section_id.to_string()));
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().remove(key)
    }
}

impl DataCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.write().insert(key.to_string(), value);
    }
}

/// Router stand-in that records navigation.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    history: Arc<RwLock<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn at(url: &str) -> Self {
        Self {
            history: Arc::new(RwLock::new(vec![url.to_string()])),
        }
    }

    /// Every url visited, starting with the initial one.
    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }

    /// Urls navigated to after the initial one.
    pub fn navigations(&self) -> Vec<String> {
        self.history.read().iter().skip(1).cloned().collect()
    }
}

impl Navigator for MemoryNavigator {
    fn current_url(&self) -> String {
        self.history
            .read()
            .last()
            .cloned()
            .unwrap_or_else(|| ROOT_ROUTE.to_string())
    }

    fn navigate_by_url(&self, path: &str) {
        tracing::info!("Navigating to {}", path);
        self.history.write().push(path.to_string());
    }
}

/// Toaster that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogToaster;

impl Toaster for LogToaster {
    fn pop(&self, level: ToastLevel, title: &str, body: &str) {
        match level {
            ToastLevel::Error => tracing::error!(title, "{}", body),
            ToastLevel::Warning => tracing::warn!(title, "{}", body),
            ToastLevel::Info | ToastLevel::Success => tracing::info!(title, "{}", body),
        }
    }
}
