//! Error types for the Jazz Portal landing logic

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum LandingError {
    /// A host element lookup by id or class found nothing
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A cached value exists but has the wrong shape
    #[error("Unexpected cache value for '{key}': {found}")]
    CacheValue { key: String, found: String },

    /// Configuration was parsed but is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;
