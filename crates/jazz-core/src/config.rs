//! Landing page configuration.
//!
//! Every timing constant, layout threshold and host element name the
//! landing controller relies on lives here. All fields have defaults, so
//! a config file only needs the values it overrides:
//!
//! ```json
//! { "rotator_interval_ms": 6000, "background_frames": 5 }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LandingError, LandingResult};

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "landing.json";

/// Tunables for the landing controller and its host elements
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Interval between smooth-scroll samples
    pub scroll_tick_ms: u64,
    /// Duration of the scroll-to-section animation started on init
    pub scroll_duration_ms: u64,
    /// Delay before the header loses its top padding
    pub header_delay_ms: u64,
    /// Interval between background layer swaps
    pub rotator_interval_ms: u64,
    /// Number of background frames (ids cycle over `bg1..bg{frames-1}`)
    pub background_frames: u32,
    /// Viewports strictly wider than this show four cards at once
    pub wide_breakpoint: i32,
    /// Horizontal gap between carousel cards, in pixels
    pub card_gap: i32,
    /// Idle session timeout handed to the application shell
    pub idle_timeout_secs: u64,
    /// Id of the element whose children are the carousel cards
    pub track_id: String,
    /// Id of the card measured for the item width
    pub reference_card_id: String,
    /// Id of the header that receives the deferred class
    pub header_id: String,
    /// Class appended to the header after the delay
    pub header_class: String,
    /// Class of the decorative layer whose id is rotated
    pub parallax_class: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_tick_ms: 10,
            scroll_duration_ms: 600,
            header_delay_ms: 700,
            rotator_interval_ms: 4000,
            background_frames: 4,
            wide_breakpoint: 840,
            card_gap: 3,
            idle_timeout_secs: 60 * 10,
            track_id: "scroll-me".to_string(),
            reference_card_id: "first-card".to_string(),
            header_id: "head-text".to_string(),
            header_class: "no-padding".to_string(),
            parallax_class: "parallax-2".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> LandingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<Path>) -> LandingResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jazz-portal").join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, else the default path when it exists,
    /// else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> LandingResult<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading landing config from {:?}", path);
                Self::from_path(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject values the timers and rotator cannot work with.
    pub fn validate(&self) -> LandingResult<()> {
        if self.scroll_tick_ms == 0 {
            return Err(LandingError::InvalidConfig(
                "scroll_tick_ms must be greater than zero".to_string(),
            ));
        }
        if self.rotator_interval_ms == 0 {
            return Err(LandingError::InvalidConfig(
                "rotator_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.background_frames < 2 {
            return Err(LandingError::InvalidConfig(format!(
                "background_frames must be at least 2, got {}",
                self.background_frames
            )));
        }
        if self.card_gap < 0 {
            return Err(LandingError::InvalidConfig(
                "card_gap cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scroll_tick(&self) -> Duration {
        Duration::from_millis(self.scroll_tick_ms)
    }

    pub fn header_delay(&self) -> Duration {
        Duration::from_millis(self.header_delay_ms)
    }

    pub fn rotator_interval(&self) -> Duration {
        Duration::from_millis(self.rotator_interval_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_behavior() {
        let config = LandingConfig::default();
        assert_eq!(config.scroll_duration_ms, 600);
        assert_eq!(config.header_delay(), Duration::from_millis(700));
        assert_eq!(config.rotator_interval(), Duration::from_secs(4));
        assert_eq!(config.background_frames, 4);
        assert_eq!(config.wide_breakpoint, 840);
        assert_eq!(config.card_gap, 3);
        assert_eq!(config.idle_timeout(), Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = LandingConfig::from_json_str(r#"{ "background_frames": 6 }"#).unwrap();
        assert_eq!(config.background_frames, 6);
        assert_eq!(config.rotator_interval_ms, 4000);
        assert_eq!(config.track_id, "scroll-me");
    }

    #[test]
    fn rejects_too_few_frames() {
        let err = LandingConfig::from_json_str(r#"{ "background_frames": 1 }"#).unwrap_err();
        assert!(matches!(err, LandingError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_tick() {
        let err = LandingConfig::from_json_str(r#"{ "scroll_tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, LandingError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LandingConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let err = LandingConfig::load(Some(Path::new("/nonexistent/jazz/landing.json")))
            .unwrap_err();
        assert!(matches!(err, LandingError::Io(_)));
    }
}
