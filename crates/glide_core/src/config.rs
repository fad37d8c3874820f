//! Carousel configuration.

use crate::{
    AMPLIFICATION, COMMIT_THRESHOLD, DEFAULT_ACTIVE_CLASS, DEFAULT_TRANSITION,
    RESIZE_DEBOUNCE_MS, RESIZE_SETTLE_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid carousel config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Amplification must be finite and positive, got {0}")]
    InvalidAmplification(f64),

    #[error("Commit threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("Active class must not be empty")]
    EmptyActiveClass,
}

/// Tunables for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Pointer pixels to track pixels.
    pub amplification: f64,

    /// Amplified movement a drag must strictly exceed to change panel.
    pub commit_threshold: f64,

    /// Resize debounce window (ms).
    pub resize_debounce_ms: u64,

    /// Delay of the follow-up re-layout after a debounced resize (ms).
    pub resize_settle_ms: u64,

    /// Class marking the active panel and dot.
    pub active_class: String,

    /// CSS transition used when the track is not being dragged.
    pub transition: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            amplification: AMPLIFICATION,
            commit_threshold: COMMIT_THRESHOLD,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            resize_settle_ms: RESIZE_SETTLE_MS,
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            transition: DEFAULT_TRANSITION.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.amplification.is_finite() || self.amplification <= 0.0 {
            return Err(ConfigError::InvalidAmplification(self.amplification));
        }
        if !self.commit_threshold.is_finite() || self.commit_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.commit_threshold));
        }
        if self.active_class.trim().is_empty() {
            return Err(ConfigError::EmptyActiveClass);
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn resize_settle(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms)
    }

    /// Builder-style override of the active class.
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }
}
