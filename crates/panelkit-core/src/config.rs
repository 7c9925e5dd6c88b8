//! Scrub tuning configuration.

use crate::input::Modifiers;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default pixels of motion per `step` of change.
pub const DEFAULT_COARSE_DIVISOR: f64 = 50.0;
/// Default divisor while shift is held.
pub const DEFAULT_FINE_DIVISOR: f64 = 5.0;
/// Default accumulated distance below which a press/release is a click.
pub const DEFAULT_CLICK_THRESHOLD: f64 = 2.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid scrub config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// How pointer distance maps onto value changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Divisor applied to accumulated distance without modifiers.
    pub coarse_divisor: f64,
    /// Divisor applied while shift is held. Smaller means faster change.
    pub fine_divisor: f64,
    /// Gestures with `|distance|` below this are clicks.
    pub click_threshold: f64,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            coarse_divisor: DEFAULT_COARSE_DIVISOR,
            fine_divisor: DEFAULT_FINE_DIVISOR,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
        }
    }
}

impl ScrubConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("coarse_divisor", self.coarse_divisor),
            ("fine_divisor", self.fine_divisor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.click_threshold.is_finite() && self.click_threshold >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "click_threshold",
                value: self.click_threshold,
            });
        }
        Ok(())
    }

    /// Divisor for the given modifier state.
    pub fn divisor(&self, modifiers: Modifiers) -> f64 {
        if modifiers.shift {
            self.fine_divisor
        } else {
            self.coarse_divisor
        }
    }

    /// Whether a gesture that accumulated `distance` counts as a click.
    pub fn is_click(&self, distance: f64) -> bool {
        distance.abs() < self.click_threshold
    }
}
