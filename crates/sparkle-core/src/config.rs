//! Runtime configuration for the emitter.
//!
//! Defaults come from `constants.rs`. The web front-end layers per-page
//! overrides on top through [`SparkleConfig::with_overrides`], which takes a
//! lookup closure so the parsing stays testable without a DOM.

use crate::constants::*;
use crate::easing::Ease;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown ease `{0}`")]
    UnknownEase(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidNumber { key: &'static str, value: String },
    #[error("throttle interval must be finite and >= 0, got {0}")]
    BadThrottle(f64),
    #[error("duration must be finite and > 0, got {0}")]
    BadDuration(f32),
    #[error("glyph must not be empty")]
    EmptyGlyph,
}

// Attribute keys, as read from the layer's `dataset` (camelCase).
pub const KEY_THROTTLE_MS: &str = "throttleMs";
pub const KEY_DURATION: &str = "duration";
pub const KEY_EASE: &str = "ease";
pub const KEY_GLYPH: &str = "glyph";

#[derive(Clone, Debug, PartialEq)]
pub struct SparkleConfig {
    pub throttle_ms: f64,
    pub duration_sec: f32,
    pub ease: Ease,
    pub glyph: String,
    pub class_name: String,
    pub start_scale: f32,
    pub start_opacity: f32,
    pub end_scale: f32,
    pub end_opacity: f32,
    pub rise_base: f32,
    pub rise_jitter: f32,
    pub drift_max: f32,
    pub rotation_max_deg: f32,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            throttle_ms: THROTTLE_MS,
            duration_sec: DURATION_SEC,
            ease: DEFAULT_EASE,
            glyph: SPARKLE_GLYPH.to_string(),
            class_name: SPARKLE_CLASS.to_string(),
            start_scale: START_SCALE,
            start_opacity: START_OPACITY,
            end_scale: END_SCALE,
            end_opacity: END_OPACITY,
            rise_base: RISE_BASE_PX,
            rise_jitter: RISE_JITTER_PX,
            drift_max: DRIFT_MAX_PX,
            rotation_max_deg: ROTATION_MAX_DEG,
        }
    }
}

impl SparkleConfig {
    /// Apply overrides found through `lookup` on top of `self`.
    ///
    /// Keys that are absent keep their current value. The result is
    /// validated before it is returned.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(KEY_THROTTLE_MS) {
            self.throttle_ms = parse_number(KEY_THROTTLE_MS, &v)?;
        }
        if let Some(v) = lookup(KEY_DURATION) {
            self.duration_sec = parse_number(KEY_DURATION, &v)?;
        }
        if let Some(v) = lookup(KEY_EASE) {
            self.ease = v.parse()?;
        }
        if let Some(v) = lookup(KEY_GLYPH) {
            self.glyph = v;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.throttle_ms.is_finite() || self.throttle_ms < 0.0 {
            return Err(ConfigError::BadThrottle(self.throttle_ms));
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(ConfigError::BadDuration(self.duration_sec));
        }
        if self.glyph.is_empty() {
            return Err(ConfigError::EmptyGlyph);
        }
        Ok(())
    }

    /// Transition length, rounded to whole microseconds so that `0.8` is
    /// exactly 800ms rather than the nearest f32.
    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_micros((f64::from(self.duration_sec) * 1e6).round() as u64)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
