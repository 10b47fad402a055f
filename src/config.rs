//! Lash configuration and its validation rules.
//!
//! [`LashConfig`] is plain data: it can be built in code, filled from
//! defaults, or deserialised from JSON. [`LashConfig::validate`] enforces the
//! ranges the simulator relies on, and [`crate::Lash::new`] refuses a config
//! that fails it.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_CORRECTION_WEIGHT, DEFAULT_DAMPING, DEFAULT_GRAVITY, DEFAULT_GROWTH_MIN_SEGMENT_LENGTH,
    DEFAULT_MAX_SEGMENTS, DEFAULT_SEGMENT_MAX_LENGTH, DEFAULT_SHRINK_MAX_SEGMENT_LENGTH,
    DEFAULT_SHRINK_SPEED, DEFAULT_STEPS_PER_SECOND, MIN_STEPS_PER_SECOND,
};

/// Reasons a [`LashConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// A scalar field holds NaN or an infinity.
    #[error("`{field}` must be finite")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `segment_max_length` is zero or negative.
    #[error("`segment_max_length` must be positive, got {0}")]
    SegmentMaxLength(f32),
    /// `growth_min_segment_length` is outside `(0, segment_max_length]`.
    #[error("`growth_min_segment_length` must lie in (0, {max}], got {value}")]
    GrowthMinSegmentLength {
        /// Rejected value.
        value: f32,
        /// Upper bound, the configured `segment_max_length`.
        max: f32,
    },
    /// `shrink_max_segment_length` is outside `[0, growth_min_segment_length)`.
    #[error("`shrink_max_segment_length` must lie in [0, {growth}), got {value}")]
    ShrinkMaxSegmentLength {
        /// Rejected value.
        value: f32,
        /// Exclusive upper bound, the configured `growth_min_segment_length`.
        growth: f32,
    },
    /// `shrink_speed` is zero or negative.
    #[error("`shrink_speed` must be positive, got {0}")]
    ShrinkSpeed(f32),
    /// `steps_per_second` is below the supported minimum.
    #[error("`steps_per_second` must be at least 30, got {0}")]
    StepsPerSecond(f32),
    /// `correction_weight` is outside `[0, 1]`.
    #[error("`correction_weight` must lie in [0, 1], got {0}")]
    CorrectionWeight(f32),
    /// An axis of `damping` is negative.
    #[error("`damping` must be non-negative on every axis, got {0}")]
    Damping(Vec3),
    /// `max_steps_per_advance` was set to zero.
    #[error("`max_steps_per_advance` must be at least 1 when set")]
    MaxStepsPerAdvance,
}

/// Failure to read a configuration document.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read lash config {path}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON for [`LashConfig`].
    #[error("malformed lash config")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but holds out-of-range values.
    #[error("invalid lash config")]
    Invalid(#[from] ConfigError),
}

/// Tuning for a [`crate::Lash`].
///
/// Missing fields fall back to [`LashConfig::default`] when deserialising.
///
/// # Examples
/// ```
/// use lash::LashConfig;
/// let config = LashConfig::from_json_str(r#"{ "max_segments": 4 }"#).unwrap();
/// assert_eq!(config.max_segments, 4);
/// assert_eq!(config.segment_max_length, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LashConfig {
    /// Cap on the number of segments.
    pub max_segments: usize,
    /// Maximum distance between consecutive points.
    pub segment_max_length: f32,
    /// Tail segment length required before a new segment is appended.
    pub growth_min_segment_length: f32,
    /// First segment length at or below which it is removed while retracting.
    pub shrink_max_segment_length: f32,
    /// Speed at which the first point is pulled toward the anchor.
    pub shrink_speed: f32,
    /// Fixed sub-step rate.
    pub steps_per_second: f32,
    /// Share of each correction applied to the child point.
    pub correction_weight: f32,
    /// Fractional velocity loss per second, per axis.
    pub damping: Vec3,
    /// Acceleration added every sub-step.
    pub gravity: Vec3,
    /// Optional cap on sub-steps per [`crate::Lash::advance`] call.
    ///
    /// Unset by default, which lets a long frame run every owed step.
    pub max_steps_per_advance: Option<u32>,
}

impl Default for LashConfig {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
            segment_max_length: DEFAULT_SEGMENT_MAX_LENGTH,
            growth_min_segment_length: DEFAULT_GROWTH_MIN_SEGMENT_LENGTH,
            shrink_max_segment_length: DEFAULT_SHRINK_MAX_SEGMENT_LENGTH,
            shrink_speed: DEFAULT_SHRINK_SPEED,
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            correction_weight: DEFAULT_CORRECTION_WEIGHT,
            damping: Vec3::from_array(DEFAULT_DAMPING),
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            max_steps_per_advance: None,
        }
    }
}

fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

impl LashConfig {
    /// Checks every field against the range the simulator supports.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("segment_max_length", self.segment_max_length)?;
        ensure_finite("growth_min_segment_length", self.growth_min_segment_length)?;
        ensure_finite("shrink_max_segment_length", self.shrink_max_segment_length)?;
        ensure_finite("shrink_speed", self.shrink_speed)?;
        ensure_finite("steps_per_second", self.steps_per_second)?;
        ensure_finite("correction_weight", self.correction_weight)?;
        if !self.damping.is_finite() {
            return Err(ConfigError::NotFinite { field: "damping" });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NotFinite { field: "gravity" });
        }

        if self.segment_max_length <= 0.0 {
            return Err(ConfigError::SegmentMaxLength(self.segment_max_length));
        }
        if self.growth_min_segment_length <= 0.0
            || self.growth_min_segment_length > self.segment_max_length
        {
            return Err(ConfigError::GrowthMinSegmentLength {
                value: self.growth_min_segment_length,
                max: self.segment_max_length,
            });
        }
        if self.shrink_max_segment_length < 0.0
            || self.shrink_max_segment_length >= self.growth_min_segment_length
        {
            return Err(ConfigError::ShrinkMaxSegmentLength {
                value: self.shrink_max_segment_length,
                growth: self.growth_min_segment_length,
            });
        }
        if self.shrink_speed <= 0.0 {
            return Err(ConfigError::ShrinkSpeed(self.shrink_speed));
        }
        if self.steps_per_second < MIN_STEPS_PER_SECOND {
            return Err(ConfigError::StepsPerSecond(self.steps_per_second));
        }
        if !(0.0..=1.0).contains(&self.correction_weight) {
            return Err(ConfigError::CorrectionWeight(self.correction_weight));
        }
        if self.damping.min_element() < 0.0 {
            return Err(ConfigError::Damping(self.damping));
        }
        if self.max_steps_per_advance == Some(0) {
            return Err(ConfigError::MaxStepsPerAdvance);
        }
        Ok(())
    }

    /// Duration of one fixed sub-step in seconds.
    #[must_use]
    pub fn step_interval(&self) -> f32 {
        self.steps_per_second.recip()
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigLoadError::Parse`] for malformed JSON and
    /// [`ConfigLoadError::Invalid`] when a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigLoadError::Io`] when the file cannot be read, otherwise
    /// the errors of [`LashConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
