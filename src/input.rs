//! Analog stick deadzone shaping.
//!
//! Raw stick axes are remapped so that nothing below the dead zone registers
//! and full deflection is reached at the max zone. [`DeadZone`] holds a
//! validated pair of zones; the free functions validate on every call.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected dead zone and max zone combinations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeadZoneError {
    /// The dead zone is outside `[0, 1)`.
    #[error("dead zone must lie in [0, 1), got {0}")]
    DeadZone(f32),
    /// The max zone is outside `[0, 1]`.
    #[error("max zone must lie in [0, 1], got {0}")]
    MaxZone(f32),
    /// The max zone does not exceed the dead zone.
    #[error("max zone {max} must be greater than dead zone {dead}")]
    Ordering {
        /// Configured dead zone.
        dead: f32,
        /// Configured max zone.
        max: f32,
    },
}

/// How the two stick axes are weighted against the zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisWeightMode {
    /// Zones apply to the stick magnitude; direction is preserved.
    #[default]
    Circular,
    /// Zones apply to each axis independently.
    Cross,
}

/// A validated dead zone and max zone pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    dead: f32,
    max: f32,
}

impl DeadZone {
    /// Validates the zones.
    ///
    /// # Errors
    /// Returns [`DeadZoneError`] when `dead` is outside `[0, 1)`, `max` is
    /// outside `[0, 1]`, or `max <= dead`.
    ///
    /// # Examples
    /// ```
    /// use lash::input::{DeadZone, DeadZoneError};
    /// assert!(DeadZone::new(0.15, 0.9).is_ok());
    /// assert_eq!(
    ///     DeadZone::new(0.5, 0.5),
    ///     Err(DeadZoneError::Ordering { dead: 0.5, max: 0.5 })
    /// );
    /// ```
    pub fn new(dead: f32, max: f32) -> Result<Self, DeadZoneError> {
        if !(0.0..1.0).contains(&dead) {
            return Err(DeadZoneError::DeadZone(dead));
        }
        if !(0.0..=1.0).contains(&max) {
            return Err(DeadZoneError::MaxZone(max));
        }
        if max <= dead {
            return Err(DeadZoneError::Ordering { dead, max });
        }
        Ok(Self { dead, max })
    }

    /// Lower edge of the active range.
    #[must_use]
    pub const fn dead(&self) -> f32 {
        self.dead
    }

    /// Upper edge of the active range.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Maps a magnitude in `(dead, ∞)` onto `(0, 1]`.
    fn rescale(&self, magnitude: f32) -> f32 {
        if magnitude >= self.max {
            1.0
        } else {
            (magnitude - self.dead) / (self.max - self.dead)
        }
    }

    /// Applies the zones to the stick magnitude, keeping its direction.
    #[must_use]
    pub fn shape_circular(&self, x: f32, y: f32) -> Vec2 {
        let input = Vec2::new(x, y);
        let magnitude = input.length();
        if magnitude <= self.dead || !magnitude.is_finite() {
            return Vec2::ZERO;
        }
        input / magnitude * self.rescale(magnitude)
    }

    /// Applies the zones to each axis on its own, keeping each sign.
    #[must_use]
    pub fn shape_cross(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(self.shape_axis(x), self.shape_axis(y))
    }

    fn shape_axis(&self, axis: f32) -> f32 {
        let magnitude = axis.abs();
        if magnitude <= self.dead || !magnitude.is_finite() {
            return 0.0;
        }
        self.rescale(magnitude).copysign(axis)
    }

    /// Shapes `(x, y)` with the given weighting.
    #[must_use]
    pub fn shape(&self, mode: AxisWeightMode, x: f32, y: f32) -> Vec2 {
        match mode {
            AxisWeightMode::Circular => self.shape_circular(x, y),
            AxisWeightMode::Cross => self.shape_cross(x, y),
        }
    }
}

/// Circular deadzone shaping with zones validated on the spot.
///
/// # Errors
/// Returns [`DeadZoneError`] for invalid zones; see [`DeadZone::new`].
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use lash::input::shape_circular;
/// assert_eq!(shape_circular(0.1, 0.0, 0.15, 0.9).unwrap(), Vec2::ZERO);
/// assert_eq!(shape_circular(0.0, -1.0, 0.15, 0.9).unwrap(), Vec2::new(0.0, -1.0));
/// ```
pub fn shape_circular(x: f32, y: f32, dead: f32, max: f32) -> Result<Vec2, DeadZoneError> {
    Ok(DeadZone::new(dead, max)?.shape_circular(x, y))
}

/// Cross deadzone shaping with zones validated on the spot.
///
/// # Errors
/// Returns [`DeadZoneError`] for invalid zones; see [`DeadZone::new`].
pub fn shape_cross(x: f32, y: f32, dead: f32, max: f32) -> Result<Vec2, DeadZoneError> {
    Ok(DeadZone::new(dead, max)?.shape_cross(x, y))
}
