//! Turns shaped stick input into world-space movement vectors.
//!
//! Walking input is projected onto the ground plane of an orientation's
//! forward vector; flight input uses the orientation's forward and right
//! vectors directly. Up is `+Z`.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INPUT_DEAD_ZONE, DEFAULT_INPUT_MAX_ZONE, NEARLY_ZERO_SQUARED};
use crate::input::{AxisWeightMode, DeadZone, DeadZoneError};

/// Stick shaping and direction multipliers for one locomotion mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Stick magnitude below which input is ignored.
    pub dead_zone: f32,
    /// Stick magnitude at which input saturates.
    pub max_zone: f32,
    /// Whether zones apply to the magnitude or per axis.
    pub weight_mode: AxisWeightMode,
    /// Scale for forward input (`x > 0`).
    pub forward_multiplier: f32,
    /// Scale for backward input (`x <= 0`).
    pub backward_multiplier: f32,
    /// Scale for sideways input.
    pub strafe_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_INPUT_DEAD_ZONE,
            max_zone: DEFAULT_INPUT_MAX_ZONE,
            weight_mode: AxisWeightMode::Circular,
            forward_multiplier: 1.0,
            backward_multiplier: 1.0,
            strafe_multiplier: 1.0,
        }
    }
}

/// A validated [`MovementConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementShaper {
    zone: DeadZone,
    config: MovementConfig,
}

fn nearly_zero(vector: Vec3) -> bool {
    vector.length_squared() <= NEARLY_ZERO_SQUARED
}

impl MovementShaper {
    /// Validates the zones in `config`.
    ///
    /// # Errors
    /// Returns [`DeadZoneError`] when the zones are invalid.
    pub fn new(config: MovementConfig) -> Result<Self, DeadZoneError> {
        let zone = DeadZone::new(config.dead_zone, config.max_zone)?;
        Ok(Self { zone, config })
    }

    /// Shapes the stick and applies the direction multipliers.
    ///
    /// `x` is forward and `y` is right.
    #[must_use]
    pub fn scaled_input(&self, axes: Vec2) -> Vec2 {
        let shaped = self.zone.shape(self.config.weight_mode, axes.x, axes.y);
        let forward_scale = if shaped.x > 0.0 {
            self.config.forward_multiplier
        } else {
            self.config.backward_multiplier
        };
        shaped * Vec2::new(forward_scale, self.config.strafe_multiplier)
    }

    /// World-space walking direction for `axes` relative to `forward`.
    ///
    /// Returns `None` when the stick is idle, when `forward` points within
    /// `max_abs_pitch` of straight up or down (as `|dot(up, forward)|`), or
    /// when the multipliers cancel the input.
    ///
    /// # Examples
    /// ```
    /// use glam::{Vec2, Vec3};
    /// use lash::movement::{MovementConfig, MovementShaper};
    /// let shaper = MovementShaper::new(MovementConfig::default()).unwrap();
    /// let walk = shaper
    ///     .walking_input(Vec2::new(1.0, 0.0), Vec3::new(0.0, 2.0, 0.5), 0.9)
    ///     .unwrap();
    /// assert!((walk - Vec3::Y).length() < 1e-6);
    /// ```
    #[must_use]
    pub fn walking_input(&self, axes: Vec2, forward: Vec3, max_abs_pitch: f32) -> Option<Vec3> {
        let shaped = self.zone.shape(self.config.weight_mode, axes.x, axes.y);
        if nearly_zero(shaped.extend(0.0)) {
            return None;
        }

        let facing = forward.try_normalize()?;
        if Vec3::Z.dot(facing).abs() > max_abs_pitch {
            return None;
        }
        let flat_forward = Vec3::new(facing.x, facing.y, 0.0).try_normalize()?;
        let right = Vec3::Z.cross(flat_forward);

        let scaled = self.scaled_input(axes);
        let movement = flat_forward * scaled.x + right * scaled.y;
        (!nearly_zero(movement)).then_some(movement)
    }

    /// World-space flight direction for `axes` along `forward` and `right`.
    ///
    /// Returns `None` when the stick is idle or the multipliers cancel the
    /// input.
    #[must_use]
    pub fn flight_input(&self, axes: Vec2, forward: Vec3, right: Vec3) -> Option<Vec3> {
        let scaled = self.scaled_input(axes);
        let movement = forward * scaled.x + right * scaled.y;
        (!nearly_zero(movement)).then_some(movement)
    }
}
