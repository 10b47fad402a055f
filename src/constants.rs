//! Default tuning values for the lash and the movement shaper.
//!
//! These match the values the lash component shipped with and are used by
//! the `Default` implementations of the configuration types.

/// Maximum number of segments a lash may grow to.
pub const DEFAULT_MAX_SEGMENTS: usize = 20;
/// Maximum distance between two consecutive lash points.
pub const DEFAULT_SEGMENT_MAX_LENGTH: f32 = 10.0;
/// Length the tail segment must reach before another segment is appended.
pub const DEFAULT_GROWTH_MIN_SEGMENT_LENGTH: f32 = 7.5;
/// The first segment is removed once it is at or below this length.
pub const DEFAULT_SHRINK_MAX_SEGMENT_LENGTH: f32 = 0.1;
/// World units per second the first point travels toward the anchor while
/// retracting.
pub const DEFAULT_SHRINK_SPEED: f32 = 30.0;
/// Fixed simulation rate.
pub const DEFAULT_STEPS_PER_SECOND: f32 = 300.0;
/// Slowest accepted simulation rate.
pub const MIN_STEPS_PER_SECOND: f32 = 30.0;
/// Share of each constraint correction applied to the child point.
pub const DEFAULT_CORRECTION_WEIGHT: f32 = 0.4875;
/// Fraction of velocity lost per second on every axis.
pub const DEFAULT_DAMPING: [f32; 3] = [5.0, 5.0, 5.0];
/// Acceleration applied to each free point per second.
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, 0.0, -20.0];

/// Stick magnitude below which input is ignored.
pub const DEFAULT_INPUT_DEAD_ZONE: f32 = 0.15;
/// Stick magnitude at which input saturates.
pub const DEFAULT_INPUT_MAX_ZONE: f32 = 0.9;
/// Largest `|dot(up, forward)|` at which walking input is still accepted.
pub const WALKING_MAX_ABS_PITCH: f32 = 0.9;
/// Squared length under which a movement vector counts as no input.
pub const NEARLY_ZERO_SQUARED: f32 = 1e-8;
