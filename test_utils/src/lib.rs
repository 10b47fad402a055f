//! Utility helpers for tests.
//!
//! Shared by the integration tests of the `lash` crate: configuration
//! builders, a fixed-rate frame driver and assertions over point chains.

pub mod chain;
pub mod driver;

pub use chain::{assert_anchor_pinned, assert_segments_within, segment_lengths};
pub use driver::FrameDriver;

use glam::Vec3;
use lash::LashConfig;

/// Default configuration with gravity, damping and weighting neutralised.
///
/// Nothing moves under this configuration unless the anchor does.
///
/// # Examples
/// ```
/// let config = test_utils::still_config();
/// assert_eq!(config.gravity, glam::Vec3::ZERO);
/// ```
#[must_use]
pub fn still_config() -> LashConfig {
    LashConfig {
        correction_weight: 0.5,
        damping: Vec3::ZERO,
        gravity: Vec3::ZERO,
        ..LashConfig::default()
    }
}

/// [`still_config`] capped at `max_segments` with the given gravity.
#[must_use]
pub fn hanging_config(max_segments: usize, gravity: Vec3) -> LashConfig {
    LashConfig {
        max_segments,
        gravity,
        ..still_config()
    }
}
