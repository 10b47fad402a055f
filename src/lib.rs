#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the lash rope simulation and analog stick shaping.
//!
//! [`Lash`] grows a verlet point chain from a host-driven anchor and reels it
//! back in, stepping at a fixed rate independent of the frame rate.
//! [`input`] and [`movement`] turn raw stick axes into movement directions.
pub mod config;
pub mod constants;
pub mod debug;
pub mod input;
pub mod lash;
pub mod logging;
pub mod movement;
pub mod numeric;
pub mod vector_math;

// Re-export commonly used items
pub use config::{ConfigError, ConfigLoadError, LashConfig};
pub use constants::*;
pub use debug::{LashDebugSink, LogDebugSink};
pub use input::{shape_circular, shape_cross, AxisWeightMode, DeadZone, DeadZoneError};
pub use crate::lash::Lash;
pub use logging::init as init_logging;
pub use movement::{MovementConfig, MovementShaper};
pub use vector_math::{clamp_distance_from, interp_constant_to};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use lash::prelude::*;
    //! ```

    pub use crate::AxisWeightMode;
    pub use crate::DeadZone;
    pub use crate::Lash;
    pub use crate::LashConfig;
    pub use crate::LashDebugSink;
    pub use crate::MovementShaper;
    pub use glam::{Vec2, Vec3};
}
