//! Verlet lash simulation.
//!
//! A [`Lash`] is a chain of points hanging from an anchor that the host moves
//! every frame. While extended the chain grows one segment at a time from its
//! tail; while retracted the segment next to the anchor is reeled in and
//! dropped until nothing is left.
//!
//! Simulation runs at a fixed rate. Each [`Lash::advance`] call converts the
//! frame delta into whole sub-steps and carries the residual to the next
//! frame.
//!
//! ```
//! use glam::Vec3;
//! use lash::{Lash, LashConfig};
//!
//! let mut lash = Lash::new(LashConfig::default(), Vec3::ZERO)?;
//! for _ in 0..60 {
//!     lash.advance(1.0 / 60.0, Vec3::ZERO, true);
//! }
//! assert_eq!(lash.points()[0], Vec3::ZERO);
//! assert!(lash.segment_count() > 1);
//! # Ok::<(), lash::ConfigError>(())
//! ```

use std::fmt;

use glam::Vec3;
use log::{debug, trace};

use crate::config::{ConfigError, LashConfig};
use crate::debug::LashDebugSink;

mod chain;
mod timestep;

use chain::{Chain, CorrectionBias, Shrink};
use timestep::FixedTimestep;

/// A growing and retracting rope anchored to a moving point.
pub struct Lash {
    config: LashConfig,
    chain: Chain,
    timestep: FixedTimestep,
    extended: bool,
    shrink_first_segment_cap: f32,
    debug_sink: Option<Box<dyn LashDebugSink>>,
}

impl fmt::Debug for Lash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lash")
            .field("segments", &self.segment_count())
            .field("extended", &self.extended)
            .field("step_remainder", &self.timestep.remainder())
            .field("shrink_first_segment_cap", &self.shrink_first_segment_cap)
            .field("debug_sink", &self.debug_sink.is_some())
            .finish_non_exhaustive()
    }
}

impl Lash {
    /// Creates a lash with no segments whose anchor sits at `anchor`.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] produced by [`LashConfig::validate`].
    pub fn new(config: LashConfig, anchor: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            chain: Chain::new(anchor, config.max_segments),
            timestep: FixedTimestep::new(config.steps_per_second, config.max_steps_per_advance),
            extended: false,
            shrink_first_segment_cap: 0.0,
            debug_sink: None,
            config,
        })
    }

    /// Attaches a sink that receives the points after every advance.
    #[must_use]
    pub fn with_debug_sink(mut self, sink: impl LashDebugSink + 'static) -> Self {
        self.set_debug_sink(Some(Box::new(sink)));
        self
    }

    /// Replaces or removes the debug sink.
    pub fn set_debug_sink(&mut self, sink: Option<Box<dyn LashDebugSink>>) {
        self.debug_sink = sink;
    }

    /// The configuration this lash was built with.
    #[must_use]
    pub const fn config(&self) -> &LashConfig {
        &self.config
    }

    /// The anchor followed by every simulated point.
    ///
    /// Always holds `segment_count() + 1` entries.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        self.chain.points()
    }

    /// Number of segments currently simulated.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.chain.segment_count()
    }

    /// Whether the last [`Lash::advance`] ran with the lash extended.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.extended
    }

    /// Unsimulated time carried over to the next frame, in seconds.
    #[must_use]
    pub const fn step_remainder(&self) -> f32 {
        self.timestep.remainder()
    }

    /// Length limit applied to the first segment while retracting.
    #[must_use]
    pub const fn shrink_first_segment_cap(&self) -> f32 {
        self.shrink_first_segment_cap
    }

    /// Advances the simulation by `delta_time` seconds.
    ///
    /// The anchor is pinned to `anchor` first. An empty lash that is asked
    /// to extend sprouts its first segment without simulating; an empty lash
    /// that is retracted does nothing.
    pub fn advance(&mut self, delta_time: f32, anchor: Vec3, extended: bool) {
        self.extended = extended;
        self.chain.pin_anchor(anchor);

        if self.chain.segment_count() > 0 {
            let steps = self.timestep.consume(delta_time);
            trace!(
                "lash advancing {steps} sub-steps over {} segments",
                self.segment_count()
            );
            if extended {
                for _ in 0..steps {
                    self.extend_step();
                }
            } else {
                for _ in 0..steps {
                    if matches!(self.retract_step(), Shrink::Collapsed) {
                        debug!("lash fully retracted");
                        break;
                    }
                }
            }
        }

        if extended && self.chain.segment_count() == 0 {
            self.grow();
        }

        if let Some(sink) = self.debug_sink.as_mut() {
            sink.draw_points(self.chain.points());
        }
    }

    fn grow(&mut self) {
        if self.chain.segment_count() >= self.config.max_segments {
            return;
        }
        self.chain.push_tail();
        debug!("lash grew to {} segments", self.chain.segment_count());
    }

    fn extend_step(&mut self) {
        let grow = self
            .chain
            .tail_segment_length()
            .is_some_and(|length| length >= self.config.growth_min_segment_length);
        if grow {
            self.grow();
        }

        let LashConfig {
            segment_max_length,
            correction_weight,
            damping,
            gravity,
            ..
        } = self.config;
        self.chain.integrate(self.timestep.interval(), damping, gravity);
        self.chain.relax(segment_max_length, correction_weight, CorrectionBias::Tip);
        self.chain.clamp_first(segment_max_length);
    }

    fn retract_step(&mut self) -> Shrink {
        let interval = self.timestep.interval();
        let shrink = self.chain.shrink(
            interval,
            self.config.shrink_speed,
            self.config.shrink_max_segment_length,
        );
        let Shrink::Continue { first_segment_cap } = shrink else {
            return shrink;
        };
        self.shrink_first_segment_cap = first_segment_cap;

        let LashConfig {
            segment_max_length,
            correction_weight,
            damping,
            gravity,
            ..
        } = self.config;
        self.chain.integrate(interval, damping, gravity);
        self.chain.relax(segment_max_length, correction_weight, CorrectionBias::Base);
        self.chain.clamp_first(self.shrink_first_segment_cap);
        shrink
    }
}

#[cfg(test)]
mod tests;
