//! Fixed-step time accumulator.

use log::warn;

use crate::numeric::floor_to_u32;

/// Converts variable frame deltas into a whole number of fixed sub-steps.
///
/// The residual carried between frames is always below one interval, so the
/// sub-step size never depends on the frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FixedTimestep {
    interval: f32,
    remainder: f32,
    max_steps: Option<u32>,
}

impl FixedTimestep {
    pub(crate) fn new(steps_per_second: f32, max_steps: Option<u32>) -> Self {
        Self {
            interval: steps_per_second.recip(),
            remainder: 0.0,
            max_steps,
        }
    }

    pub(crate) const fn interval(&self) -> f32 {
        self.interval
    }

    pub(crate) const fn remainder(&self) -> f32 {
        self.remainder
    }

    /// Adds `delta_time` to the accumulator and returns the steps now owed.
    ///
    /// With a step cap configured, owed steps beyond the cap are discarded
    /// along with their time.
    pub(crate) fn consume(&mut self, delta_time: f32) -> u32 {
        self.remainder += delta_time;
        let whole_steps = (self.remainder / self.interval).floor();
        self.remainder = self.remainder.rem_euclid(self.interval);
        let owed = floor_to_u32(whole_steps);
        match self.max_steps {
            Some(cap) if owed > cap => {
                warn!("lash owed {owed} sub-steps this frame; running {cap} and dropping the rest");
                cap
            }
            _ => owed,
        }
    }
}
