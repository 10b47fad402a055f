//! Optional observers for the lash point list.
//!
//! A [`LashDebugSink`] attached to a [`crate::Lash`] receives the current
//! points after every [`crate::Lash::advance`]. Hosts forward them to their
//! own debug renderer; [`LogDebugSink`] simply writes them to the log.

use glam::Vec3;
use log::{log_enabled, trace, Level};

/// Receives the lash points once per frame.
pub trait LashDebugSink: Send {
    /// Called with the anchor followed by every simulated point.
    fn draw_points(&mut self, points: &[Vec3]);
}

/// Writes every point to the `trace` log level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDebugSink {
    frame: u64,
}

impl LogDebugSink {
    /// Number of frames observed so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frame
    }
}

impl LashDebugSink for LogDebugSink {
    fn draw_points(&mut self, points: &[Vec3]) {
        self.frame += 1;
        if !log_enabled!(Level::Trace) {
            return;
        }
        for (index, point) in points.iter().enumerate() {
            trace!("lash frame {} point {index}: {point}", self.frame);
        }
    }
}
