//! Fixed-rate frame driver for lash tests.
use glam::Vec3;
use lash::Lash;

/// Feeds a [`Lash`] equal frame deltas and tracks simulated time.
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    delta_time: f32,
    time: f32,
    frames: u32,
}

impl FrameDriver {
    /// Create a driver ticking at `fps` frames per second.
    ///
    /// # Examples
    /// ```
    /// use test_utils::FrameDriver;
    /// let driver = FrameDriver::new(60.0);
    /// assert_eq!(driver.frames(), 0);
    /// ```
    #[must_use]
    pub fn new(fps: f32) -> Self {
        Self {
            delta_time: fps.recip(),
            time: 0.0,
            frames: 0,
        }
    }

    /// Seconds simulated so far.
    #[must_use]
    pub const fn time(&self) -> f32 {
        self.time
    }

    /// Frames driven so far.
    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Advance one frame with the anchor at `anchor(time)` after the tick.
    pub fn tick(&mut self, lash: &mut Lash, extended: bool, anchor: impl Fn(f32) -> Vec3) -> Vec3 {
        self.time += self.delta_time;
        self.frames += 1;
        let position = anchor(self.time);
        lash.advance(self.delta_time, position, extended);
        position
    }

    /// Advance for `seconds` with a fixed anchor.
    pub fn run_for(&mut self, lash: &mut Lash, seconds: f32, extended: bool, anchor: Vec3) {
        let end = self.time + seconds;
        while self.time + self.delta_time * 0.5 < end {
            self.tick(lash, extended, |_| anchor);
        }
    }

    /// Retract until the lash is empty, returning the frames it took.
    ///
    /// Returns `None` if `max_frames` elapse first.
    pub fn retract_fully(&mut self, lash: &mut Lash, anchor: Vec3, max_frames: u32) -> Option<u32> {
        for frame in 0..max_frames {
            if lash.segment_count() == 0 {
                return Some(frame);
            }
            self.tick(lash, false, |_| anchor);
        }
        (lash.segment_count() == 0).then_some(max_frames)
    }
}
