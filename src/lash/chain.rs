//! Point storage and the per-step solver passes.
//!
//! Current and previous positions live in two parallel vectors. Index zero
//! is the anchor, which is written by the owner and never simulated.

use glam::Vec3;

use crate::vector_math::{clamp_distance_from, interp_constant_to};

/// Which end of a segment absorbs the larger share of a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CorrectionBias {
    /// The child (tail-ward) point moves by `weight`, the parent by
    /// `1 - weight`. Used while extended.
    Tip,
    /// The child moves by `1 - weight`, the parent by `weight`. Used while
    /// retracting.
    Base,
}

/// Outcome of one shrink pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shrink {
    /// Segments remain; the first segment may be at most this long.
    Continue { first_segment_cap: f32 },
    /// The last segment was removed.
    Collapsed,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Chain {
    current: Vec<Vec3>,
    last: Vec<Vec3>,
}

impl Chain {
    pub(crate) fn new(anchor: Vec3, max_segments: usize) -> Self {
        let mut current = Vec::with_capacity(max_segments + 1);
        let mut last = Vec::with_capacity(max_segments + 1);
        current.push(anchor);
        last.push(anchor);
        Self { current, last }
    }

    #[cfg(test)]
    pub(crate) fn from_points(points: &[Vec3]) -> Self {
        Self {
            current: points.to_vec(),
            last: points.to_vec(),
        }
    }

    pub(crate) fn points(&self) -> &[Vec3] {
        &self.current
    }

    pub(crate) fn segment_count(&self) -> usize {
        self.current.len() - 1
    }

    fn anchor(&self) -> Vec3 {
        self.current.first().copied().unwrap_or(Vec3::ZERO)
    }

    /// Length of the segment between points `index - 1` and `index`.
    fn segment_length(&self, index: usize) -> Option<f32> {
        let child = self.current.get(index)?;
        let parent = self.current.get(index.checked_sub(1)?)?;
        Some(child.distance(*parent))
    }

    pub(crate) fn tail_segment_length(&self) -> Option<f32> {
        self.segment_length(self.segment_count())
    }

    pub(crate) fn first_segment_length(&self) -> Option<f32> {
        self.segment_length(1)
    }

    /// Shifts the previous anchor into the history and pins the new one.
    pub(crate) fn pin_anchor(&mut self, anchor: Vec3) {
        if let (Some(current), Some(last)) = (self.current.first_mut(), self.last.first_mut()) {
            *last = *current;
            *current = anchor;
        }
    }

    /// Appends a point that duplicates the current tail.
    ///
    /// Both the current and previous positions are copied, so the new point
    /// carries the tail's velocity. Sprouting from the anchor inherits the
    /// anchor's last movement.
    pub(crate) fn push_tail(&mut self) {
        if let (Some(&current), Some(&last)) = (self.current.last(), self.last.last()) {
            self.current.push(current);
            self.last.push(last);
        }
    }

    /// Removes the point next to the anchor.
    ///
    /// # Panics
    /// Panics when the chain has no segments; callers only remove after
    /// checking the first segment exists.
    pub(crate) fn remove_front(&mut self) {
        assert!(
            self.segment_count() > 0,
            "attempted to remove a lash segment from an empty chain"
        );
        self.current.remove(1);
        self.last.remove(1);
    }

    /// Pulls point 1 toward the anchor and removes it once it is close
    /// enough.
    ///
    /// # Panics
    /// Panics when called on a chain without segments.
    pub(crate) fn shrink(&mut self, delta_time: f32, speed: f32, remove_at: f32) -> Shrink {
        let anchor = self.anchor();
        let Some(first) = self.current.get_mut(1) else {
            panic!("attempted to shrink a lash without segments");
        };
        *first = interp_constant_to(*first, anchor, delta_time, speed);
        let length = first.distance(anchor);

        if length > remove_at {
            return Shrink::Continue {
                first_segment_cap: length,
            };
        }

        self.remove_front();
        match self.first_segment_length() {
            Some(first_segment_cap) => Shrink::Continue { first_segment_cap },
            None => Shrink::Collapsed,
        }
    }

    /// Advances every free point by its implied velocity plus gravity.
    ///
    /// Damping is blended in linearly with `delta_time` as the factor, a
    /// first-order stand-in for exponential decay.
    pub(crate) fn integrate(&mut self, delta_time: f32, damping: Vec3, gravity: Vec3) {
        for (current, last) in self
            .current
            .iter_mut()
            .zip(self.last.iter_mut())
            .skip(1)
        {
            let velocity = *current - *last;
            let damped = velocity.lerp(velocity - damping * velocity, delta_time);
            *last = *current;
            *current += damped + gravity * delta_time;
        }
    }

    /// Runs one relaxation sweep from the tail toward point 1.
    ///
    /// The segment touching the anchor is left to [`Chain::clamp_first`].
    pub(crate) fn relax(&mut self, max_length: f32, weight: f32, bias: CorrectionBias) {
        let (child_share, parent_share) = match bias {
            CorrectionBias::Tip => (weight, 1.0 - weight),
            CorrectionBias::Base => (1.0 - weight, weight),
        };
        let max_length_sq = max_length * max_length;

        for index in (2..self.current.len()).rev() {
            let (head, tail) = self.current.split_at_mut(index);
            let (Some(parent), Some(child)) = (head.last_mut(), tail.first_mut()) else {
                continue;
            };

            let to_parent = *parent - *child;
            let distance_sq = to_parent.length_squared();
            if distance_sq <= max_length_sq {
                continue;
            }
            let distance = distance_sq.sqrt();
            if distance <= 0.0 {
                continue;
            }

            let correction = to_parent / distance * (distance - max_length);
            *child += correction * child_share;
            *parent += correction * -parent_share;
        }
    }

    /// Hard-limits the first segment to `max_length` from the anchor.
    pub(crate) fn clamp_first(&mut self, max_length: f32) {
        let anchor = self.anchor();
        if let Some(first) = self.current.get_mut(1) {
            *first = clamp_distance_from(anchor, *first, max_length);
        }
    }
}
