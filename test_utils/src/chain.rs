//! Assertions over lash point lists.
use glam::Vec3;

/// Distances between consecutive points, anchor first.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::segment_lengths;
/// let lengths = segment_lengths(&[Vec3::ZERO, Vec3::X * 3.0, Vec3::X * 7.0]);
/// assert_eq!(lengths, vec![3.0, 4.0]);
/// ```
#[must_use]
pub fn segment_lengths(points: &[Vec3]) -> Vec<f32> {
    points
        .windows(2)
        .map(|pair| match pair {
            [parent, child] => parent.distance(*child),
            _ => 0.0,
        })
        .collect()
}

/// Assert that no segment is longer than `max_length + tolerance`.
///
/// # Panics
/// Panics naming the first offending segment.
pub fn assert_segments_within(points: &[Vec3], max_length: f32, tolerance: f32) {
    for (index, length) in segment_lengths(points).into_iter().enumerate() {
        assert!(
            length <= max_length + tolerance,
            "segment {} is {length}, above {max_length} (+{tolerance})",
            index + 1
        );
    }
}

/// Assert that the first point is exactly `anchor`.
///
/// # Panics
/// Panics when the list is empty or the first point differs.
pub fn assert_anchor_pinned(points: &[Vec3], anchor: Vec3) {
    assert_eq!(points.first(), Some(&anchor), "anchor not pinned");
}
