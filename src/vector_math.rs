//! Vector helpers shared by the lash solver.
//! Small wrappers around `glam` for constant-speed motion and distance caps.
use glam::Vec3;

/// Moves `current` toward `target` at a constant `speed` over `delta_time`.
///
/// When the remaining distance fits within one step the target is returned
/// exactly. A non-positive step leaves `current` untouched.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use lash::vector_math::interp_constant_to;
/// let moved = interp_constant_to(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 0.5, 4.0);
/// assert!((moved.x - 8.0).abs() < 1e-6);
///
/// let snapped = interp_constant_to(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0, 4.0);
/// assert_eq!(snapped, Vec3::ZERO);
/// ```
#[must_use]
pub fn interp_constant_to(current: Vec3, target: Vec3, delta_time: f32, speed: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    let max_step = speed * delta_time;
    if distance <= max_step {
        return target;
    }
    if max_step <= 0.0 {
        return current;
    }
    current + delta / distance * max_step
}

/// Pulls `point` back onto the sphere of radius `max_distance` around
/// `origin` when it lies outside it.
///
/// Points inside the sphere, and points coinciding with `origin`, are
/// returned unchanged.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use lash::vector_math::clamp_distance_from;
/// let clamped = clamp_distance_from(Vec3::ZERO, Vec3::new(0.0, 30.0, 40.0), 5.0);
/// assert!((clamped - Vec3::new(0.0, 3.0, 4.0)).length() < 1e-5);
/// ```
#[must_use]
pub fn clamp_distance_from(origin: Vec3, point: Vec3, max_distance: f32) -> Vec3 {
    let offset = point - origin;
    let distance_sq = offset.length_squared();
    if distance_sq <= max_distance * max_distance {
        return point;
    }
    let distance = distance_sq.sqrt();
    if distance <= 0.0 || !distance.is_finite() {
        return point;
    }
    origin + offset / distance * max_distance
}
