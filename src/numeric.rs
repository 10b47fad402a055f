//! Numeric conversion helpers used by the fixed-step accumulator.
//!
//! Float-to-integer conversions are clamped to the target domain instead of
//! wrapping, so a pathological frame delta cannot overflow a step count.

/// Floor a non-negative `f32` into `u32`, saturating at the domain edges.
///
/// Non-finite and negative inputs yield zero.
///
/// # Examples
/// ```
/// use lash::numeric::floor_to_u32;
/// assert_eq!(floor_to_u32(4.99), 4);
/// assert_eq!(floor_to_u32(-1.0), 0);
/// assert_eq!(floor_to_u32(f32::NAN), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "The floored value is clamped to the u32 domain before casting."
)]
#[must_use]
pub fn floor_to_u32(value: f32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= u32::MAX as f32 {
        return u32::MAX;
    }
    floored as u32
}
