//! Pairwise linear interpolation between two point sets.

use contour_types::{ContourError, ContourResult};
use glam::Vec2;

/// Blends two equal-length point sets componentwise:
/// `result[i] = (1 - t) * a[i] + t * b[i]`.
///
/// `t` is deliberately not clamped — callers supply `t ∈ [0, 1]` for true
/// interpolation, and values outside that range extrapolate. The loop
/// player relies on mild extrapolation when frame gaps stretch past the
/// sample spacing.
///
/// Mismatched lengths are a contract violation reported as
/// [`ContourError::LengthMismatch`], never silently truncated.
pub fn lerp_sets(a: &[Vec2], b: &[Vec2], t: f32) -> ContourResult<Vec<Vec2>> {
    if a.len() != b.len() {
        return Err(ContourError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(pa, pb)| pa.lerp(*pb, t)).collect())
}
