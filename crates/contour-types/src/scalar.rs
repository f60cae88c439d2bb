//! Scalar type alias for the engine.
//!
//! Point coordinates and forces are `f32` (matching `glam::Vec2`).
//! Wall-clock timestamps stay `f64` milliseconds throughout: hosts hand
//! the engine a monotonic millisecond clock, and `f32` loses sub-frame
//! precision after a few hours of session time.

/// The floating-point type used for coordinates and forces.
pub type Scalar = f32;

/// Wall-clock time in milliseconds since an arbitrary monotonic origin.
pub type Millis = f64;
