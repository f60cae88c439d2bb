//! Engine constants and simulation defaults.

/// Samples per second in every temporal ring buffer.
pub const SAMPLE_RATE: u32 = 60;

/// Number of landmarks delivered per tracked hand by the pose collaborator.
pub const LANDMARKS_PER_HAND: usize = 21;

/// Landmark indices of the five fingertips within a 21-point hand.
pub const FINGERTIP_INDICES: [usize; 5] = [4, 8, 12, 16, 20];

/// Default loop period of the deformation field (seconds).
pub const DEFAULT_FIELD_LOOP_SECS: u32 = 5;

/// Default loop period of the motion recorder (seconds).
pub const DEFAULT_RECORD_LOOP_SECS: u32 = 10;

/// Fraction of the blended input mixed into a slot's force each pass.
pub const FORCE_GAIN: f32 = 0.1;

/// Fraction of a slot's accumulated force retained each pass.
/// Together with [`FORCE_GAIN`] this forms the per-slot EMA.
pub const FORCE_RETAIN: f32 = 0.9;

/// Default influence diameter of a force source.
pub const DEFAULT_SOURCE_RADIUS: f32 = 20.0;

/// Default deformation grid dimensions.
pub const DEFAULT_GRID_ROWS: usize = 20;
/// Default deformation grid dimensions.
pub const DEFAULT_GRID_COLS: usize = 20;

/// Default spacing between neighboring grid points.
pub const DEFAULT_GRID_SPACING: f32 = 15.0;

/// Consecutive empty pose frames after which the capture layer is expected
/// to clear the tracked hand. The debounce itself is owned by the host;
/// the engine only ever sees its effect as an empty frame.
pub const TRACKING_LOST_TICKS: u32 = 10;

/// Epsilon for floating-point comparisons in tests and degeneracy checks.
pub const EPSILON: f32 = 1.0e-6;
