//! Error types for the Contour engine.
//!
//! All crates return `ContourResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Contour engine.
#[derive(Debug, Error)]
pub enum ContourError {
    /// The angular hull scan found no admissible next vertex
    /// (duplicate-only or otherwise malformed input).
    #[error("Degenerate hull: no candidate vertex among {point_count} points")]
    DegenerateHull {
        /// Size of the offending input set.
        point_count: usize,
    },

    /// Two point sets that must be interpolated pairwise differ in length.
    #[error("Length mismatch: expected {expected} points, got {actual}")]
    LengthMismatch {
        /// Length of the first sequence.
        expected: usize,
        /// Length of the second sequence.
        actual: usize,
    },

    /// A recording was sealed with no samples in it.
    #[error("Cannot seal an empty track")]
    EmptyTrack,

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, ContourError>`.
pub type ContourResult<T> = Result<T, ContourError>;
