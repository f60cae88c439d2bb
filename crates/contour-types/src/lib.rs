//! # contour-types
//!
//! Shared types, identifiers, error types, and engine constants
//! for the Contour motion-envelope engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Contour crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{ContourError, ContourResult};
pub use ids::TrackId;
pub use scalar::Scalar;
