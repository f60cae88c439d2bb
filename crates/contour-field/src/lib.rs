//! # contour-field
//!
//! The grid deformation simulation: a fixed lattice of points, each
//! owning a loop-periodic ring of (position, accumulated force) samples,
//! locally deformed by force sources that follow tracked landmarks.
//!
//! ## Key Types
//!
//! - [`ForceSource`] — velocity tracker for one moving landmark
//! - [`SampleRing`] — fixed-duration temporal buffer for one grid point
//! - [`FieldSimulation`] — owns the lattice and routes source influence
//! - [`FieldConfig`] — lattice dimensions and source parameters

pub mod config;
pub mod ring;
pub mod simulation;
pub mod source;

pub use config::FieldConfig;
pub use ring::SampleRing;
pub use simulation::FieldSimulation;
pub use source::ForceSource;
