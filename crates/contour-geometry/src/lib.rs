//! # contour-geometry
//!
//! Pure 2D geometry for the Contour engine: convex hulls over small,
//! frequently-changing point sets, and pairwise point-set interpolation.
//!
//! ## Key Functions
//!
//! - [`giftwrap`] — angular-scan (gift wrapping) hull, the production path
//! - [`monotone_chain`] — reference hull used to cross-validate `giftwrap`
//! - [`lerp_sets`] — componentwise blend of two equal-length point sets
//!
//! All functions are stateless; none allocate beyond their result.

pub mod chain;
pub mod hull;
pub mod interpolate;

// Re-export glam's Vec2 as the canonical 2D point type for Contour.
pub use glam::Vec2;

pub use chain::monotone_chain;
pub use hull::{encloses, giftwrap};
pub use interpolate::lerp_sets;
