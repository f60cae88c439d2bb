//! Strongly-typed identifiers for engine entities.
//!
//! Newtype wrappers prevent accidental mixing of track indices with
//! landmark or grid indices.

use serde::{Deserialize, Serialize};

/// Identifier of a sealed track, assigned in seal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u32);

impl TrackId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TrackId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
