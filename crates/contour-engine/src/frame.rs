//! The host-facing tick contract.
//!
//! These types define the boundary between the engine and its two
//! external collaborators: the pose-estimation layer that produces a
//! [`FrameInput`] once per tick, and the rendering layer that consumes
//! the [`FrameOutput`]. Both are serializable for transport or capture.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use contour_types::{constants, TrackId};

/// One tracked hand: an ordered list of 21 landmark positions in the
/// pose model's normalized coordinate space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    /// Landmarks in the pose model's canonical order
    /// (wrist first, then four joints per finger).
    pub landmarks: Vec<Vec2>,
}

impl Hand {
    /// The five fingertip positions (landmarks 4, 8, 12, 16, 20).
    ///
    /// Returns `None` for a hand with fewer landmarks than the canonical
    /// layout — a partial detection is treated as not tracked.
    pub fn fingertips(&self) -> Option<Vec<Vec2>> {
        if self.landmarks.len() < constants::LANDMARKS_PER_HAND {
            return None;
        }
        Some(
            constants::FINGERTIP_INDICES
                .iter()
                .map(|&i| self.landmarks[i])
                .collect(),
        )
    }
}

/// Per-tick input from the pose collaborator.
///
/// Zero hands means "no source currently tracked" for this tick — a
/// valid state, not an error. The ten-frame lost-tracking debounce is
/// owned by the capture layer; by the time an empty frame reaches the
/// engine it is authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Tracked hands, most confident first. The engine uses the first.
    pub hands: Vec<Hand>,
}

impl FrameInput {
    /// A frame with nothing tracked.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The hand the engine follows, if any.
    pub fn primary(&self) -> Option<&Hand> {
        self.hands.first()
    }
}

/// Which point set an envelope was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeLayer {
    /// Every active track's snapshot plus the live fingertips.
    Combined,
    /// The live fingertips only.
    Live,
    /// One replayed track's interpolated snapshot.
    Track(TrackId),
}

/// A convex envelope ready to draw: the backing point set and the hull
/// vertex indices into it, read as a closed polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Which layer this envelope belongs to.
    pub layer: EnvelopeLayer,
    /// The backing point set.
    pub points: Vec<Vec2>,
    /// Ordered hull indices into `points`.
    pub hull: Vec<usize>,
}

/// Per-tick output for the rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Envelopes to draw as closed polygons, combined layer first.
    pub envelopes: Vec<Envelope>,
    /// Current position of every deformation-grid point.
    pub grid_points: Vec<Vec2>,
    /// Elapsed fraction of the current recording loop, in `[0, 1]`.
    pub loop_progress: f32,
    /// Completed loop count.
    pub iteration: u32,
}
