//! Sealed recording tracks.

use glam::Vec2;

use contour_types::{ContourError, ContourResult, TrackId};

/// One captured frame of a recording: a point snapshot and its
/// loop-relative timestamp.
#[derive(Debug, Clone)]
pub struct TrackSample {
    /// The captured point set (e.g., five fingertips).
    pub points: Vec<Vec2>,
    /// Milliseconds within the loop at capture time, in `[0, loop_ms)`.
    pub t_ms: f64,
}

/// An immutable, sealed recording loop.
///
/// Fields are private: once sealed, a track's length and sample arity
/// never change, which is what lets playheads derive their bounds from
/// it once and trust them forever.
#[derive(Debug, Clone)]
pub struct Track {
    id: TrackId,
    samples: Vec<TrackSample>,
}

impl Track {
    /// Seals a recording into a track.
    ///
    /// Fails with [`ContourError::EmptyTrack`] on an empty capture, and
    /// with [`ContourError::LengthMismatch`] if any sample's point count
    /// differs from the first — pairwise interpolation during playback
    /// needs uniform arity, so the invariant is checked once here.
    pub fn seal(id: TrackId, samples: Vec<TrackSample>) -> ContourResult<Self> {
        let Some(first) = samples.first() else {
            return Err(ContourError::EmptyTrack);
        };
        let arity = first.points.len();
        for sample in &samples {
            if sample.points.len() != arity {
                return Err(ContourError::LengthMismatch {
                    expected: arity,
                    actual: sample.points.len(),
                });
            }
        }
        Ok(Self { id, samples })
    }

    /// The track's identifier.
    #[inline]
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Number of captured frames. At least 1 once sealed.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Sealed tracks are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The sample at `index` (must be within `0..len()`).
    #[inline]
    pub fn sample(&self, index: usize) -> &TrackSample {
        &self.samples[index]
    }

    /// All samples in capture order.
    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    /// Points captured per frame.
    pub fn arity(&self) -> usize {
        self.samples[0].points.len()
    }
}
