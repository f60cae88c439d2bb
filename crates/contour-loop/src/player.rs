//! Loop player — independent playheads over sealed tracks.

use glam::Vec2;

use contour_geometry::lerp_sets;
use contour_types::ContourResult;

use crate::track::Track;

/// Per-track playback cursor. Always within `[0, track.len())`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Playhead {
    /// Index of the sample currently being played.
    pub index: usize,
}

/// Advances one playhead per sealed track and produces interpolated
/// snapshots for the current loop time.
///
/// The player borrows the tracks on every call rather than owning them;
/// the caller keeps the track list and guarantees (checked in debug
/// builds) that it only ever grows, one playhead per track.
#[derive(Debug, Default)]
pub struct LoopPlayer {
    playheads: Vec<Playhead>,
}

impl LoopPlayer {
    /// Creates a player with no playheads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a playhead for a freshly sealed track.
    pub fn track_added(&mut self) {
        self.playheads.push(Playhead::default());
    }

    /// Number of registered playheads.
    pub fn len(&self) -> usize {
        self.playheads.len()
    }

    /// True before any track has been sealed.
    pub fn is_empty(&self) -> bool {
        self.playheads.is_empty()
    }

    /// The playhead for `track_index`.
    pub fn playhead(&self, track_index: usize) -> Playhead {
        self.playheads[track_index]
    }

    /// Advances every playhead to the given loop-relative time.
    ///
    /// A playhead rests on the last sample captured *at or before* the
    /// loop time: a loop time landing exactly on a sample's timestamp
    /// rests the cursor on that sample with a blend fraction of zero,
    /// so [`snapshot`](Self::snapshot) reproduces the captured frame
    /// exactly even when samples sit closer together than the
    /// one-second blend window. When the loop time jumps back below the current
    /// sample's timestamp — a new pass has begun — the cursor wraps to
    /// sample 0 first, so the boundary crossing lands back at the top
    /// of the track without a gap or a skipped frame. The index never
    /// leaves `[0, track.len())`.
    pub fn advance(&mut self, tracks: &[Track], loop_time_ms: f64) {
        debug_assert_eq!(self.playheads.len(), tracks.len());
        for (playhead, track) in self.playheads.iter_mut().zip(tracks.iter()) {
            if loop_time_ms < track.sample(playhead.index).t_ms {
                playhead.index = 0;
            }
            while playhead.index + 1 < track.len()
                && track.sample(playhead.index + 1).t_ms <= loop_time_ms
            {
                playhead.index += 1;
            }
        }
    }

    /// Interpolated snapshot of one track at the given loop time.
    ///
    /// Blends the playhead's sample toward the next (wrapping) sample by
    /// `(loop_time - sample.t) / 1000` — sub-sample smoothing between
    /// captured frames. The fraction is intentionally unclamped: when
    /// capture gaps stretch past a second the blend extrapolates
    /// slightly, matching the continuous motion it stands in for.
    pub fn snapshot(
        &self,
        tracks: &[Track],
        track_index: usize,
        loop_time_ms: f64,
    ) -> ContourResult<Vec<Vec2>> {
        let track = &tracks[track_index];
        let playhead = &self.playheads[track_index];

        let current = track.sample(playhead.index);
        let next = track.sample((playhead.index + 1) % track.len());
        let t = ((loop_time_ms - current.t_ms) / 1000.0) as f32;
        lerp_sets(&current.points, &next.points, t)
    }
}
