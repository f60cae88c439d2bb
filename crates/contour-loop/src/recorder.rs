//! Loop recorder — captures timestamped snapshots for one loop period
//! and seals them into tracks at the loop boundary.

use glam::Vec2;

use contour_types::{ContourResult, TrackId};

use crate::track::{Track, TrackSample};

/// Records a small point set (e.g., five fingertips) against a repeating
/// loop clock.
///
/// The recorder also owns the session's loop clock: `loop_time` is the
/// wall clock re-based to the start of the current loop, and a tick that
/// pushes it past the loop period seals the in-progress capture (if it
/// holds anything) and starts a fresh one.
pub struct LoopRecorder {
    /// Loop period in milliseconds.
    loop_ms: f64,
    /// Wall-clock timestamp of the current loop's start.
    loop_start_ms: f64,
    /// Samples captured since the last boundary.
    in_progress: Vec<TrackSample>,
    /// Completed loop count, also the id of the next sealed track.
    iteration: u32,
}

impl LoopRecorder {
    /// Creates a recorder with a loop period of `loop_secs` seconds.
    pub fn new(loop_secs: u32) -> Self {
        Self {
            loop_ms: f64::from(loop_secs) * 1000.0,
            loop_start_ms: 0.0,
            in_progress: Vec::new(),
            iteration: 0,
        }
    }

    /// Loop period in milliseconds.
    #[inline]
    pub fn loop_ms(&self) -> f64 {
        self.loop_ms
    }

    /// Milliseconds elapsed within the current loop, in `[0, loop_ms)`
    /// between boundary checks.
    #[inline]
    pub fn loop_time(&self, now_ms: f64) -> f64 {
        (now_ms - self.loop_start_ms).rem_euclid(self.loop_ms)
    }

    /// Fraction of the current loop elapsed, clamped to `[0, 1]`.
    /// Feed for the host's progress indicator.
    pub fn progress(&self, now_ms: f64) -> f32 {
        ((now_ms - self.loop_start_ms) / self.loop_ms).clamp(0.0, 1.0) as f32
    }

    /// Number of completed loops since the session began.
    #[inline]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Checks the loop boundary. When the wall clock has moved past the
    /// loop period, the clock re-bases to `now_ms`, the iteration count
    /// advances, and a non-empty capture is sealed and returned. An empty
    /// capture (no hand seen all loop) is discarded silently.
    pub fn tick(&mut self, now_ms: f64) -> ContourResult<Option<Track>> {
        if now_ms - self.loop_start_ms <= self.loop_ms {
            return Ok(None);
        }

        self.loop_start_ms = now_ms;
        self.iteration += 1;

        if self.in_progress.is_empty() {
            return Ok(None);
        }
        let samples = std::mem::take(&mut self.in_progress);
        let track = Track::seal(TrackId(self.iteration - 1), samples)?;
        Ok(Some(track))
    }

    /// Appends one snapshot at the current loop-relative time.
    /// Called once per tick while a hand is tracked; ticks without
    /// landmark data simply record nothing.
    pub fn record(&mut self, points: Vec<Vec2>, now_ms: f64) {
        let t_ms = self.loop_time(now_ms);
        self.in_progress.push(TrackSample { points, t_ms });
    }

    /// Number of samples captured so far in the current loop.
    pub fn pending_len(&self) -> usize {
        self.in_progress.len()
    }
}
