//! Temporal sample ring for one grid point.
//!
//! A ring holds one loop period of (position, accumulated force) samples
//! at 60 samples per second. The same slots are revisited every loop
//! pass, and each slot keeps an exponential moving average of the forces
//! applied to it across *all* passes: a push during one pass permanently
//! displaces that slot's resting position for every future pass, which is
//! what gives the field its recorded-motion persistence.

use glam::Vec2;

use contour_types::constants::{FORCE_GAIN, FORCE_RETAIN, SAMPLE_RATE};

/// Fixed-length, fixed-duration sample ring for one simulated grid point.
#[derive(Debug, Clone)]
pub struct SampleRing {
    /// Loop period in milliseconds.
    loop_ms: f64,
    /// Per-slot positions, `loop_secs * 60` entries, never resized.
    motion: Vec<Vec2>,
    /// Per-slot accumulated force, same length as `motion`.
    force: Vec<Vec2>,
    /// Input from the previous `apply` call, blended across any slots
    /// skipped since then.
    last_input: Vec2,
}

impl SampleRing {
    /// Creates a ring whose every slot rests at `rest`, with a loop
    /// period of `loop_secs` seconds.
    pub fn new(rest: Vec2, loop_secs: u32) -> Self {
        let slots = (loop_secs * SAMPLE_RATE) as usize;
        Self {
            loop_ms: f64::from(loop_secs) * 1000.0,
            motion: vec![rest; slots],
            force: vec![Vec2::ZERO; slots],
            last_input: Vec2::ZERO,
        }
    }

    /// Number of slots (`loop_secs * 60`).
    #[inline]
    pub fn len(&self) -> usize {
        self.motion.len()
    }

    /// Rings always hold at least one full second of slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Fractional slot position for a wall-clock millisecond timestamp.
    fn slot_at(&self, ms: f64) -> f64 {
        (ms.rem_euclid(self.loop_ms) / 1000.0) * f64::from(SAMPLE_RATE)
    }

    /// The ring's position at wall-clock time `ms` (any `ms >= 0`).
    /// Floating-point edge effects at the loop boundary may round the
    /// slot up to `len`; the index is clamped so that never fails a tick.
    pub fn position_at(&self, ms: f64) -> Vec2 {
        let slot = (self.slot_at(ms).floor() as usize).min(self.len() - 1);
        self.motion[slot]
    }

    /// Applies an external force across every slot covered by the span
    /// since the previous update.
    ///
    /// `head` is the first whole slot after `prev_ms`, `tail` the last
    /// whole slot at or before `now_ms`. An inverted span (loop wrap)
    /// clamps `head` to 0 so the pass resumes from the top of the ring.
    /// For each covered slot, the input is blended with `last_input` by
    /// the slot's linear position within the span, folded into the slot's
    /// force EMA, and the slot's position is displaced by its accumulated
    /// force. A zero-length span is a no-op.
    pub fn apply(&mut self, input: Vec2, now_ms: f64, prev_ms: f64) {
        let head = self.slot_at(prev_ms);
        let tail = self.slot_at(now_ms);
        let span = tail - head;
        if span == 0.0 {
            return;
        }

        let mut head_slot = head.ceil() as i64;
        let tail_slot = tail.floor() as i64;
        if tail_slot - head_slot < 0 {
            head_slot = 0;
        }

        let last = (self.len() - 1) as i64;
        for slot in head_slot..=tail_slot.min(last) {
            let idx = slot as usize;
            let k = ((slot as f64 - head) / span) as f32;
            let blended = self.last_input.lerp(input, k);
            self.force[idx] = blended * FORCE_GAIN + self.force[idx] * FORCE_RETAIN;
            self.motion[idx] += self.force[idx];
        }

        self.last_input = input;
    }

    /// Accumulated force currently stored at `slot` (for inspection).
    pub fn force_at_slot(&self, slot: usize) -> Vec2 {
        self.force[slot.min(self.len() - 1)]
    }

    /// Stored position at `slot` (for inspection).
    pub fn motion_at_slot(&self, slot: usize) -> Vec2 {
        self.motion[slot.min(self.len() - 1)]
    }
}
