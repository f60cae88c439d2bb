//! Engine event types.
//!
//! Lightweight value types emitted at fixed points in each tick.
//! They carry just enough data for monitoring and debugging; point
//! sets themselves travel through the frame output, never through
//! telemetry.

use serde::{Deserialize, Serialize};

use contour_types::TrackId;

/// An event emitted by the engine, tagged with its tick number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineEvent {
    /// Tick number (0-indexed, monotonically increasing per session).
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    TickBegin {
        /// Host wall-clock timestamp (milliseconds).
        now_ms: f64,
    },

    /// Tick completed.
    TickEnd {
        /// Number of envelopes produced this tick.
        envelope_count: u32,
        /// Whether a hand was tracked this tick.
        tracked: bool,
    },

    /// The loop clock wrapped past its period.
    LoopWrap {
        /// Completed loop count.
        iteration: u32,
    },

    /// A recording was sealed into a track.
    TrackSealed {
        /// Identifier of the new track.
        track: TrackId,
        /// Number of captured frames in it.
        samples: u32,
    },

    /// A hull computation found no admissible vertex and the envelope
    /// was skipped for this tick.
    HullDegenerate {
        /// Size of the offending point set.
        points: u32,
    },

    /// Hand presence flipped between ticks.
    TrackingChanged {
        /// True when a hand became visible, false when it was lost.
        tracked: bool,
    },
}

impl EngineEvent {
    /// Creates an event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
