//! # contour-telemetry
//!
//! Structured engine events and a broadcast bus with pluggable sinks.
//! The engine emits during each tick and flushes once at tick end, so
//! sinks never run inside the hot per-point loops.

pub mod bus;
pub mod events;

pub use bus::{BufferSink, EventBus, EventSink, LogSink};
pub use events::{EngineEvent, EventKind};
