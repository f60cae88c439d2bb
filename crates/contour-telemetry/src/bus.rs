//! Broadcast event bus with pluggable sinks.
//!
//! Events queue on an `std::sync::mpsc` channel during the tick and are
//! dispatched to every sink on `flush`, keeping sink work out of the
//! per-point hot loops.

use std::sync::mpsc;

use crate::events::EngineEvent;

/// Trait for event consumers.
///
/// Implement this to add a custom telemetry output (file log, overlay
/// HUD, remote stream).
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &EngineEvent);

    /// Called when the session ends. Flush buffers, close files.
    fn finalize(&mut self) {}

    /// Human-readable sink name.
    fn name(&self) -> &str;
}

/// Broadcast bus: `emit` queues, `flush` fans out to every sink.
pub struct EventBus {
    sender: mpsc::Sender<EngineEvent>,
    receiver: mpsc::Receiver<EngineEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus drops events silently.
    enabled: bool,
}

impl EventBus {
    /// Creates a bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Queues an event. No-op while disabled.
    pub fn emit(&self, event: EngineEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives as long as the bus; a send failure here
        // means the bus is being torn down and the event can drop.
        let _ = self.sender.send(event);
    }

    /// Dispatches all queued events to every sink. Called once at the
    /// end of each tick and at shutdown.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flushes, then finalizes every sink.
    pub fn shutdown(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects events into a `Vec` for tests and inspection.
#[derive(Default)]
pub struct BufferSink {
    /// Collected events, in dispatch order.
    pub events: Vec<EngineEvent>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for BufferSink {
    fn handle(&mut self, event: &EngineEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "buffer_sink"
    }
}

/// Logs events through the `tracing` crate.
pub struct LogSink;

impl EventSink for LogSink {
    fn handle(&mut self, event: &EngineEvent) {
        tracing::debug!(tick = event.tick, kind = ?event.kind, "engine_event");
    }

    fn name(&self) -> &str {
        "log_sink"
    }
}
