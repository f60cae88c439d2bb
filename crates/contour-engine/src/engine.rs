//! The per-tick orchestrator.

use glam::Vec2;

use contour_field::FieldSimulation;
use contour_geometry::giftwrap;
use contour_loop::{LoopPlayer, LoopRecorder, Track};
use contour_telemetry::{EngineEvent, EventBus, EventKind, EventSink};
use contour_types::{ContourError, ContourResult};

use crate::config::EngineConfig;
use crate::frame::{Envelope, EnvelopeLayer, FrameInput, FrameOutput};

/// One engine session: the deformation field, the loop recorder and
/// player, the sealed tracks, and the telemetry bus.
///
/// Constructed once by the host with fixed grid dimensions, then driven
/// by [`tick`](Self::tick) from the host's animation callback.
pub struct Engine {
    config: EngineConfig,
    field: FieldSimulation,
    recorder: LoopRecorder,
    player: LoopPlayer,
    tracks: Vec<Track>,
    bus: EventBus,
    tick_count: u64,
    was_tracked: bool,
}

impl Engine {
    /// Builds a session from the given config.
    pub fn new(config: EngineConfig) -> ContourResult<Self> {
        config.validate()?;
        let field = FieldSimulation::new(config.field.clone())?;
        let recorder = LoopRecorder::new(config.loop_secs);
        Ok(Self {
            config,
            field,
            recorder,
            player: LoopPlayer::new(),
            tracks: Vec::new(),
            bus: EventBus::new(),
            tick_count: 0,
            was_tracked: false,
        })
    }

    /// Registers a telemetry sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    /// The sealed tracks, in seal order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The deformation field.
    pub fn field(&self) -> &FieldSimulation {
        &self.field
    }

    /// Completed loop count.
    pub fn iteration(&self) -> u32 {
        self.recorder.iteration()
    }

    /// Advances the whole engine by one tick.
    ///
    /// Order per tick: loop boundary (seal + new playhead), field update
    /// from all landmarks, fingertip recording, playhead advance, then
    /// envelope computation over the live and replayed point sets.
    ///
    /// Empty input degrades gracefully: the field decays with zero
    /// force, nothing is recorded, and playback continues. A degenerate
    /// hull skips that one envelope (reported on the bus) instead of
    /// failing the tick.
    pub fn tick(&mut self, frame: &FrameInput, now_ms: f64) -> ContourResult<FrameOutput> {
        self.emit(EventKind::TickBegin { now_ms });

        self.roll_loop(now_ms)?;

        // Field: every landmark of the primary hand is a force source,
        // mapped into field space.
        let field_sources: Vec<Vec2> = self
            .config
            .landmarks_to_field(frame.primary().map_or(&[], |h| h.landmarks.as_slice()));
        self.field.tick(&field_sources, now_ms);

        // Recording: fingertips only, raw pose-space coordinates.
        let tips = frame.primary().and_then(|h| h.fingertips());
        if let Some(points) = &tips {
            self.recorder.record(points.clone(), now_ms);
        }

        let tracked = tips.is_some();
        if tracked != self.was_tracked {
            self.emit(EventKind::TrackingChanged { tracked });
            self.was_tracked = tracked;
        }

        // Playback.
        let loop_time = self.recorder.loop_time(now_ms);
        self.player.advance(&self.tracks, loop_time);

        let mut envelopes = Vec::new();
        let mut layered: Vec<Vec2> = Vec::new();

        let mut track_envelopes = Vec::with_capacity(self.tracks.len());
        for index in 0..self.tracks.len() {
            let snapshot = self.player.snapshot(&self.tracks, index, loop_time)?;
            let layer = EnvelopeLayer::Track(self.tracks[index].id());
            if let Some(envelope) = self.try_envelope(layer, &snapshot) {
                track_envelopes.push(envelope);
            }
            layered.extend_from_slice(&snapshot);
        }
        if let Some(points) = &tips {
            layered.extend_from_slice(points);
        }

        if let Some(envelope) = self.try_envelope(EnvelopeLayer::Combined, &layered) {
            envelopes.push(envelope);
        }
        if let Some(points) = &tips {
            if let Some(envelope) = self.try_envelope(EnvelopeLayer::Live, points) {
                envelopes.push(envelope);
            }
        }
        envelopes.extend(track_envelopes);

        let output = FrameOutput {
            grid_points: self.field.positions(now_ms),
            loop_progress: self.recorder.progress(now_ms),
            iteration: self.recorder.iteration(),
            envelopes,
        };

        self.emit(EventKind::TickEnd {
            envelope_count: output.envelopes.len() as u32,
            tracked,
        });
        self.tick_count += 1;
        self.bus.flush();

        Ok(output)
    }

    /// Checks the loop boundary; seals and registers a finished track.
    fn roll_loop(&mut self, now_ms: f64) -> ContourResult<()> {
        let before = self.recorder.iteration();
        let sealed = self.recorder.tick(now_ms)?;
        if self.recorder.iteration() != before {
            self.emit(EventKind::LoopWrap {
                iteration: self.recorder.iteration(),
            });
        }
        if let Some(track) = sealed {
            self.emit(EventKind::TrackSealed {
                track: track.id(),
                samples: track.len() as u32,
            });
            self.player.track_added();
            self.tracks.push(track);
        }
        Ok(())
    }

    /// Computes one envelope, skipping empty sets and reporting
    /// degenerate geometry on the bus instead of failing the tick.
    fn try_envelope(&self, layer: EnvelopeLayer, points: &[Vec2]) -> Option<Envelope> {
        if points.is_empty() {
            return None;
        }
        match giftwrap(points) {
            Ok(hull) => Some(Envelope {
                layer,
                points: points.to_vec(),
                hull,
            }),
            Err(ContourError::DegenerateHull { point_count }) => {
                self.emit(EventKind::HullDegenerate {
                    points: point_count as u32,
                });
                None
            }
            Err(_) => None,
        }
    }

    fn emit(&self, kind: EventKind) {
        self.bus.emit(EngineEvent::new(self.tick_count, kind));
    }

    /// Flushes and finalizes telemetry. Call when the host stops the
    /// animation loop for good.
    pub fn shutdown(&mut self) {
        self.bus.shutdown();
    }
}

impl EngineConfig {
    /// Maps pose-space landmarks into field space.
    fn landmarks_to_field(&self, landmarks: &[Vec2]) -> Vec<Vec2> {
        landmarks
            .iter()
            .map(|&p| p * self.landmark_scale + self.landmark_offset)
            .collect()
    }
}
