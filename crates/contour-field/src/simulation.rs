//! Field simulation — owns the grid of sample rings and the force
//! sources, and routes source influence to nearby rings each tick.

use glam::Vec2;

use contour_types::ContourResult;

use crate::config::FieldConfig;
use crate::ring::SampleRing;
use crate::source::ForceSource;

/// The deformation field: a fixed lattice of [`SampleRing`]s plus a
/// fixed set of [`ForceSource`]s, created once and mutated every tick.
///
/// All state is owned here and mutated exclusively through
/// [`tick`](Self::tick) — no hidden module-level singletons.
pub struct FieldSimulation {
    config: FieldConfig,
    rings: Vec<SampleRing>,
    sources: Vec<ForceSource>,
    /// Timestamp of the previous tick, the `prev_ms` of every span.
    last_ms: f64,
}

impl FieldSimulation {
    /// Builds the lattice at its resting positions (row-major, spaced
    /// per config) and the sources at the lattice center.
    pub fn new(config: FieldConfig) -> ContourResult<Self> {
        config.validate()?;

        let count = config.rows * config.cols;
        let mut rings = Vec::with_capacity(count);
        for i in 0..count {
            let rest = config.origin
                + Vec2::new(
                    config.spacing * (i % config.cols) as f32,
                    config.spacing * (i / config.cols) as f32,
                );
            rings.push(SampleRing::new(rest, config.loop_secs));
        }

        let center = config.origin
            + Vec2::new(
                config.spacing * (config.cols.saturating_sub(1)) as f32 / 2.0,
                config.spacing * (config.rows.saturating_sub(1)) as f32 / 2.0,
            );
        let sources = vec![ForceSource::new(center, config.source_radius); config.source_count];

        Ok(Self {
            config,
            rings,
            sources,
            last_ms: 0.0,
        })
    }

    /// Advances the field to `now_ms`.
    ///
    /// Each source is fed its corresponding observed position, then every
    /// (source, ring) pair is proximity-tested: a ring within
    /// `(radius / 2)²` squared distance of the source receives the
    /// source's velocity as input, any other ring receives zero input —
    /// which still advances its force EMA toward zero, decaying old
    /// influence. With no observed positions at all, every ring takes a
    /// single zero-input pass so time never stalls while tracking is lost.
    pub fn tick(&mut self, observed: &[Vec2], now_ms: f64) {
        let prev_ms = self.last_ms;

        if observed.is_empty() {
            for ring in &mut self.rings {
                ring.apply(Vec2::ZERO, now_ms, prev_ms);
            }
        } else {
            for (source, &pos) in self.sources.iter_mut().zip(observed.iter()) {
                source.observe(pos);
                let reach = source.radius() / 2.0;
                for ring in &mut self.rings {
                    let offset = source.pos() - ring.position_at(now_ms);
                    if offset.length_squared() < reach * reach {
                        ring.apply(source.velocity(), now_ms, prev_ms);
                    } else {
                        ring.apply(Vec2::ZERO, now_ms, prev_ms);
                    }
                }
            }
        }

        self.last_ms = now_ms;
    }

    /// Current position of every grid point, for point rendering.
    pub fn positions(&self, now_ms: f64) -> Vec<Vec2> {
        self.rings.iter().map(|r| r.position_at(now_ms)).collect()
    }

    /// The force sources, in landmark order.
    pub fn sources(&self) -> &[ForceSource] {
        &self.sources
    }

    /// The sample rings, in row-major grid order.
    pub fn rings(&self) -> &[SampleRing] {
        &self.rings
    }

    /// The configuration the field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
