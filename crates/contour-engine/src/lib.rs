//! # contour-engine
//!
//! Ties the Contour components into one per-tick pipeline: a host hands
//! in a pose frame and a monotonic timestamp, the engine updates the
//! deformation field, records and replays motion loops, computes convex
//! envelopes, and hands back everything the renderer needs.
//!
//! Single-threaded and tick-driven: the engine is owned by the host's
//! animation loop and all state is mutated inside [`Engine::tick`].
//! Stopping the loop at any tick boundary leaves every buffer and track
//! consistent and resumable.
//!
//! ## Key Types
//!
//! - [`Engine`] — the orchestrator, one instance per session
//! - [`EngineConfig`] — loop period, landmark mapping, field parameters
//! - [`FrameInput`] / [`FrameOutput`] — the host-facing tick contract

pub mod config;
pub mod engine;
pub mod frame;

pub use config::EngineConfig;
pub use engine::Engine;
pub use frame::{Envelope, EnvelopeLayer, FrameInput, FrameOutput, Hand};
