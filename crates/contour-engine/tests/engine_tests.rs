//! Integration tests for contour-engine.

use contour_engine::{Engine, EngineConfig, EnvelopeLayer, FrameInput, Hand};
use contour_types::{constants, TrackId};
use glam::Vec2;

/// A synthetic 21-landmark hand anchored at `base`, with enough spread
/// that no fingertip subset is collinear.
fn hand_at(base: Vec2) -> Hand {
    let landmarks = (0..constants::LANDMARKS_PER_HAND)
        .map(|i| {
            base + Vec2::new(
                i as f32 * 0.04,
                ((i * i) % 7) as f32 * 0.01,
            )
        })
        .collect();
    Hand { landmarks }
}

fn frame_at(base: Vec2) -> FrameInput {
    FrameInput {
        hands: vec![hand_at(base)],
    }
}

#[test]
fn invalid_config_is_rejected() {
    let config = EngineConfig {
        loop_secs: 0,
        ..EngineConfig::minimal()
    };
    assert!(Engine::new(config).is_err());
}

#[test]
fn empty_frame_ticks_cleanly() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();
    let out = engine.tick(&FrameInput::empty(), 16.7).unwrap();

    assert!(out.envelopes.is_empty());
    assert_eq!(out.grid_points.len(), 4); // minimal field is 2×2
    assert_eq!(out.iteration, 0);
    assert!(out.loop_progress >= 0.0 && out.loop_progress <= 1.0);
}

#[test]
fn tracked_hand_produces_live_and_combined_envelopes() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();
    let out = engine.tick(&frame_at(Vec2::new(0.2, 0.2)), 100.0).unwrap();

    let layers: Vec<_> = out.envelopes.iter().map(|e| e.layer).collect();
    assert!(layers.contains(&EnvelopeLayer::Combined));
    assert!(layers.contains(&EnvelopeLayer::Live));

    for envelope in &out.envelopes {
        assert_eq!(envelope.points.len(), 5);
        assert!(envelope.hull.len() >= 3);
        for &i in &envelope.hull {
            assert!(i < envelope.points.len());
        }
    }
}

#[test]
fn loop_boundary_seals_a_track_and_replays_it() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();

    engine.tick(&frame_at(Vec2::new(0.2, 0.2)), 100.0).unwrap();
    engine.tick(&frame_at(Vec2::new(0.4, 0.3)), 500.0).unwrap();

    // Past the one-second loop: the capture seals, playback begins.
    let out = engine.tick(&FrameInput::empty(), 1100.0).unwrap();
    assert_eq!(engine.tracks().len(), 1);
    assert_eq!(out.iteration, 1);

    let layers: Vec<_> = out.envelopes.iter().map(|e| e.layer).collect();
    assert!(layers.contains(&EnvelopeLayer::Track(TrackId(0))));
    assert!(layers.contains(&EnvelopeLayer::Combined));
    // No hand this tick: no live envelope.
    assert!(!layers.contains(&EnvelopeLayer::Live));
}

#[test]
fn empty_loop_seals_nothing() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();
    engine.tick(&FrameInput::empty(), 300.0).unwrap();
    let out = engine.tick(&FrameInput::empty(), 1200.0).unwrap();

    assert_eq!(out.iteration, 1);
    assert!(engine.tracks().is_empty());
    assert!(out.envelopes.is_empty());
}

#[test]
fn degenerate_hand_does_not_fail_the_tick() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();

    // Every landmark at the same spot: all hull attempts are degenerate.
    let hand = Hand {
        landmarks: vec![Vec2::new(0.5, 0.5); constants::LANDMARKS_PER_HAND],
    };
    let frame = FrameInput { hands: vec![hand] };

    let out = engine.tick(&frame, 50.0).unwrap();
    assert!(out.envelopes.is_empty());
    // No loop boundary crossed yet, so nothing is sealed.
    assert_eq!(engine.tracks().len(), 0);
}

#[test]
fn partial_hand_counts_as_untracked() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();
    let frame = FrameInput {
        hands: vec![Hand {
            landmarks: vec![Vec2::ZERO; 7],
        }],
    };
    let out = engine.tick(&frame, 50.0).unwrap();
    let layers: Vec<_> = out.envelopes.iter().map(|e| e.layer).collect();
    assert!(!layers.contains(&EnvelopeLayer::Live));
}

#[test]
fn grid_output_is_stable_across_idle_ticks() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();
    let first = engine.tick(&FrameInput::empty(), 100.0).unwrap();
    let second = engine.tick(&FrameInput::empty(), 200.0).unwrap();

    assert_eq!(first.grid_points.len(), second.grid_points.len());
    for (a, b) in first.grid_points.iter().zip(second.grid_points.iter()) {
        assert!((*a - *b).length() < 1e-5);
    }
}

#[test]
fn progress_resets_after_each_loop() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();
    let mid = engine.tick(&FrameInput::empty(), 500.0).unwrap();
    assert!(mid.loop_progress > 0.4 && mid.loop_progress < 0.6);

    let wrapped = engine.tick(&FrameInput::empty(), 1100.0).unwrap();
    assert!(wrapped.loop_progress < 0.1);
}

#[test]
fn layers_accumulate_over_multiple_loops() {
    let mut engine = Engine::new(EngineConfig::minimal()).unwrap();

    // First loop with a hand.
    engine.tick(&frame_at(Vec2::new(0.1, 0.1)), 200.0).unwrap();
    engine.tick(&frame_at(Vec2::new(0.3, 0.2)), 700.0).unwrap();
    // Second loop with a hand elsewhere.
    engine.tick(&frame_at(Vec2::new(0.6, 0.5)), 1200.0).unwrap();
    engine.tick(&frame_at(Vec2::new(0.8, 0.6)), 1700.0).unwrap();
    // Third loop: both sealed tracks replay together.
    let out = engine.tick(&FrameInput::empty(), 2300.0).unwrap();

    assert_eq!(engine.tracks().len(), 2);
    let layers: Vec<_> = out.envelopes.iter().map(|e| e.layer).collect();
    assert!(layers.contains(&EnvelopeLayer::Track(TrackId(0))));
    assert!(layers.contains(&EnvelopeLayer::Track(TrackId(1))));

    // The combined envelope spans both replayed snapshots.
    let combined = out
        .envelopes
        .iter()
        .find(|e| e.layer == EnvelopeLayer::Combined)
        .expect("combined envelope");
    assert_eq!(combined.points.len(), 10);
}
