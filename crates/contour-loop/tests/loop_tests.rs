//! Integration tests for contour-loop.

use contour_loop::{LoopPlayer, LoopRecorder, Track, TrackSample};
use contour_types::{ContourError, TrackId};
use glam::Vec2;

const EPS: f32 = 1e-5;

fn snapshot(x: f32) -> Vec<Vec2> {
    vec![Vec2::new(x, 0.0), Vec2::new(x, 1.0)]
}

fn track(times_and_x: &[(f64, f32)]) -> Track {
    let samples = times_and_x
        .iter()
        .map(|&(t_ms, x)| TrackSample {
            points: snapshot(x),
            t_ms,
        })
        .collect();
    Track::seal(TrackId(0), samples).unwrap()
}

// ─── Track sealing ────────────────────────────────────────────

#[test]
fn sealing_empty_capture_fails() {
    match Track::seal(TrackId(0), Vec::new()) {
        Err(ContourError::EmptyTrack) => {}
        other => panic!("expected EmptyTrack, got {other:?}"),
    }
}

#[test]
fn sealing_checks_sample_arity() {
    let samples = vec![
        TrackSample {
            points: snapshot(0.0),
            t_ms: 0.0,
        },
        TrackSample {
            points: vec![Vec2::ZERO],
            t_ms: 100.0,
        },
    ];
    match Track::seal(TrackId(0), samples) {
        Err(ContourError::LengthMismatch { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }
}

#[test]
fn sealed_track_reports_shape() {
    let t = track(&[(0.0, 0.0), (500.0, 1.0)]);
    assert_eq!(t.len(), 2);
    assert_eq!(t.arity(), 2);
    assert_eq!(t.id(), TrackId(0));
}

// ─── LoopRecorder ─────────────────────────────────────────────

#[test]
fn boundary_seals_non_empty_capture() {
    let mut recorder = LoopRecorder::new(1);

    recorder.record(snapshot(0.0), 100.0);
    recorder.record(snapshot(1.0), 600.0);
    assert_eq!(recorder.pending_len(), 2);

    // Still inside the loop: nothing sealed.
    assert!(recorder.tick(900.0).unwrap().is_none());

    // Past the boundary: capture sealed, fresh one begun.
    let sealed = recorder.tick(1050.0).unwrap().expect("track sealed");
    assert_eq!(sealed.len(), 2);
    assert_eq!(recorder.pending_len(), 0);
    assert_eq!(recorder.iteration(), 1);
}

#[test]
fn boundary_discards_empty_capture() {
    let mut recorder = LoopRecorder::new(1);
    assert!(recorder.tick(1500.0).unwrap().is_none());
    // The loop still wrapped even though nothing was recorded.
    assert_eq!(recorder.iteration(), 1);
}

#[test]
fn sample_timestamps_are_loop_relative() {
    let mut recorder = LoopRecorder::new(1);
    let _ = recorder.tick(1200.0).unwrap();

    // Loop re-based at 1200ms; a sample at 1500ms lands at t=300ms.
    recorder.record(snapshot(0.5), 1500.0);
    let sealed = recorder.tick(2300.0).unwrap().expect("track sealed");
    assert!((sealed.sample(0).t_ms - 300.0).abs() < 1e-9);
}

#[test]
fn progress_tracks_the_loop_clock() {
    let mut recorder = LoopRecorder::new(2);
    assert!(recorder.progress(0.0) < EPS);
    assert!((recorder.progress(1000.0) - 0.5).abs() < EPS);
    assert!((recorder.progress(5000.0) - 1.0).abs() < EPS);

    let _ = recorder.tick(2100.0).unwrap();
    assert!(recorder.progress(2100.0) < EPS);
}

// ─── LoopPlayer ───────────────────────────────────────────────

#[test]
fn playhead_advances_with_loop_time() {
    let tracks = vec![track(&[(0.0, 0.0), (300.0, 1.0), (600.0, 2.0)])];
    let mut player = LoopPlayer::new();
    player.track_added();

    player.advance(&tracks, 100.0);
    assert_eq!(player.playhead(0).index, 0);

    player.advance(&tracks, 450.0);
    assert_eq!(player.playhead(0).index, 1);

    player.advance(&tracks, 700.0);
    assert_eq!(player.playhead(0).index, 2);
}

#[test]
fn playhead_wraps_without_skipping() {
    let tracks = vec![track(&[(0.0, 0.0), (300.0, 1.0), (600.0, 2.0)])];
    let mut player = LoopPlayer::new();
    player.track_added();

    // End of one pass: cursor on the last sample.
    player.advance(&tracks, 700.0);
    assert_eq!(player.playhead(0).index, 2);

    // Next pass begins: loop time drops below the cursor's sample and
    // the cursor lands back on sample 0 without skipping.
    player.advance(&tracks, 50.0);
    assert_eq!(player.playhead(0).index, 0);

    // And resumes normal advancement within the new pass.
    player.advance(&tracks, 350.0);
    assert_eq!(player.playhead(0).index, 1);
}

#[test]
fn snapshot_interpolates_between_samples() {
    // Samples 1000ms apart so the playback blend spans exactly [0, 1].
    let tracks = vec![track(&[(0.0, 0.0), (1000.0, 10.0)])];
    let mut player = LoopPlayer::new();
    player.track_added();

    player.advance(&tracks, 500.0);
    assert_eq!(player.playhead(0).index, 0);

    // Midway between sample 0 and sample 1.
    let points = player.snapshot(&tracks, 0, 500.0).unwrap();
    assert!((points[0].x - 5.0).abs() < EPS);
}

#[test]
fn snapshot_at_sample_time_reproduces_sample() {
    let tracks = vec![track(&[(0.0, 0.0), (400.0, 4.0), (800.0, 8.0)])];
    let mut player = LoopPlayer::new();
    player.track_added();

    player.advance(&tracks, 400.0);
    // An exact timestamp hit rests on that sample (blend fraction 0);
    // resting one sample earlier would blend only 0.4 of the way there.
    assert_eq!(player.playhead(0).index, 1);
    let points = player.snapshot(&tracks, 0, 400.0).unwrap();
    assert!((points[0].x - 4.0).abs() < EPS);
    assert!((points[1].x - 4.0).abs() < EPS);
}

#[test]
fn one_playhead_per_track() {
    let tracks = vec![
        track(&[(0.0, 0.0), (100.0, 1.0)]),
        track(&[(0.0, 5.0), (200.0, 6.0)]),
    ];
    let mut player = LoopPlayer::new();
    player.track_added();
    player.track_added();
    assert_eq!(player.len(), 2);

    player.advance(&tracks, 150.0);
    assert_eq!(player.playhead(0).index, 1); // past its last sample
    assert_eq!(player.playhead(1).index, 0); // still inside its first gap
}
