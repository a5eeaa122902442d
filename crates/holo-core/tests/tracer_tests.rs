// Host-side tests for two-hand tracing and the combined hand pipeline.

use glam::{Vec2, Vec3};
use holo_core::hands::{INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT};
use holo_core::{
    ControlMode, Gesture, HandPose, HandTracker, Handedness, InteractionBus, ShapeTracer,
    TracerParams, TracerState,
};

/// A pointing hand whose index tip sits at `tip` (image space). Every other
/// joint collapses onto the palm, which reads as folded.
fn pointing(tip: Vec2, z: f32) -> HandPose {
    let palm = Vec3::new(tip.x, tip.y + 0.1, z);
    let mut lm = [palm; LANDMARK_COUNT];
    lm[INDEX_MCP] = palm;
    lm[INDEX_PIP] = palm - Vec3::new(0.0, 0.04, 0.0);
    lm[INDEX_TIP] = Vec3::new(tip.x, tip.y, z);
    HandPose::new(lm)
}

fn pair(left: Vec2, right: Vec2) -> [HandPose; 2] {
    [
        pointing(left, 0.0).with_handedness(Handedness::Left),
        pointing(right, 0.0).with_handedness(Handedness::Right),
    ]
}

/// Index tip in the interaction frame.
fn mapped(tip: Vec2) -> Vec3 {
    Vec3::new(tip.x * 2.0 - 1.0, -(tip.y * 2.0 - 1.0), 0.0)
}

#[test]
fn pointing_hand_reads_as_index_only() {
    let states = pointing(Vec2::new(0.4, 0.4), 0.0).finger_states();
    assert!(states.only_index());
}

#[test]
fn steady_motion_never_locks() {
    let mut tracer = ShapeTracer::default();
    for step in 0..20u64 {
        let x = 0.2 + step as f32 * 0.02;
        tracer.update(&pair(Vec2::new(x, 0.5), Vec2::new(x + 0.3, 0.5)), step * 33);
        assert_eq!(tracer.state(), TracerState::Tracing, "step {step}");
    }
    let c = tracer.construction().unwrap();
    assert_eq!(c.path.len(), 40);
    assert!(!c.is_locked());
}

#[test]
fn holding_still_locks_after_the_hold_time() {
    let mut tracer = ShapeTracer::default();
    let (l, r) = (Vec2::new(0.3, 0.4), Vec2::new(0.7, 0.6));
    for t in [0u64, 100, 200] {
        tracer.update(&pair(l, r), t);
        assert_eq!(tracer.state(), TracerState::Tracing, "t {t}");
    }
    let c = tracer.update(&pair(l, r), 300).unwrap().clone();
    assert!(c.is_locked());
    assert_eq!(c.path.len(), 2);
    assert_eq!(c.density, 0.5);
    let bounds = c.bounds.unwrap();
    let (a, b) = (mapped(l), mapped(r));
    assert!((bounds.min - a.min(b)).length() < 1e-5);
    assert!((bounds.max - a.max(b)).length() < 1e-5);
}

#[test]
fn hold_timer_restarts_after_movement() {
    let mut tracer = ShapeTracer::default();
    let r = Vec2::new(0.7, 0.5);
    tracer.update(&pair(Vec2::new(0.3, 0.5), r), 0);
    tracer.update(&pair(Vec2::new(0.3, 0.5), r), 200);
    // a jump resets the stationary window
    tracer.update(&pair(Vec2::new(0.35, 0.5), r), 250);
    tracer.update(&pair(Vec2::new(0.35, 0.5), r), 500);
    assert_eq!(tracer.state(), TracerState::Tracing);
    tracer.update(&pair(Vec2::new(0.35, 0.5), r), 550);
    assert_eq!(tracer.state(), TracerState::Locked);
}

#[test]
fn locked_construction_ignores_further_motion() {
    let mut tracer = ShapeTracer::default();
    let (l, r) = (Vec2::new(0.3, 0.5), Vec2::new(0.7, 0.5));
    for t in [0u64, 150, 300] {
        tracer.update(&pair(l, r), t);
    }
    assert_eq!(tracer.state(), TracerState::Locked);
    let frozen = tracer.construction().unwrap().clone();
    for step in 1..5u64 {
        let drift = step as f32 * 0.05;
        tracer.update(
            &pair(l + Vec2::splat(drift), r - Vec2::splat(drift)),
            300 + step * 33,
        );
    }
    assert_eq!(tracer.construction(), Some(&frozen));
}

#[test]
fn losing_the_pose_returns_to_idle() {
    let mut tracer = ShapeTracer::default();
    let (l, r) = (Vec2::new(0.3, 0.5), Vec2::new(0.7, 0.5));
    tracer.update(&pair(l, r), 0);
    tracer.update(&pair(l + Vec2::X * 0.1, r), 33);
    assert_eq!(tracer.construction().unwrap().path.len(), 4);

    // one hand only
    assert!(tracer.update(&pair(l, r)[..1], 66).is_none());
    assert_eq!(tracer.state(), TracerState::Idle);

    // a fresh pass starts from an empty path
    tracer.update(&pair(l, r), 99);
    assert_eq!(tracer.construction().unwrap().path.len(), 2);

    // an open hand breaks the pointing pose as well
    let mut open = pointing(r, 0.0);
    let mut lm = *open.landmarks();
    lm[12] = lm[INDEX_TIP];
    lm[10] = lm[INDEX_PIP];
    open = HandPose::new(lm).with_handedness(Handedness::Right);
    let hands = [pointing(l, 0.0).with_handedness(Handedness::Left), open];
    assert!(tracer.update(&hands, 132).is_none());
    assert_eq!(tracer.state(), TracerState::Idle);
}

#[test]
fn handedness_labels_order_the_pair() {
    let (l, r) = (Vec2::new(0.2, 0.5), Vec2::new(0.8, 0.5));
    let [left, right] = pair(l, r);

    let mut ordered = ShapeTracer::default();
    ordered.update(&[left.clone(), right.clone()], 0);
    let mut swapped = ShapeTracer::default();
    swapped.update(&[right, left], 0);

    let a = ordered.construction().unwrap();
    let b = swapped.construction().unwrap();
    assert_eq!(a.path, b.path);
    assert!((a.path[0].position - mapped(l)).length() < 1e-5);
}

#[test]
fn nearby_samples_are_deduplicated() {
    // zero tolerances: nothing is ever stationary, so only the epsilon
    // filter keeps the path short
    let params = TracerParams {
        stationary_xy: 0.0,
        stationary_z: 0.0,
        ..TracerParams::default()
    };
    let mut tracer = ShapeTracer::new(params);
    // fingertips touching, so both hands land on the same point
    let tip = Vec2::new(0.5, 0.5);
    for t in 0..10u64 {
        // 0.004 image units maps to 0.008, under the 0.01 epsilon
        let wobble = if t % 2 == 0 { 0.0 } else { 0.004 };
        let at = tip + Vec2::X * wobble;
        tracer.update(&pair(at, at), t * 500);
    }
    let c = tracer.construction().unwrap();
    assert_eq!(c.path.len(), 1);
    assert!(!c.is_locked());

    let moved = tip + Vec2::X * 0.02;
    tracer.update(&pair(moved, moved), 5000);
    assert_eq!(tracer.construction().unwrap().path.len(), 2);
}

#[test]
fn density_follows_hand_depth() {
    let (l, r) = (Vec2::new(0.3, 0.5), Vec2::new(0.7, 0.5));
    let mut tracer = ShapeTracer::default();
    let c = tracer.update(&pair(l, r), 0).unwrap();
    assert!((c.density - 0.5).abs() < 1e-6);

    let mut tracer = ShapeTracer::default();
    let near = [
        pointing(l, -0.1).with_handedness(Handedness::Left),
        pointing(r, -0.1).with_handedness(Handedness::Right),
    ];
    let c = tracer.update(&near, 0).unwrap();
    assert!((c.density - 0.35).abs() < 1e-5, "{}", c.density);
}

#[test]
fn locked_path_resamples_into_targets() {
    let mut tracer = ShapeTracer::default();
    let r = Vec2::new(0.7, 0.5);
    for (i, x) in [0.2f32, 0.3, 0.4].into_iter().enumerate() {
        tracer.update(&pair(Vec2::new(x, 0.5), r), i as u64 * 33);
    }
    for t in [400u64, 800] {
        tracer.update(&pair(Vec2::new(0.4, 0.5), r), t);
    }
    let c = tracer.construction().unwrap();
    assert!(c.is_locked());
    let set = c.to_target_set(64).unwrap();
    assert_eq!(set.len(), 64);
    let bounds = c.bounds.unwrap();
    for p in set.points() {
        assert!(p.cmpge(bounds.min - 1e-5).all() && p.cmple(bounds.max + 1e-5).all());
    }
}

#[test]
fn construction_suppresses_single_hand_output() {
    let mut tracker = HandTracker::new(TracerParams::default());
    let (l, r) = (Vec2::new(0.3, 0.5), Vec2::new(0.7, 0.5));
    let out = tracker.process(&pair(l, r), 0);
    assert!(!out.interaction.active);
    assert_eq!(out.gesture, None);
    assert!(out.construction.is_some());

    // a single pointing hand falls back to gestures
    let out = tracker.process(&pair(l, r)[..1], 33);
    assert!(out.construction.is_none());
    assert_eq!(out.gesture, Some(Gesture::Point));
    assert!(out.interaction.active);
    assert_eq!(tracker.tracer.state(), TracerState::Idle);
}

#[test]
fn publishing_respects_the_active_source() {
    let (l, r) = (Vec2::new(0.3, 0.5), Vec2::new(0.7, 0.5));
    let bus = InteractionBus::new(ControlMode::Gesture);
    let mut tracker = HandTracker::default();
    tracker.process_and_publish(&pair(l, r), 0, &bus);
    let snap = bus.snapshot();
    assert!(snap.construction.is_some());
    assert!(!snap.vector.active);
    // vector and construction of one sample share a sequence number
    assert_eq!(snap.sequence, 1);

    tracker.process_and_publish(&pair(l, r)[..1], 33, &bus);
    let snap = bus.snapshot();
    assert!(snap.construction.is_none());
    assert!(snap.vector.active);
    assert_eq!(snap.sequence, 2);

    bus.set_source(ControlMode::Cursor);
    let switched = bus.snapshot().sequence;
    tracker.process_and_publish(&pair(l, r), 66, &bus);
    let snap = bus.snapshot();
    assert!(snap.construction.is_none());
    assert!(!snap.vector.active);
    assert_eq!(snap.sequence, switched);
}
