// Host-side tests for constants and their relationships.

use holo_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_limits_are_consistent() {
    assert!(DEFAULT_PARTICLE_COUNT > 0);
    assert!(DEFAULT_PARTICLE_COUNT <= MAX_PARTICLES);
    // spawned particles start inside the containment cube
    assert!(SPAWN_HALF_EXTENT < BOUNDARY_HALF_EXTENT);
    assert!((-1.0..=0.0).contains(&BOUNDARY_RESTITUTION));
    assert!(BASE_SIZE_MIN > 0.0 && BASE_SIZE_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dynamics_rates_are_fractions() {
    assert!(TRANSITION_SPEED > 0.0 && TRANSITION_SPEED <= 1.0);
    assert!(FORMATION_GAIN > 0.0 && FORMATION_GAIN <= 1.0);
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
    assert!(COMPRESSION_SMOOTHING > 0.0 && COMPRESSION_SMOOTHING < 1.0);
    assert!(COMPRESSION_MAX_CONTRACTION > 0.0 && COMPRESSION_MAX_CONTRACTION < 1.0);
    assert!(COMPRESSION_RELAX_RATE > 0.0 && COMPRESSION_RELAX_RATE <= 1.0);
    // noise stays well under the per-tick approach step
    assert!(SHIMMER_STRENGTH < TRANSITION_SPEED);
    assert!(BROWNIAN_STRENGTH < TRANSITION_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_ordered() {
    // the OK band sits between a pinch and an open hand
    assert!(OK_SIGN_MIN < PINCH_THRESHOLD);
    assert!(PINCH_THRESHOLD < OK_SIGN_MAX);
    assert!(L_SHAPE_MIN_DEG < 90.0 && 90.0 < L_SHAPE_MAX_DEG);
    assert!(PEACE_ROTATION_GAIN < OPEN_PALM_ROTATION_GAIN);
    assert!(ROTATION_MOVE_THRESHOLD > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tracer_tolerances_allow_hand_tremor() {
    assert!(TRACE_EPSILON_XY < STATIONARY_TOLERANCE_XY);
    assert!(TRACE_EPSILON_Z < STATIONARY_TOLERANCE_Z);
    assert!(LOCK_HOLD_MS > 0);
    assert!(LOCKED_DENSITY > 0.0 && LOCKED_DENSITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn generator_and_interaction_extents() {
    // free flow overfills the cube; containment clips it
    assert!(FREE_FLOW_HALF_EXTENT > BOUNDARY_HALF_EXTENT);
    assert!(GLYPH_STROKE_JITTER > 0.0 && GLYPH_DEPTH_JITTER > 0.0);
    assert!(MAX_CLIP_ATTEMPTS > 0);
    assert!(INFLUENCE_RADIUS > INTERACTION_DISTANCE_SOFTENING);
}
