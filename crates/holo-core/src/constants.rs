// Calibrated tuning constants shared by the simulator, the gesture classifier
// and the shape tracer. Gesture strengths and thresholds are behavioural
// constants; changing them changes how the display feels.

// Particle field
pub const DEFAULT_PARTICLE_COUNT: usize = 4000;
pub const MAX_PARTICLES: usize = 8000;
pub const SPAWN_HALF_EXTENT: f32 = 1.0; // particles spawn inside this cube
pub const BOUNDARY_HALF_EXTENT: f32 = 1.5; // containment cube
pub const BOUNDARY_RESTITUTION: f32 = -0.5; // velocity factor on a boundary hit
pub const BASE_SIZE_MIN: f32 = 2.0; // cosmetic per-particle size range
pub const BASE_SIZE_SPAN: f32 = 3.0;

// Dynamics
pub const TRANSITION_SPEED: f32 = 0.05; // exponential approach per tick
pub const FORMATION_GAIN: f32 = 0.05; // velocity integrator attraction gain
pub const FORMATION_VELOCITY_JITTER: f32 = 0.02; // velocity integrator shimmer (full span)
pub const SHIMMER_STRENGTH: f32 = 0.001; // exponential integrator shimmer (full span)
pub const BROWNIAN_STRENGTH: f32 = 0.002; // idle displacement (full span)
pub const VELOCITY_DAMPING: f32 = 0.95;

// Interaction
pub const INFLUENCE_RADIUS: f32 = 3.0;
pub const INTERACTION_FORCE_GAIN: f32 = 0.02;
pub const INTERACTION_DISTANCE_SOFTENING: f32 = 0.1;
pub const INTERACTION_SCALE: f32 = 2.0; // normalized [-1, 1] -> world units
pub const CURSOR_STRENGTH: f32 = 1.0;
pub const DRAG_ROTATION_PER_PIXEL: f32 = 0.01;
pub const KEY_ROTATION_STEP: f32 = 0.1;

// Morph and orientation
pub const MORPH_DURATION_SECS: f32 = 0.8;
pub const AUTO_ROTATION_SPEED: f32 = 0.3; // radians per second
pub const COMPRESSION_MAX_CONTRACTION: f32 = 0.5;
pub const COMPRESSION_RELAX_RATE: f32 = 0.1; // per tick, when no compression is held

// Gesture classification
pub const THUMB_EXTENSION_THRESHOLD: f32 = 0.1;
pub const PINCH_THRESHOLD: f32 = 0.05;
pub const OK_SIGN_MIN: f32 = 0.03;
pub const OK_SIGN_MAX: f32 = 0.08;
pub const L_SHAPE_MIN_DEG: f32 = 75.0;
pub const L_SHAPE_MAX_DEG: f32 = 105.0;
pub const L_SHAPE_MIN_LEG: f32 = 0.05; // shorter legs are degenerate
pub const ROTATION_MOVE_THRESHOLD: f32 = 0.002;
pub const OPEN_PALM_ROTATION_GAIN: f32 = 20.0;
pub const PEACE_ROTATION_GAIN: f32 = 8.0;
pub const DEPTH_SCALE: f32 = 3.0;
pub const COMPRESSION_SMOOTHING: f32 = 0.15;

// Two-hand shape tracing
pub const TRACE_EPSILON_XY: f32 = 0.01;
pub const TRACE_EPSILON_Z: f32 = 0.02;
pub const STATIONARY_TOLERANCE_XY: f32 = 0.02;
pub const STATIONARY_TOLERANCE_Z: f32 = 0.05;
pub const LOCK_HOLD_MS: u64 = 300;
pub const LOCKED_DENSITY: f32 = 0.5;

// Geometry
pub const FREE_FLOW_HALF_EXTENT: f32 = 2.0;
pub const GLYPH_STROKE_JITTER: f32 = 0.03;
pub const GLYPH_DEPTH_JITTER: f32 = 0.05;
pub const MAX_CLIP_ATTEMPTS: usize = 10_000;
