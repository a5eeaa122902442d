//! Two-hand shape tracing.
//!
//! While both hands hold the pointing pose the index tips draw a path. A
//! short stationary hold locks the path into a construction the simulator
//! can use as a target set; losing the pose on either hand clears it.

use crate::constants::{
    DEPTH_SCALE, LOCKED_DENSITY, LOCK_HOLD_MS, STATIONARY_TOLERANCE_XY, STATIONARY_TOLERANCE_Z,
    TRACE_EPSILON_XY, TRACE_EPSILON_Z,
};
use crate::error::{HoloError, Result};
use crate::geometry::{Aabb, TargetSet};
use crate::hands::{HandPose, Handedness};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TracePhase {
    Tracing,
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TracerState {
    Idle,
    Tracing,
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TracePoint {
    pub position: Vec3,
    pub timestamp_ms: u64,
}

/// An active construction. Its existence means two-hand mode owns the
/// interaction output.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeConstruction {
    pub phase: TracePhase,
    pub path: Vec<TracePoint>,
    /// Live while tracing, frozen once locked.
    pub bounds: Option<Aabb>,
    pub density: f32,
}

impl ShapeConstruction {
    pub fn is_locked(&self) -> bool {
        self.phase == TracePhase::Locked
    }

    /// Resample the recorded path evenly by arc length into `count` targets.
    pub fn to_target_set(&self, count: usize) -> Result<TargetSet> {
        if count == 0 {
            return Err(HoloError::ZeroParticleCount);
        }
        let pts: Vec<Vec3> = self.path.iter().map(|p| p.position).collect();
        let Some(&first) = pts.first() else {
            return Err(HoloError::EmptyTargetSet);
        };
        // cumulative arc length at each recorded point
        let mut cumulative = Vec::with_capacity(pts.len());
        let mut total = 0.0f32;
        cumulative.push(0.0);
        for w in pts.windows(2) {
            total += w[0].distance(w[1]);
            cumulative.push(total);
        }
        if total <= f32::EPSILON {
            return Ok(TargetSet::new(vec![first; count]));
        }

        let mut out = Vec::with_capacity(count);
        let mut seg = 0usize;
        for k in 0..count {
            let s = if count == 1 {
                0.0
            } else {
                total * k as f32 / (count - 1) as f32
            };
            while seg + 2 < pts.len() && cumulative[seg + 1] < s {
                seg += 1;
            }
            let span = cumulative[seg + 1] - cumulative[seg];
            let t = if span > 0.0 {
                ((s - cumulative[seg]) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            out.push(pts[seg].lerp(pts[seg + 1], t));
        }
        Ok(TargetSet::new(out))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TracerParams {
    /// Minimum change from the last recorded point before a new one is kept.
    pub epsilon_xy: f32,
    pub epsilon_z: f32,
    /// Per-sample movement below which a hand counts as stationary.
    pub stationary_xy: f32,
    pub stationary_z: f32,
    pub hold_ms: u64,
}

impl Default for TracerParams {
    fn default() -> Self {
        Self {
            epsilon_xy: TRACE_EPSILON_XY,
            epsilon_z: TRACE_EPSILON_Z,
            stationary_xy: STATIONARY_TOLERANCE_XY,
            stationary_z: STATIONARY_TOLERANCE_Z,
            hold_ms: LOCK_HOLD_MS,
        }
    }
}

/// Index tip in the interaction frame.
#[inline]
fn fingertip(pose: &HandPose) -> Vec3 {
    let tip = pose.index_tip();
    Vec3::new(tip.x * 2.0 - 1.0, -(tip.y * 2.0 - 1.0), -tip.z * DEPTH_SCALE)
}

/// The two hands to trace with, left first when the labels tell them apart.
pub fn hand_pair(hands: &[HandPose]) -> Option<(&HandPose, &HandPose)> {
    let (a, b) = match hands {
        [a, b, ..] => (a, b),
        _ => return None,
    };
    match (a.handedness, b.handedness) {
        (Some(Handedness::Right), Some(Handedness::Left)) => Some((b, a)),
        _ => Some((a, b)),
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShapeTracer {
    pub params: TracerParams,
    construction: Option<ShapeConstruction>,
    last_tips: Option<[Vec3; 2]>,
    last_sample_ms: u64,
    stationary_since: Option<u64>,
}

impl ShapeTracer {
    pub fn new(params: TracerParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn state(&self) -> TracerState {
        match self.construction.as_ref().map(|c| c.phase) {
            None => TracerState::Idle,
            Some(TracePhase::Tracing) => TracerState::Tracing,
            Some(TracePhase::Locked) => TracerState::Locked,
        }
    }

    pub fn construction(&self) -> Option<&ShapeConstruction> {
        self.construction.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.construction.is_some()
    }

    pub fn reset(&mut self) {
        if self.construction.is_some() {
            log::debug!("[tracer] {:?} -> Idle", self.state());
        }
        self.construction = None;
        self.last_tips = None;
        self.stationary_since = None;
    }

    /// Feed one tracker sample taken at `now_ms`.
    pub fn update(&mut self, hands: &[HandPose], now_ms: u64) -> Option<&ShapeConstruction> {
        let tips = match hand_pair(hands) {
            Some((a, b)) if a.finger_states().only_index() && b.finger_states().only_index() => {
                [fingertip(a), fingertip(b)]
            }
            _ => {
                self.reset();
                return None;
            }
        };

        if self.construction.is_none() {
            log::debug!("[tracer] Idle -> Tracing");
            self.construction = Some(ShapeConstruction {
                phase: TracePhase::Tracing,
                path: Vec::new(),
                bounds: None,
                density: 0.0,
            });
        }

        let stationary = self
            .last_tips
            .map(|prev| self.held(prev[0], tips[0]) && self.held(prev[1], tips[1]))
            .unwrap_or(false);
        let previous_ms = self.last_sample_ms;
        self.last_tips = Some(tips);
        self.last_sample_ms = now_ms;

        let params = self.params;
        let construction = self.construction.as_mut()?;
        if construction.is_locked() {
            return self.construction.as_ref();
        }

        if stationary {
            let since = *self.stationary_since.get_or_insert(previous_ms);
            if now_ms.saturating_sub(since) >= params.hold_ms {
                construction.phase = TracePhase::Locked;
                construction.bounds = Aabb::from_points(
                    &construction
                        .path
                        .iter()
                        .map(|p| p.position)
                        .collect::<Vec<_>>(),
                );
                construction.density = LOCKED_DENSITY;
                log::debug!(
                    "[tracer] Tracing -> Locked with {} points",
                    construction.path.len()
                );
            }
        } else {
            self.stationary_since = None;
            for tip in tips {
                let fresh = construction.path.last().map_or(true, |last| {
                    let d = (tip - last.position).abs();
                    d.x > params.epsilon_xy || d.y > params.epsilon_xy || d.z > params.epsilon_z
                });
                if fresh {
                    construction.path.push(TracePoint {
                        position: tip,
                        timestamp_ms: now_ms,
                    });
                }
            }
            log::trace!("[tracer] path has {} points", construction.path.len());
            construction.bounds = Aabb::from_points(
                &construction
                    .path
                    .iter()
                    .map(|p| p.position)
                    .collect::<Vec<_>>(),
            );
            let depth = (tips[0].z + tips[1].z) * 0.5;
            construction.density = 1.0 - ((depth + 1.0) * 0.5).clamp(0.0, 1.0);
        }
        self.construction.as_ref()
    }

    #[inline]
    fn held(&self, prev: Vec3, now: Vec3) -> bool {
        let d = (now - prev).abs();
        d.x < self.params.stationary_xy
            && d.y < self.params.stationary_xy
            && d.z < self.params.stationary_z
    }
}
