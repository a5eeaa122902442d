//! Per-frame particle dynamics.
//!
//! Particles live in index-aligned buffers (positions, velocities, targets,
//! sizes). A tick reads only global state (targets, the current interaction
//! vector, parameters) besides the particle's own slot.

use crate::constants::{
    AUTO_ROTATION_SPEED, BASE_SIZE_MIN, BASE_SIZE_SPAN, BOUNDARY_HALF_EXTENT,
    BOUNDARY_RESTITUTION, BROWNIAN_STRENGTH, COMPRESSION_MAX_CONTRACTION, COMPRESSION_RELAX_RATE,
    DEFAULT_PARTICLE_COUNT, FORMATION_GAIN, FORMATION_VELOCITY_JITTER, INFLUENCE_RADIUS,
    INTERACTION_DISTANCE_SOFTENING, INTERACTION_FORCE_GAIN, INTERACTION_SCALE, MAX_PARTICLES,
    MORPH_DURATION_SECS, SHIMMER_STRENGTH, SPAWN_HALF_EXTENT, TRANSITION_SPEED,
    VELOCITY_DAMPING,
};
use crate::error::{HoloError, Result};
use crate::geometry::{self, HalfSpaceClip, ShapeKind, TargetSet};
use crate::interaction::InteractionVector;
use crate::state::Orientation;
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Integrator {
    /// `position += (target - position) * transition_speed` each tick.
    #[default]
    Exponential,
    /// Stepwise: forces accumulate into a damped velocity.
    Velocity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
    pub particle_count: usize,
    pub formation: bool,
    pub integrator: Integrator,
    pub transition_speed: f32,
    pub formation_gain: f32,
    /// Full span of the velocity integrator's formation jitter.
    pub formation_jitter: f32,
    /// Full span of the exponential integrator's shimmer.
    pub shimmer: f32,
    /// Full span of the per-axis Brownian displacement.
    pub brownian: f32,
    pub damping: f32,
    pub boundary: f32,
    pub restitution: f32,
    pub influence_radius: f32,
    pub interaction_scale: f32,
    pub sensitivity: f32,
    pub morph_duration: f32,
    pub auto_rotation_speed: f32,
    pub clip: Option<HalfSpaceClip>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            formation: true,
            integrator: Integrator::default(),
            transition_speed: TRANSITION_SPEED,
            formation_gain: FORMATION_GAIN,
            formation_jitter: FORMATION_VELOCITY_JITTER,
            shimmer: SHIMMER_STRENGTH,
            brownian: BROWNIAN_STRENGTH,
            damping: VELOCITY_DAMPING,
            boundary: BOUNDARY_HALF_EXTENT,
            restitution: BOUNDARY_RESTITUTION,
            influence_radius: INFLUENCE_RADIUS,
            interaction_scale: INTERACTION_SCALE,
            sensitivity: 1.0,
            morph_duration: MORPH_DURATION_SECS,
            auto_rotation_speed: AUTO_ROTATION_SPEED,
            clip: None,
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(HoloError::ZeroParticleCount);
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(HoloError::InvalidParams("particle count above maximum"));
        }
        if !(self.transition_speed > 0.0 && self.transition_speed <= 1.0) {
            return Err(HoloError::InvalidParams("transition speed must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(HoloError::InvalidParams("damping must be in [0, 1]"));
        }
        if !(self.boundary > 0.0) {
            return Err(HoloError::InvalidParams("boundary must be positive"));
        }
        if !(-1.0..=0.0).contains(&self.restitution) {
            return Err(HoloError::InvalidParams("restitution must be in [-1, 0]"));
        }
        if [self.influence_radius, self.morph_duration, self.sensitivity]
            .iter()
            .any(|x| !x.is_finite() || *x < 0.0)
        {
            return Err(HoloError::InvalidParams(
                "radius, morph duration and sensitivity must be finite and non-negative",
            ));
        }
        if [self.shimmer, self.brownian, self.formation_jitter]
            .iter()
            .any(|s| !s.is_finite() || *s < 0.0)
        {
            return Err(HoloError::InvalidParams("noise spans must be non-negative"));
        }
        Ok(())
    }
}

/// Ease-in-out blend used for morphs.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Keep a particle inside the cube `[-half, half]³`. On each axis that is
/// out of bounds the velocity component is scaled by `restitution` and the
/// position clamped to the face.
#[inline]
pub fn contain(mut pos: Vec3, mut vel: Vec3, half: f32, restitution: f32) -> (Vec3, Vec3) {
    for axis in 0..3 {
        if pos[axis].abs() > half {
            vel[axis] *= restitution;
            pos[axis] = pos[axis].clamp(-half, half);
        }
    }
    (pos, vel)
}

#[inline]
fn jitter(rng: &mut StdRng, span: f32) -> Vec3 {
    if span == 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
    )
}

#[derive(Clone, Debug)]
struct Morph {
    from: Vec<Vec3>,
    to: Vec<Vec3>,
    elapsed: f32,
}

pub struct ParticleSimulator {
    pub params: SimParams,
    pub orientation: Orientation,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    targets: Vec<Vec3>,
    sizes: Vec<f32>,
    target_set: TargetSet,
    morph: Option<Morph>,
    interaction: InteractionVector,
    compression: f32,
    rng: StdRng,
}

impl ParticleSimulator {
    pub fn new(params: SimParams, targets: TargetSet, seed: u64) -> Result<Self> {
        params.validate()?;
        if targets.is_empty() {
            return Err(HoloError::EmptyTargetSet);
        }
        let mut sim = Self {
            orientation: Orientation::with_speed(params.auto_rotation_speed),
            params,
            positions: Vec::new(),
            velocities: Vec::new(),
            targets: Vec::new(),
            sizes: Vec::new(),
            target_set: targets,
            morph: None,
            interaction: InteractionVector::INACTIVE,
            compression: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        sim.spawn(sim.params.particle_count);
        Ok(sim)
    }

    /// Simulator seeded with a generated shape.
    pub fn with_shape(params: SimParams, shape: ShapeKind, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        let targets = geometry::generate_with(shape, params.particle_count, params.clip, &mut rng);
        Self::new(params, targets, seed)
    }

    fn spawn(&mut self, count: usize) {
        let rng = &mut self.rng;
        let half = SPAWN_HALF_EXTENT;
        self.positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        self.velocities = vec![Vec3::ZERO; count];
        self.sizes = (0..count)
            .map(|_| BASE_SIZE_MIN + rng.gen::<f32>() * BASE_SIZE_SPAN)
            .collect();
        self.targets = self.assigned(count);
        self.morph = None;
    }

    fn assigned(&self, count: usize) -> Vec<Vec3> {
        (0..count)
            .map(|i| self.target_set.wrapped(i).unwrap_or(Vec3::ZERO))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Reallocate the particle field. Any in-flight morph is discarded.
    pub fn resize(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(HoloError::ZeroParticleCount);
        }
        if count > MAX_PARTICLES {
            return Err(HoloError::InvalidParams("particle count above maximum"));
        }
        log::debug!("[sim] resize {} -> {} particles", self.len(), count);
        self.params.particle_count = count;
        self.spawn(count);
        Ok(())
    }

    /// Scatter particles again without touching their targets.
    pub fn reset_positions(&mut self) {
        let rng = &mut self.rng;
        let half = SPAWN_HALF_EXTENT;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p = Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
            *v = Vec3::ZERO;
        }
    }

    /// Morph toward a new target set. An empty set is refused and the
    /// current one kept.
    pub fn set_targets(&mut self, targets: TargetSet) -> Result<()> {
        if targets.is_empty() {
            log::warn!("[sim] refusing empty target set");
            return Err(HoloError::EmptyTargetSet);
        }
        self.target_set = targets;
        let to = self.assigned(self.len());
        if self.params.morph_duration <= 0.0 {
            self.targets = to;
            self.morph = None;
        } else {
            log::debug!("[sim] morph to {} targets", self.target_set.len());
            self.morph = Some(Morph {
                from: self.targets.clone(),
                to,
                elapsed: 0.0,
            });
        }
        Ok(())
    }

    /// Generate `shape` at the current particle count and morph to it.
    pub fn set_shape(&mut self, shape: ShapeKind) -> Result<()> {
        let set = geometry::generate_with(shape, self.len(), self.params.clip, &mut self.rng);
        self.set_targets(set)
    }

    pub fn set_formation(&mut self, formation: bool) {
        self.params.formation = formation;
    }

    pub fn formation(&self) -> bool {
        self.params.formation
    }

    pub fn set_interaction(&mut self, interaction: InteractionVector) {
        self.interaction = interaction;
    }

    pub fn interaction(&self) -> &InteractionVector {
        &self.interaction
    }

    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }

    /// Current contraction intensity in [0, 1].
    pub fn compression(&self) -> f32 {
        self.compression
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as flat `x, y, z` floats for upload.
    pub fn positions_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Per-particle effective targets (morph applied, compression not).
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn target_set(&self) -> &TargetSet {
        &self.target_set
    }

    /// Mean distance from each particle to its effective target.
    pub fn mean_target_error(&self) -> f32 {
        if self.positions.is_empty() {
            return 0.0;
        }
        let scale = self.contraction();
        let sum: f32 = self
            .positions
            .iter()
            .zip(&self.targets)
            .map(|(p, t)| p.distance(*t * scale))
            .sum();
        sum / self.positions.len() as f32
    }

    #[inline]
    fn contraction(&self) -> f32 {
        1.0 - COMPRESSION_MAX_CONTRACTION * self.compression
    }

    fn advance_morph(&mut self, dt: f32) {
        let Some(morph) = self.morph.as_mut() else {
            return;
        };
        morph.elapsed += dt;
        let t = if self.params.morph_duration > 0.0 {
            (morph.elapsed / self.params.morph_duration).min(1.0)
        } else {
            1.0
        };
        let e = ease_in_out(t);
        for ((target, from), to) in self.targets.iter_mut().zip(&morph.from).zip(&morph.to) {
            *target = from.lerp(*to, e);
        }
        if t >= 1.0 {
            log::debug!("[sim] morph finished");
            self.morph = None;
        }
    }

    fn advance_compression(&mut self) {
        match self.interaction.compression {
            Some(c) if self.interaction.active => {
                self.compression = c.intensity.clamp(0.0, 1.0);
            }
            _ => {
                self.compression = (self.compression - COMPRESSION_RELAX_RATE).max(0.0);
            }
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        self.advance_morph(secs);
        self.advance_compression();
        if let Some(delta) = self.interaction.rotation.take() {
            self.orientation.apply(delta);
        }
        self.orientation.auto_speed = self.params.auto_rotation_speed;
        self.orientation.advance(dt, self.params.formation);

        let scale = self.contraction();
        let p = self.params.clone();
        let v = self.interaction;
        // interaction point in world units and the per-particle force factor
        let force = (v.active && v.kind.force_sign() != 0.0).then(|| {
            let point = Vec3::new(
                v.position.x * p.interaction_scale,
                v.position.y * p.interaction_scale,
                v.position.z,
            );
            let gain = v.kind.force_sign() * INTERACTION_FORCE_GAIN * v.strength * p.sensitivity;
            (point, gain)
        });

        let Self {
            positions,
            velocities,
            targets,
            rng,
            ..
        } = self;
        for i in 0..positions.len() {
            let mut pos = positions[i];
            let mut vel = velocities[i];
            let target = targets[i] * scale;

            let push = force
                .map(|(point, gain)| {
                    let d = point - pos;
                    let dist = d.length();
                    if dist < p.influence_radius {
                        d * (gain / (dist + INTERACTION_DISTANCE_SOFTENING))
                    } else {
                        Vec3::ZERO
                    }
                })
                .unwrap_or(Vec3::ZERO);

            match p.integrator {
                Integrator::Exponential => {
                    let mut delta = push + jitter(rng, p.brownian);
                    if p.formation {
                        delta += (target - pos) * p.transition_speed + jitter(rng, p.shimmer);
                    }
                    pos += delta;
                    vel = delta;
                }
                Integrator::Velocity => {
                    if p.formation {
                        vel += (target - pos) * p.formation_gain + jitter(rng, p.formation_jitter);
                    }
                    vel += push + jitter(rng, p.brownian);
                    vel *= p.damping;
                    pos += vel;
                }
            }

            let (pos, vel) = contain(pos, vel, p.boundary, p.restitution);
            positions[i] = pos;
            velocities[i] = vel;
        }
    }
}
