//! Procedural target formations.
//!
//! Every shape is described as a list of parts. A part owns a fixed share of
//! the requested particle count and a sampler that maps a local parameter
//! `t` in \[0, 1) (plus the injected random source) to a point. Budgets are
//! `floor(count * share)` per part with the last part taking the rest, so a
//! generated [`TargetSet`] always holds exactly `count` points.
//!
//! Bounds (largest absolute coordinate) per shape are reported by
//! [`ShapeKind::bound`] and hold for every call with the same parameters.

use crate::constants::{
    FREE_FLOW_HALF_EXTENT, GLYPH_DEPTH_JITTER, GLYPH_STROKE_JITTER, MAX_CLIP_ATTEMPTS,
};
use crate::error::HoloError;
use crate::glyphs::{self, Stroke};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

pub type Point3 = Vec3;

/// Ordered goal positions for the particle field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetSet {
    points: Vec<Point3>,
}

impl TargetSet {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Target for particle `index`, wrapping around the set.
    ///
    /// Returns `None` only for an empty set.
    #[inline]
    pub fn wrapped(&self, index: usize) -> Option<Point3> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.points[index % self.points.len()])
        }
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl From<Vec<Point3>> for TargetSet {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn component(self, p: Vec3) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }

    #[inline]
    fn set(self, p: &mut Vec3, value: f32) {
        match self {
            Axis::X => p.x = value,
            Axis::Y => p.y = value,
            Axis::Z => p.z = value,
        }
    }
}

/// Keeps only the half-space `point[axis] >= 0` ("dissection" view).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfSpaceClip {
    pub axis: Axis,
}

impl HalfSpaceClip {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    #[inline]
    pub fn accepts(&self, p: Vec3) -> bool {
        self.axis.component(p) >= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Torus,
    Cylinder,
    Cone,
    Pyramid,
    Cube,
    Bell,
    Tree,
    Car,
    Airplane,
    Humanoid,
    House,
    Laptop,
    Dna,
    Heart,
    Galaxy,
    Letter(char),
    Free,
}

impl ShapeKind {
    /// Every parameterless preset, in menu order.
    pub const ALL_PRESETS: [ShapeKind; 17] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::Pyramid,
        ShapeKind::Bell,
        ShapeKind::Tree,
        ShapeKind::Car,
        ShapeKind::Airplane,
        ShapeKind::Humanoid,
        ShapeKind::House,
        ShapeKind::Laptop,
        ShapeKind::Dna,
        ShapeKind::Heart,
        ShapeKind::Galaxy,
        ShapeKind::Free,
    ];

    /// Parse a shape name, falling back to the free-flow fill for anything
    /// unrecognised.
    pub fn from_name_or_free(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("[geometry] unknown shape '{name}', using free flow");
            ShapeKind::Free
        })
    }

    pub fn name(&self) -> String {
        match self {
            ShapeKind::Sphere => "sphere".into(),
            ShapeKind::Torus => "torus".into(),
            ShapeKind::Cylinder => "cylinder".into(),
            ShapeKind::Cone => "cone".into(),
            ShapeKind::Pyramid => "pyramid".into(),
            ShapeKind::Cube => "cube".into(),
            ShapeKind::Bell => "bell".into(),
            ShapeKind::Tree => "tree".into(),
            ShapeKind::Car => "car".into(),
            ShapeKind::Airplane => "airplane".into(),
            ShapeKind::Humanoid => "human".into(),
            ShapeKind::House => "house".into(),
            ShapeKind::Laptop => "laptop".into(),
            ShapeKind::Dna => "dna".into(),
            ShapeKind::Heart => "heart".into(),
            ShapeKind::Galaxy => "galaxy".into(),
            ShapeKind::Letter(c) => format!("letter {}", c.to_ascii_uppercase()),
            ShapeKind::Free => "free".into(),
        }
    }

    /// Largest absolute coordinate any generated point can have.
    pub fn bound(&self) -> f32 {
        match self {
            ShapeKind::Sphere => 1.0,
            ShapeKind::Torus => TORUS_MAJOR + TORUS_MINOR,
            ShapeKind::Cylinder => CYLINDER_HALF_HEIGHT.max(CYLINDER_RADIUS),
            ShapeKind::Cone => CONE_HALF_HEIGHT.max(CONE_RADIUS),
            ShapeKind::Pyramid => PYRAMID_APEX_Y.max(PYRAMID_HALF_BASE),
            ShapeKind::Cube => CUBE_HALF_EXTENT,
            ShapeKind::Bell => 0.85,
            ShapeKind::Tree => 0.95,
            ShapeKind::Car => 0.85,
            ShapeKind::Airplane => 1.0,
            ShapeKind::Humanoid => 0.95,
            ShapeKind::House => 0.45,
            ShapeKind::Laptop => 0.65,
            ShapeKind::Dna => 1.5,
            ShapeKind::Heart => 0.9,
            ShapeKind::Galaxy => 2.0,
            ShapeKind::Letter(c) if glyphs::strokes(*c).is_some() => {
                GLYPH_HALF_EXTENT + GLYPH_STROKE_JITTER
            }
            ShapeKind::Letter(_) | ShapeKind::Free => FREE_FLOW_HALF_EXTENT,
        }
    }

    fn parts(&self) -> Vec<Part> {
        match self {
            ShapeKind::Sphere => vec![Part::new(1.0, sphere)],
            ShapeKind::Torus => vec![Part::new(1.0, torus)],
            ShapeKind::Cylinder => vec![Part::new(1.0, cylinder)],
            ShapeKind::Cone => vec![Part::new(1.0, cone)],
            ShapeKind::Pyramid => vec![Part::new(1.0, pyramid)],
            ShapeKind::Cube => vec![Part::new(1.0, cube)],
            ShapeKind::Bell => vec![Part::new(1.0, bell)],
            ShapeKind::Tree => vec![
                Part::new(0.25, tree_trunk),
                Part::new(0.15, tree_branch),
                Part::new(0.60, tree_foliage),
            ],
            ShapeKind::Car => vec![
                Part::new(0.20, car_hood),
                Part::new(0.35, car_body),
                Part::new(0.15, car_roof),
                Part::new(0.10, car_trunk),
                Part::new(0.20, car_wheels),
            ],
            ShapeKind::Airplane => vec![
                Part::new(0.40, airplane_fuselage),
                Part::new(0.40, airplane_wings),
                Part::new(0.20, airplane_tail),
            ],
            ShapeKind::Humanoid => vec![
                Part::new(0.12, human_head),
                Part::new(0.03, human_neck),
                Part::new(0.08, human_shoulders),
                Part::new(0.25, human_torso),
                Part::new(0.22, human_arms),
                Part::new(0.30, human_legs),
            ],
            ShapeKind::House => vec![
                Part::new(0.15, house_foundation),
                Part::new(0.50, house_walls),
                Part::new(0.35, house_roof),
            ],
            ShapeKind::Laptop => vec![
                Part::new(0.40, laptop_deck),
                Part::new(0.20, laptop_keys),
                Part::new(0.40, laptop_screen),
            ],
            ShapeKind::Dna => vec![Part::new(1.0, dna)],
            ShapeKind::Heart => vec![Part::new(1.0, heart)],
            ShapeKind::Galaxy => vec![Part::new(1.0, galaxy)],
            ShapeKind::Letter(c) => match glyphs::strokes(*c) {
                Some(glyph) => vec![Part::new(1.0, move |rng: &mut dyn RngCore, _t: f32| {
                    glyph_point(glyph, rng)
                })],
                None => {
                    log::warn!("[geometry] no glyph for '{c}', using free flow");
                    vec![Part::new(1.0, free_flow)]
                }
            },
            ShapeKind::Free => vec![Part::new(1.0, free_flow)],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = HoloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let shape = match key.as_str() {
            "sphere" => ShapeKind::Sphere,
            "torus" => ShapeKind::Torus,
            "cylinder" => ShapeKind::Cylinder,
            "cone" => ShapeKind::Cone,
            "pyramid" => ShapeKind::Pyramid,
            "cube" => ShapeKind::Cube,
            "bell" => ShapeKind::Bell,
            "tree" => ShapeKind::Tree,
            "car" => ShapeKind::Car,
            "airplane" | "plane" => ShapeKind::Airplane,
            "human" | "humanoid" => ShapeKind::Humanoid,
            "house" => ShapeKind::House,
            "laptop" => ShapeKind::Laptop,
            "dna" => ShapeKind::Dna,
            "heart" => ShapeKind::Heart,
            "galaxy" => ShapeKind::Galaxy,
            "free" | "free flow" => ShapeKind::Free,
            other => {
                let letter = other.strip_prefix("letter").map(str::trim).unwrap_or(other);
                let mut chars = letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        ShapeKind::Letter(c.to_ascii_uppercase())
                    }
                    _ => return Err(HoloError::UnknownShape(s.to_string())),
                }
            }
        };
        Ok(shape)
    }
}

type SampleFn = Box<dyn Fn(&mut dyn RngCore, f32) -> Vec3>;

struct Part {
    share: f32,
    sample: SampleFn,
}

impl Part {
    fn new(share: f32, sample: impl Fn(&mut dyn RngCore, f32) -> Vec3 + 'static) -> Self {
        Self {
            share,
            sample: Box::new(sample),
        }
    }
}

fn budgets(count: usize, parts: &[Part]) -> Vec<usize> {
    let mut out = Vec::with_capacity(parts.len());
    let mut used = 0usize;
    for (i, part) in parts.iter().enumerate() {
        let n = if i + 1 == parts.len() {
            count.saturating_sub(used)
        } else {
            ((count as f32 * part.share).floor() as usize).min(count - used)
        };
        used += n;
        out.push(n);
    }
    out
}

/// Seeded generator facade for callers that keep a random source around.
pub struct GeometryGenerator {
    rng: StdRng,
}

impl GeometryGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn generate(
        &mut self,
        shape: ShapeKind,
        count: usize,
        clip: Option<HalfSpaceClip>,
    ) -> TargetSet {
        generate_with(shape, count, clip, &mut self.rng)
    }
}

/// Generate `count` targets for `shape` using the thread-local random source.
pub fn generate(shape: ShapeKind, count: usize, clip: Option<HalfSpaceClip>) -> TargetSet {
    generate_with(shape, count, clip, &mut rand::thread_rng())
}

/// Generate `count` targets for `shape` from an injected random source.
///
/// With a clip, rejected points are resampled until accepted, so the set
/// still holds exactly `count` points.
pub fn generate_with<R: RngCore>(
    shape: ShapeKind,
    count: usize,
    clip: Option<HalfSpaceClip>,
    rng: &mut R,
) -> TargetSet {
    let rng: &mut dyn RngCore = rng;
    let parts = shape.parts();
    let mut points = Vec::with_capacity(count);
    for (part, n) in parts.iter().zip(budgets(count, &parts)) {
        for k in 0..n {
            let t = k as f32 / n as f32;
            let p = (part.sample)(&mut *rng, t);
            let p = match clip {
                Some(c) if !c.accepts(p) => resample_clipped(&parts, c, rng),
                _ => p,
            };
            points.push(p);
        }
    }
    TargetSet::new(points)
}

fn resample_clipped(parts: &[Part], clip: HalfSpaceClip, rng: &mut dyn RngCore) -> Vec3 {
    let total: f32 = parts.iter().map(|p| p.share).sum();
    let mut candidate = Vec3::ZERO;
    for _ in 0..MAX_CLIP_ATTEMPTS {
        let mut pick = rng.gen::<f32>() * total;
        let part = parts
            .iter()
            .find(|p| {
                pick -= p.share;
                pick < 0.0
            })
            .unwrap_or(&parts[parts.len() - 1]);
        let t = rng.gen::<f32>();
        candidate = (part.sample)(&mut *rng, t);
        if clip.accepts(candidate) {
            return candidate;
        }
    }
    log::warn!(
        "[geometry] clip on {:?} found no accepted sample, mirroring",
        clip.axis
    );
    let mirrored = clip.axis.component(candidate).abs();
    clip.axis.set(&mut candidate, mirrored);
    candidate
}

// ---------------- sampling helpers ----------------

#[inline]
fn unit(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

#[inline]
fn centered(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>() - 0.5
}

#[inline]
fn angle(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>() * TAU
}

/// Uniform point on the triangle `a b c`.
fn triangle(rng: &mut dyn RngCore, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let r1 = unit(rng).sqrt();
    let r2 = unit(rng);
    a * (1.0 - r1) + b * (r1 * (1.0 - r2)) + c * (r1 * r2)
}

/// Mirror a right-side point to the left half for `t < 0.5`, returning the
/// side-local parameter.
#[inline]
fn sided(t: f32) -> (f32, f32) {
    if t < 0.5 {
        (-1.0, t * 2.0)
    } else {
        (1.0, (t - 0.5) * 2.0)
    }
}

#[inline]
fn mirror_x(p: Vec3, side: f32) -> Vec3 {
    Vec3::new(p.x * side, p.y, p.z)
}

/// Two-joint limb: `s` in [0, 0.5) covers the first segment, the rest the second.
#[inline]
fn limb(root: Vec3, joint: Vec3, end: Vec3, s: f32) -> Vec3 {
    if s < 0.5 {
        root.lerp(joint, s * 2.0)
    } else {
        joint.lerp(end, (s - 0.5) * 2.0)
    }
}

// ---------------- surface solids ----------------

const CUBE_HALF_EXTENT: f32 = 0.8;
const TORUS_MAJOR: f32 = 0.7;
const TORUS_MINOR: f32 = 0.25;
const CYLINDER_RADIUS: f32 = 0.6;
const CYLINDER_HALF_HEIGHT: f32 = 0.8;
const CONE_RADIUS: f32 = 0.7;
const CONE_HALF_HEIGHT: f32 = 0.7;
const PYRAMID_HALF_BASE: f32 = 0.7;
const PYRAMID_BASE_Y: f32 = -0.6;
const PYRAMID_APEX_Y: f32 = 0.8;

fn sphere(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    // inverse-CDF polar angle avoids clustering at the poles
    let theta = (2.0 * unit(rng) - 1.0).clamp(-1.0, 1.0).acos();
    let phi = angle(rng);
    Vec3::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}

fn torus(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let u = angle(rng);
    let v = angle(rng);
    let ring = TORUS_MAJOR + TORUS_MINOR * v.cos();
    Vec3::new(ring * u.cos(), TORUS_MINOR * v.sin(), ring * u.sin())
}

fn cylinder(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let side_area = TAU * CYLINDER_RADIUS * 2.0 * CYLINDER_HALF_HEIGHT;
    let cap_area = PI * CYLINDER_RADIUS * CYLINDER_RADIUS;
    let a = angle(rng);
    if unit(rng) * (side_area + 2.0 * cap_area) < side_area {
        let y = (unit(rng) * 2.0 - 1.0) * CYLINDER_HALF_HEIGHT;
        Vec3::new(CYLINDER_RADIUS * a.cos(), y, CYLINDER_RADIUS * a.sin())
    } else {
        let r = CYLINDER_RADIUS * unit(rng).sqrt();
        let y = if unit(rng) < 0.5 {
            -CYLINDER_HALF_HEIGHT
        } else {
            CYLINDER_HALF_HEIGHT
        };
        Vec3::new(r * a.cos(), y, r * a.sin())
    }
}

fn cone(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let height = 2.0 * CONE_HALF_HEIGHT;
    let slant = (CONE_RADIUS * CONE_RADIUS + height * height).sqrt();
    let lateral_area = PI * CONE_RADIUS * slant;
    let base_area = PI * CONE_RADIUS * CONE_RADIUS;
    let a = angle(rng);
    if unit(rng) * (lateral_area + base_area) < lateral_area {
        // distance from the apex grows with sqrt for uniform area
        let s = unit(rng).sqrt();
        let r = s * CONE_RADIUS;
        Vec3::new(r * a.cos(), CONE_HALF_HEIGHT - s * height, r * a.sin())
    } else {
        let r = CONE_RADIUS * unit(rng).sqrt();
        Vec3::new(r * a.cos(), -CONE_HALF_HEIGHT, r * a.sin())
    }
}

fn pyramid(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let h = PYRAMID_HALF_BASE;
    let apex = Vec3::new(0.0, PYRAMID_APEX_Y, 0.0);
    let corners = [
        Vec3::new(-h, PYRAMID_BASE_Y, -h),
        Vec3::new(h, PYRAMID_BASE_Y, -h),
        Vec3::new(h, PYRAMID_BASE_Y, h),
        Vec3::new(-h, PYRAMID_BASE_Y, h),
    ];
    let rise = PYRAMID_APEX_Y - PYRAMID_BASE_Y;
    let face_area = 0.5 * (2.0 * h) * (h * h + rise * rise).sqrt();
    let base_area = 4.0 * h * h;
    if unit(rng) * (4.0 * face_area + base_area) < 4.0 * face_area {
        let face = rng.gen_range(0..4);
        triangle(rng, apex, corners[face], corners[(face + 1) % 4])
    } else {
        Vec3::new(
            (unit(rng) * 2.0 - 1.0) * h,
            PYRAMID_BASE_Y,
            (unit(rng) * 2.0 - 1.0) * h,
        )
    }
}

fn cube(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let h = CUBE_HALF_EXTENT;
    let u = (unit(rng) * 2.0 - 1.0) * h;
    let v = (unit(rng) * 2.0 - 1.0) * h;
    match rng.gen_range(0..6) {
        0 => Vec3::new(u, v, h),
        1 => Vec3::new(u, v, -h),
        2 => Vec3::new(u, h, v),
        3 => Vec3::new(u, -h, v),
        4 => Vec3::new(h, u, v),
        _ => Vec3::new(-h, u, v),
    }
}

fn bell(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let a = angle(rng);
    if unit(rng) < 0.08 {
        // crown cap
        let r = 0.2 * unit(rng).sqrt();
        return Vec3::new(r * a.cos(), 0.8, r * a.sin());
    }
    let h = unit(rng);
    let r = 0.2 + 0.45 * h * h + 0.2 * h.powi(6);
    Vec3::new(r * a.cos(), 0.8 - h * 1.5, r * a.sin())
}

// ---------------- composite shapes ----------------

const TREE_BRANCHES: usize = 14;
const GOLDEN_ANGLE: f32 = 2.399_963;

fn tree_trunk(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    // twist tightens toward the crown
    let a = t * PI * 12.0 + t * t * t * PI * 4.0 + unit(rng) * 0.3;
    let radius = 0.08 * (1.0 - t * 0.7) * (1.0 + (a * 8.0).sin() * 0.1);
    let wobble = (t * 10.0).sin() * 0.01;
    Vec3::new(radius * a.cos() + wobble, t - 0.6, radius * a.sin() + wobble)
}

fn tree_branch(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let scaled = t * TREE_BRANCHES as f32;
    let b = scaled.floor();
    let s = (scaled - b + centered(rng) * 0.05).clamp(0.0, 1.0);
    let height = 0.2 + (b * 0.618_034).fract() * 0.6;
    let heading = b * GOLDEN_ANGLE;
    let length = 0.2 + (b * 0.414_214).fract() * 0.2;
    Vec3::new(
        heading.cos() * length * s,
        height - 0.6 + s * 0.2,
        heading.sin() * length * s,
    )
}

fn tree_foliage(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let layer = rng.gen_range(0..3) as f32;
    let layer_radius = 0.4 + layer * 0.15;
    let layer_height = 0.5 - layer * 0.2;
    let theta = (2.0 * unit(rng) - 1.0).clamp(-1.0, 1.0).acos();
    let phi = angle(rng);
    let clump = unit(rng) * 0.3;
    Vec3::new(
        layer_radius * theta.sin() * phi.cos() * (1.0 + clump),
        layer_radius * theta.sin() * phi.sin() * 0.8 + layer_height,
        layer_radius * theta.cos() * (1.0 + clump),
    )
}

fn car_hood(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let x = centered(rng) * 0.6;
    let z = centered(rng) * 0.6;
    Vec3::new(x + 0.5, -0.1 + x.abs() * 0.1, z)
}

fn car_body(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    // hollow shell: reject samples from the inner core
    let half = Vec3::new(0.55, 0.2, 0.35);
    loop {
        let p = Vec3::new(
            centered(rng) * 2.0 * half.x,
            centered(rng) * 2.0 * half.y,
            centered(rng) * 2.0 * half.z,
        );
        let q = p / half;
        if q.x.abs() > 0.85 || q.y.abs() > 0.85 || q.z.abs() > 0.85 {
            return p + Vec3::new(0.0, -0.1, 0.0);
        }
    }
}

fn car_roof(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    Vec3::new(centered(rng) * 0.5, 0.25, centered(rng) * 0.6)
}

fn car_trunk(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let x = centered(rng) * 0.6;
    let z = centered(rng) * 0.5;
    Vec3::new(x - 0.5, -0.1 + x.abs() * 0.05, z)
}

fn car_wheels(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    const HUBS: [[f32; 2]; 4] = [[0.5, 0.35], [0.5, -0.35], [-0.5, 0.35], [-0.5, -0.35]];
    let scaled = t * HUBS.len() as f32;
    let wheel = (scaled.floor() as usize).min(HUBS.len() - 1);
    let a = (scaled - wheel as f32) * TAU;
    let r = 0.12 + rng.gen_range(0..3) as f32 * 0.02;
    let [hx, hz] = HUBS[wheel];
    Vec3::new(hx + a.cos() * r, a.sin() * r - 0.35, hz)
}

fn airplane_fuselage(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let x = centered(rng) * 2.0;
    let r = 0.1 * (1.0 - x.abs() * 0.8);
    let a = angle(rng);
    Vec3::new(x, a.cos() * r, a.sin() * r)
}

fn airplane_wings(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let z = centered(rng) * 2.0;
    let x = centered(rng) * 0.3;
    Vec3::new(x - 0.1, 0.0, z)
}

fn airplane_tail(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    Vec3::new(
        -0.8 + centered(rng) * 0.1,
        unit(rng) * 0.4,
        centered(rng) * 0.3,
    )
}

fn human_head(_rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let theta = (2.0 * t - 1.0).clamp(-1.0, 1.0).acos();
    let phi = t * TAU * 3.0;
    let r = 0.13;
    Vec3::new(
        r * theta.sin() * phi.cos(),
        0.65 + r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}

fn human_neck(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let a = t * TAU;
    let ring = rng.gen_range(0..5) as f32;
    Vec3::new(a.cos() * 0.06, 0.52 + ring * 0.02, a.sin() * 0.06)
}

fn human_shoulders(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let (side, s) = sided(t);
    Vec3::new(side * (0.18 + s * 0.15), 0.45 - s * 0.05, centered(rng) * 0.12)
}

fn human_torso(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let width = 0.16 * (1.0 - (t - 0.5).abs() * 0.3);
    let a = angle(rng);
    Vec3::new(
        a.cos() * width * (0.8 + unit(rng) * 0.4),
        0.45 - t * 0.65,
        a.sin() * width * 0.6,
    )
}

fn human_arms(_rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let (side, s) = sided(t);
    let shoulder = Vec3::new(0.28, 0.4, 0.0);
    let elbow = Vec3::new(0.38, 0.05, 0.1);
    let hand = Vec3::new(0.43, -0.25, 0.25);
    mirror_x(limb(shoulder, elbow, hand, s), side)
}

fn human_legs(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let (side, s) = sided(t);
    let hip = Vec3::new(0.11, -0.2, 0.0);
    let knee = Vec3::new(0.09, -0.55, 0.0);
    let ankle = Vec3::new(0.09, -0.9, 0.0);
    let mut p = limb(hip, knee, ankle, s);
    p.z += centered(rng) * if s < 0.5 { 0.1 } else { 0.08 };
    // foot turns forward over the last fifth of the shin
    let shin = (s - 0.5) * 2.0;
    if shin > 0.8 {
        p.x += (shin - 0.8) * 0.5;
        p.z += 0.1;
    }
    mirror_x(p, side)
}

fn house_foundation(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    loop {
        let x = centered(rng) * 0.8;
        let z = centered(rng) * 0.8;
        if x.abs() > 0.35 || z.abs() > 0.35 {
            return Vec3::new(x, -0.4, z);
        }
    }
}

fn house_walls(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let a = t * TAU;
    let h = unit(rng) * 0.5;
    Vec3::new(0.4 * a.cos(), -0.4 + h, 0.4 * a.sin())
}

fn house_roof(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let a = angle(rng);
    let rise = unit(rng);
    let r = 0.4 * (1.0 - rise);
    Vec3::new(r * a.cos(), 0.1 + 0.3 * (1.0 - rise), r * a.sin())
}

const LAPTOP_HINGE_DEG: f32 = 110.0;

fn laptop_deck(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    Vec3::new(centered(rng), -0.3, centered(rng) * 0.7)
}

fn laptop_keys(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let row = rng.gen_range(-3..=3) as f32;
    let col = rng.gen_range(-6..=6) as f32;
    Vec3::new(col * 0.08, -0.28, row * 0.08)
}

fn laptop_screen(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let hinge = LAPTOP_HINGE_DEG.to_radians();
    let up = unit(rng) * 0.8;
    Vec3::new(
        centered(rng),
        -0.3 + up * hinge.sin(),
        -0.35 + up * hinge.cos(),
    )
}

fn dna(rng: &mut dyn RngCore, t: f32) -> Vec3 {
    let turn = t * PI * 8.0;
    let r = 0.4;
    let y = t * 3.0 - 1.5;
    let strand = Vec3::new(turn.cos() * r, y, turn.sin() * r);
    if unit(rng) < 0.1 {
        // rung between the two strands
        let opposite = Vec3::new(-strand.x, y, -strand.z);
        return strand.lerp(opposite, unit(rng));
    }
    if unit(rng) < 0.5 {
        strand
    } else {
        Vec3::new(-strand.x, y, -strand.z)
    }
}

fn heart(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let a = angle(rng);
    let x = 16.0 * a.sin().powi(3);
    let y = 13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos() - (4.0 * a).cos();
    Vec3::new(x / 20.0, y / 20.0, centered(rng) * 0.2)
}

fn galaxy(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let dist = unit(rng) * 2.0;
    let a = dist * 5.0 + unit(rng) * 0.5;
    Vec3::new(a.cos() * dist, centered(rng) * 0.1, a.sin() * dist)
}

fn free_flow(rng: &mut dyn RngCore, _t: f32) -> Vec3 {
    let span = 2.0 * FREE_FLOW_HALF_EXTENT;
    Vec3::new(
        centered(rng) * span,
        centered(rng) * span,
        centered(rng) * span,
    )
}

// ---------------- glyphs ----------------

const GLYPH_HALF_EXTENT: f32 = 0.8;

fn glyph_point(glyph: &[Stroke], rng: &mut dyn RngCore) -> Vec3 {
    let mut along = unit(rng) * glyphs::total_length(glyph);
    let (a, b) = glyph
        .iter()
        .find(|(a, b)| {
            let len = glyphs::stroke_length(a, b);
            if along <= len {
                true
            } else {
                along -= len;
                false
            }
        })
        .or_else(|| glyph.last())
        .copied()
        .unwrap_or(([0.0, 0.0], [0.0, 0.0]));
    let len = glyphs::stroke_length(&a, &b);
    let s = if len > 0.0 {
        (along / len).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let (nx, ny) = if len > 0.0 {
        (-dy / len, dx / len)
    } else {
        (0.0, 0.0)
    };
    let offset = centered(rng) * 2.0 * GLYPH_STROKE_JITTER;
    let gx = a[0] + dx * s;
    let gy = a[1] + dy * s;
    let scale = 2.0 * GLYPH_HALF_EXTENT;
    Vec3::new(
        (-GLYPH_HALF_EXTENT + gx * scale + nx * offset)
            .clamp(-GLYPH_HALF_EXTENT - GLYPH_STROKE_JITTER, GLYPH_HALF_EXTENT + GLYPH_STROKE_JITTER),
        (-GLYPH_HALF_EXTENT + gy * scale + ny * offset)
            .clamp(-GLYPH_HALF_EXTENT - GLYPH_STROKE_JITTER, GLYPH_HALF_EXTENT + GLYPH_STROKE_JITTER),
        centered(rng) * 2.0 * GLYPH_DEPTH_JITTER,
    )
}
