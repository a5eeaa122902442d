//! Hand landmark layout and the finger-extension primitives shared by the
//! gesture classifier and the shape tracer.
//!
//! Landmarks follow the usual 21-point hand model: x and y are normalized
//! image coordinates in \[0, 1\] (y grows downward), z is depth relative to
//! the wrist.

use crate::constants::THUMB_EXTENSION_THRESHOLD;
use crate::error::{HoloError, Result};
use glam::Vec3;
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// Stabilized reference landmark for interaction and rotation sensing.
pub const TRACK_POINT: usize = MIDDLE_MCP;

// (tip, pip, mcp) for index, middle, ring, pinky
const FINGER_JOINTS: [(usize, usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
    (RING_TIP, RING_PIP, RING_MCP),
    (PINKY_TIP, PINKY_PIP, PINKY_MCP),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Handedness::Left),
            "right" => Some(Handedness::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandPose {
    landmarks: [Vec3; LANDMARK_COUNT],
    pub handedness: Option<Handedness>,
}

/// One tracker sample: zero, one or two hands.
pub type HandFrame = SmallVec<[HandPose; 2]>;

impl HandPose {
    pub fn new(landmarks: [Vec3; LANDMARK_COUNT]) -> Self {
        Self {
            landmarks,
            handedness: None,
        }
    }

    pub fn from_slice(points: &[Vec3]) -> Result<Self> {
        let landmarks: [Vec3; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| HoloError::InvalidParams("hand pose needs exactly 21 landmarks"))?;
        Ok(Self::new(landmarks))
    }

    pub fn with_handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = Some(handedness);
        self
    }

    /// Landmark by index, `None` past the last joint.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.landmarks.get(index).copied()
    }

    /// Indexed with the named joint constants only.
    #[inline]
    pub(crate) fn landmark(&self, index: usize) -> Vec3 {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.landmarks
    }

    #[inline]
    pub fn track_point(&self) -> Vec3 {
        self.landmarks[TRACK_POINT]
    }

    #[inline]
    pub fn index_tip(&self) -> Vec3 {
        self.landmarks[INDEX_TIP]
    }

    /// Thumb tip to index tip, measured in the image plane.
    pub fn pinch_distance(&self) -> f32 {
        let a = self.landmarks[THUMB_TIP];
        let b = self.landmarks[INDEX_TIP];
        a.truncate().distance(b.truncate())
    }

    pub fn finger_states(&self) -> FingerStates {
        let lm = &self.landmarks;
        let ext = |(tip, pip, mcp): (usize, usize, usize)| {
            // smaller y is higher in image space
            lm[tip].y < lm[pip].y && lm[tip].y < lm[mcp].y
        };
        FingerStates {
            // thumb articulates sideways, so compare horizontally
            thumb: (lm[THUMB_TIP].x - lm[THUMB_MCP].x).abs() > THUMB_EXTENSION_THRESHOLD,
            index: ext(FINGER_JOINTS[0]),
            middle: ext(FINGER_JOINTS[1]),
            ring: ext(FINGER_JOINTS[2]),
            pinky: ext(FINGER_JOINTS[3]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Number of extended non-thumb fingers.
    pub fn extended(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|e| **e)
            .count()
    }

    /// The pointing pose used by two-hand tracing.
    pub fn only_index(&self) -> bool {
        self.index && !self.middle && !self.ring && !self.pinky && !self.thumb
    }
}
