//! Single-hand gesture classification.
//!
//! A pose is reduced to [`HandFeatures`] once, then walked down a fixed
//! priority ladder of `(gesture, predicate)` pairs. Predicates overlap (a
//! pinching fist is also a fist), so the first match wins and the order of
//! [`LADDER`] is part of the behaviour.

use crate::constants::{
    COMPRESSION_SMOOTHING, DEPTH_SCALE, L_SHAPE_MAX_DEG, L_SHAPE_MIN_DEG, L_SHAPE_MIN_LEG,
    OK_SIGN_MAX, OK_SIGN_MIN, OPEN_PALM_ROTATION_GAIN, PEACE_ROTATION_GAIN, PINCH_THRESHOLD,
    ROTATION_MOVE_THRESHOLD,
};
use crate::hands::{FingerStates, HandPose, INDEX_TIP, THUMB_MCP, THUMB_TIP};
use crate::interaction::{Compression, InteractionKind, InteractionVector, RotationDelta};
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Pinch,
    ThumbsUp,
    ThumbsDown,
    OkSign,
    RockSign,
    LShape,
    ClosedFist,
    OpenPalm,
    Peace,
    Point,
    Neutral,
}

impl Gesture {
    pub fn label(self) -> &'static str {
        match self {
            Gesture::Pinch => "PINCH",
            Gesture::ThumbsUp => "THUMBS_UP",
            Gesture::ThumbsDown => "THUMBS_DOWN",
            Gesture::OkSign => "OK_SIGN",
            Gesture::RockSign => "ROCK_SIGN",
            Gesture::LShape => "L_SHAPE_COMPRESS",
            Gesture::ClosedFist => "CLOSED_FIST",
            Gesture::OpenPalm => "OPEN_PALM_ROTATE",
            Gesture::Peace => "PEACE_ROTATE",
            Gesture::Point => "POINT",
            Gesture::Neutral => "NEUTRAL",
        }
    }

    /// Calibrated `(kind, strength)` emitted for this gesture.
    pub fn outcome(self) -> (InteractionKind, f32) {
        match self {
            Gesture::Pinch => (InteractionKind::Pinch, 2.5),
            Gesture::ThumbsUp => (InteractionKind::Attract, 0.5),
            Gesture::ThumbsDown => (InteractionKind::Repel, 0.5),
            Gesture::OkSign => (InteractionKind::Attract, 1.0),
            Gesture::RockSign => (InteractionKind::Attract, 1.5),
            Gesture::LShape => (InteractionKind::Compress, 0.0),
            Gesture::ClosedFist => (InteractionKind::Repel, 1.8),
            Gesture::OpenPalm => (InteractionKind::Attract, 0.3),
            Gesture::Peace => (InteractionKind::Attract, 0.8),
            Gesture::Point => (InteractionKind::Attract, 2.5),
            Gesture::Neutral => (InteractionKind::Attract, 0.5),
        }
    }

    /// Track-point delta multiplier for gestures that steer rotation.
    pub fn rotation_gain(self) -> Option<f32> {
        match self {
            Gesture::OpenPalm => Some(OPEN_PALM_ROTATION_GAIN),
            Gesture::Peace => Some(PEACE_ROTATION_GAIN),
            _ => None,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-sample geometry every ladder predicate reads from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandFeatures {
    pub fingers: FingerStates,
    pub extended: usize,
    pub pinch_distance: f32,
    /// Thumb tip sits above its MCP (smaller image y).
    pub thumb_raised: bool,
    /// Angle in degrees between thumb-MCP→thumb-tip and thumb-MCP→index-tip,
    /// `None` when either leg is too short to measure.
    pub thumb_index_angle: Option<f32>,
}

impl HandFeatures {
    pub fn from_pose(pose: &HandPose) -> Self {
        let fingers = pose.finger_states();
        Self {
            fingers,
            extended: fingers.extended(),
            pinch_distance: pose.pinch_distance(),
            thumb_raised: pose.landmark(THUMB_TIP).y < pose.landmark(THUMB_MCP).y,
            thumb_index_angle: thumb_index_angle(pose),
        }
    }
}

/// Image-plane angle at the thumb MCP between the thumb tip and index tip.
pub fn thumb_index_angle(pose: &HandPose) -> Option<f32> {
    let base = pose.landmark(THUMB_MCP).truncate();
    let thumb = pose.landmark(THUMB_TIP).truncate() - base;
    let index = pose.landmark(INDEX_TIP).truncate() - base;
    let (a, b) = (thumb.length(), index.length());
    if a <= L_SHAPE_MIN_LEG || b <= L_SHAPE_MIN_LEG {
        return None;
    }
    let cos = (thumb.dot(index) / (a * b)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

type Predicate = fn(&HandFeatures) -> bool;

fn is_pinch(f: &HandFeatures) -> bool {
    f.pinch_distance < PINCH_THRESHOLD
}

fn is_thumbs_up(f: &HandFeatures) -> bool {
    f.fingers.thumb && f.extended == 0 && f.thumb_raised
}

fn is_thumbs_down(f: &HandFeatures) -> bool {
    f.fingers.thumb && f.extended == 0 && !f.thumb_raised
}

fn is_ok_sign(f: &HandFeatures) -> bool {
    f.pinch_distance > OK_SIGN_MIN && f.pinch_distance < OK_SIGN_MAX && f.extended >= 2
}

fn is_rock_sign(f: &HandFeatures) -> bool {
    let s = &f.fingers;
    s.index && s.pinky && !s.middle && !s.ring
}

fn is_l_shape(f: &HandFeatures) -> bool {
    let s = &f.fingers;
    s.thumb
        && s.index
        && !s.middle
        && !s.ring
        && !s.pinky
        && f.extended == 1
        && f
            .thumb_index_angle
            .is_some_and(|deg| (L_SHAPE_MIN_DEG..=L_SHAPE_MAX_DEG).contains(&deg))
}

fn is_closed_fist(f: &HandFeatures) -> bool {
    f.extended == 0 && !f.fingers.thumb
}

fn is_open_palm(f: &HandFeatures) -> bool {
    f.extended >= 4 && f.fingers.thumb
}

fn is_peace(f: &HandFeatures) -> bool {
    f.extended == 2 && !f.fingers.thumb
}

fn is_point(f: &HandFeatures) -> bool {
    f.extended == 1 && !f.fingers.thumb
}

/// Priority ladder, highest first. Anything unmatched is [`Gesture::Neutral`].
pub const LADDER: [(Gesture, Predicate); 10] = [
    (Gesture::Pinch, is_pinch),
    (Gesture::ThumbsUp, is_thumbs_up),
    (Gesture::ThumbsDown, is_thumbs_down),
    (Gesture::OkSign, is_ok_sign),
    (Gesture::RockSign, is_rock_sign),
    (Gesture::LShape, is_l_shape),
    (Gesture::ClosedFist, is_closed_fist),
    (Gesture::OpenPalm, is_open_palm),
    (Gesture::Peace, is_peace),
    (Gesture::Point, is_point),
];

pub fn classify_features(features: &HandFeatures) -> Gesture {
    LADDER
        .iter()
        .find(|(_, matches)| matches(features))
        .map(|(gesture, _)| *gesture)
        .unwrap_or(Gesture::Neutral)
}

/// Image space `[0, 1]` (y down) to the interaction frame (`[-1, 1]`, y up).
#[inline]
pub fn interaction_point(track: Vec3) -> Vec3 {
    Vec3::new(
        track.x * 2.0 - 1.0,
        -(track.y * 2.0 - 1.0),
        -track.z * DEPTH_SCALE,
    )
}

/// Compression target from track-point depth, in [0, 1].
#[inline]
pub fn depth_compression(track: Vec3) -> f32 {
    (track.z * DEPTH_SCALE).clamp(-0.5, 0.5) + 0.5
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub vector: InteractionVector,
    pub gesture: Gesture,
    /// Track point to feed back as `previous_track` on the next sample.
    pub track: Vec3,
}

/// Classify one pose against the previous track-point position.
///
/// For the L-shape the compression intensity is the raw depth mapping; the
/// stateful [`GestureClassifier`] smooths it over time.
pub fn classify_pose(pose: &HandPose, previous_track: Option<Vec3>) -> Classification {
    let features = HandFeatures::from_pose(pose);
    let gesture = classify_features(&features);
    let track = pose.track_point();
    let (kind, strength) = gesture.outcome();
    let mut vector = InteractionVector::new(interaction_point(track), kind, strength);

    if let Some(gain) = gesture.rotation_gain() {
        let delta = previous_track
            .map(|prev| (track - prev).truncate())
            .unwrap_or_default();
        if delta.x.abs() > ROTATION_MOVE_THRESHOLD || delta.y.abs() > ROTATION_MOVE_THRESHOLD {
            vector.rotation = Some(RotationDelta {
                pitch: delta.y * gain,
                yaw: delta.x * gain,
            });
        }
    }
    if gesture == Gesture::LShape {
        vector.compression = Some(Compression {
            intensity: depth_compression(track),
        });
    }
    Classification {
        vector,
        gesture,
        track,
    }
}

/// Stateful wrapper owning the previous track point and the depth smoother.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    previous_track: Option<Vec3>,
    smoothed_depth: f32,
    last_gesture: Option<Gesture>,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a sample. `None` means no hand: the result is inactive and no
    /// new label is reported.
    pub fn classify(&mut self, pose: Option<&HandPose>) -> (InteractionVector, Option<Gesture>) {
        let Some(pose) = pose else {
            self.reset();
            return (InteractionVector::INACTIVE, None);
        };
        let mut out = classify_pose(pose, self.previous_track);
        self.previous_track = Some(out.track);

        match out.vector.compression.as_mut() {
            Some(c) => {
                self.smoothed_depth = self.smoothed_depth * (1.0 - COMPRESSION_SMOOTHING)
                    + c.intensity * COMPRESSION_SMOOTHING;
                c.intensity = self.smoothed_depth.clamp(0.0, 1.0);
            }
            None => self.smoothed_depth = 0.0,
        }

        if self.last_gesture != Some(out.gesture) {
            log::debug!(
                "[gesture] {} -> {}",
                self.last_gesture.map_or("none", Gesture::label),
                out.gesture
            );
            self.last_gesture = Some(out.gesture);
        }
        (out.vector, Some(out.gesture))
    }

    /// Forget the track point and the smoother; the last label is kept.
    pub fn reset(&mut self) {
        self.previous_track = None;
        self.smoothed_depth = 0.0;
    }

    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }

    pub fn previous_track(&self) -> Option<Vec3> {
        self.previous_track
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(fingers: FingerStates, pinch: f32) -> HandFeatures {
        HandFeatures {
            fingers,
            extended: fingers.extended(),
            pinch_distance: pinch,
            thumb_raised: true,
            thumb_index_angle: None,
        }
    }

    #[test]
    fn ladder_falls_through_to_neutral() {
        let f = features(
            FingerStates {
                thumb: true,
                index: true,
                middle: true,
                ..Default::default()
            },
            0.5,
        );
        assert_eq!(classify_features(&f), Gesture::Neutral);
    }

    #[test]
    fn pinch_outranks_fist() {
        let f = features(FingerStates::default(), 0.01);
        assert!(is_closed_fist(&f));
        assert_eq!(classify_features(&f), Gesture::Pinch);
    }

    #[test]
    fn l_shape_needs_a_measured_angle() {
        let mut f = features(
            FingerStates {
                thumb: true,
                index: true,
                ..Default::default()
            },
            0.5,
        );
        assert!(!is_l_shape(&f));
        f.thumb_index_angle = Some(90.0);
        assert_eq!(classify_features(&f), Gesture::LShape);
        f.thumb_index_angle = Some(120.0);
        assert!(!is_l_shape(&f));
    }

    #[test]
    fn depth_mapping_is_clamped() {
        assert_eq!(depth_compression(Vec3::new(0.0, 0.0, 1.0)), 1.0);
        assert_eq!(depth_compression(Vec3::new(0.0, 0.0, -1.0)), 0.0);
        assert!((depth_compression(Vec3::ZERO) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn interaction_point_flips_y() {
        let p = interaction_point(Vec3::new(1.0, 0.0, 0.1));
        assert!((p - Vec3::new(1.0, 1.0, -0.3)).length() < 1e-6);
    }
}
