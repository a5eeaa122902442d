//! Interaction descriptors and the snapshot bus shared between the input
//! side (tracker callbacks, pointer events) and the frame loop.

use crate::tracer::ShapeConstruction;
use glam::Vec3;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    #[default]
    None,
    Attract,
    Repel,
    Pinch,
    Compress,
}

impl InteractionKind {
    /// Direction of the point force: pulling kinds are positive.
    #[inline]
    pub fn force_sign(self) -> f32 {
        match self {
            InteractionKind::Attract | InteractionKind::Pinch => 1.0,
            InteractionKind::Repel => -1.0,
            InteractionKind::Compress | InteractionKind::None => 0.0,
        }
    }
}

/// Manual rotation increment in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationDelta {
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Compression {
    /// 0 is loose, 1 is fully contracted.
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionVector {
    /// Normalized interaction point: x and y in [-1, 1], z scaled depth.
    pub position: Vec3,
    pub active: bool,
    pub kind: InteractionKind,
    pub strength: f32,
    pub rotation: Option<RotationDelta>,
    pub compression: Option<Compression>,
}

impl InteractionVector {
    pub const INACTIVE: InteractionVector = InteractionVector {
        position: Vec3::ZERO,
        active: false,
        kind: InteractionKind::None,
        strength: 0.0,
        rotation: None,
        compression: None,
    };

    pub fn new(position: Vec3, kind: InteractionKind, strength: f32) -> Self {
        Self {
            position,
            active: true,
            kind,
            strength,
            rotation: None,
            compression: None,
        }
    }

    pub fn inactive() -> Self {
        Self::INACTIVE
    }

    /// Whether this vector exerts a point force on particles.
    #[inline]
    pub fn pushes(&self) -> bool {
        self.active && self.kind.force_sign() != 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlMode {
    #[default]
    Cursor,
    Gesture,
}

#[derive(Clone, Debug, Default)]
pub struct BusState {
    pub source: ControlMode,
    pub vector: InteractionVector,
    pub construction: Option<ShapeConstruction>,
    /// Bumped on every accepted publish.
    pub sequence: u64,
}

/// Latest interaction snapshot, readable as a whole from any thread.
///
/// Writers publish complete values under the lock, so a reader never sees a
/// half-updated vector.
#[derive(Clone, Debug, Default)]
pub struct InteractionBus {
    inner: Arc<Mutex<BusState>>,
}

impl InteractionBus {
    pub fn new(source: ControlMode) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusState {
                source,
                ..BusState::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BusState> {
        // values are replaced whole, a poisoned lock still holds a valid state
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn source(&self) -> ControlMode {
        self.lock().source
    }

    /// Switch the active input source. The stored vector and construction are
    /// cleared so nothing from the old source survives the switch.
    pub fn set_source(&self, source: ControlMode) {
        let mut state = self.lock();
        if state.source != source {
            log::debug!("[bus] input source {:?} -> {:?}", state.source, source);
            state.source = source;
            state.vector = InteractionVector::INACTIVE;
            state.construction = None;
            state.sequence += 1;
        }
    }

    /// Publish a vector from `from`. Returns false when `from` is not the
    /// active source and the value was dropped.
    pub fn publish(&self, from: ControlMode, vector: InteractionVector) -> bool {
        let mut state = self.lock();
        if state.source != from {
            log::trace!("[bus] dropped vector from inactive source {from:?}");
            return false;
        }
        state.vector = vector;
        state.sequence += 1;
        true
    }

    /// Publish one tracker sample: the vector and the construction land
    /// together under a single sequence number.
    pub fn publish_tracking(
        &self,
        from: ControlMode,
        vector: InteractionVector,
        construction: Option<ShapeConstruction>,
    ) -> bool {
        let mut state = self.lock();
        if state.source != from {
            log::trace!("[bus] dropped tracking sample from inactive source {from:?}");
            return false;
        }
        state.vector = vector;
        state.construction = construction;
        state.sequence += 1;
        true
    }

    pub fn vector(&self) -> InteractionVector {
        self.lock().vector
    }

    pub fn snapshot(&self) -> BusState {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_signs() {
        assert_eq!(InteractionKind::Attract.force_sign(), 1.0);
        assert_eq!(InteractionKind::Pinch.force_sign(), 1.0);
        assert_eq!(InteractionKind::Repel.force_sign(), -1.0);
        assert_eq!(InteractionKind::Compress.force_sign(), 0.0);
        assert!(!InteractionVector::INACTIVE.pushes());
    }

    #[test]
    fn inactive_source_cannot_publish() {
        let bus = InteractionBus::new(ControlMode::Gesture);
        let v = InteractionVector::new(Vec3::X, InteractionKind::Repel, 1.0);
        assert!(!bus.publish(ControlMode::Cursor, v));
        assert_eq!(bus.vector(), InteractionVector::INACTIVE);
        assert!(bus.publish(ControlMode::Gesture, v));
        assert_eq!(bus.vector(), v);
    }

    #[test]
    fn switching_source_clears_the_vector() {
        let bus = InteractionBus::new(ControlMode::Cursor);
        let v = InteractionVector::new(Vec3::Y, InteractionKind::Attract, 1.0);
        bus.publish(ControlMode::Cursor, v);
        bus.set_source(ControlMode::Gesture);
        assert_eq!(bus.vector(), InteractionVector::INACTIVE);
        assert!(!bus.publish(ControlMode::Cursor, v));
        assert_eq!(bus.snapshot().source, ControlMode::Gesture);
    }

    #[test]
    fn tracking_sample_takes_one_sequence_number() {
        let bus = InteractionBus::new(ControlMode::Gesture);
        let mut v = InteractionVector::new(Vec3::ZERO, InteractionKind::Attract, 1.0);
        v.rotation = Some(RotationDelta {
            yaw: 1.0,
            pitch: 0.0,
        });
        assert!(bus.publish_tracking(ControlMode::Gesture, v, None));
        let snap = bus.snapshot();
        assert_eq!(snap.sequence, 1);
        assert_eq!(snap.vector, v);
        assert!(snap.construction.is_none());

        assert!(!bus.publish_tracking(ControlMode::Cursor, InteractionVector::INACTIVE, None));
        assert_eq!(bus.snapshot().sequence, 1);
    }

    #[test]
    fn clones_share_state_across_threads() {
        let bus = InteractionBus::new(ControlMode::Gesture);
        let writer = bus.clone();
        std::thread::spawn(move || {
            writer.publish(
                ControlMode::Gesture,
                InteractionVector::new(Vec3::Z, InteractionKind::Pinch, 2.5),
            );
        })
        .join()
        .unwrap();
        assert_eq!(bus.vector().kind, InteractionKind::Pinch);
    }
}
