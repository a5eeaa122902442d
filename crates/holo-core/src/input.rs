use crate::constants::{CURSOR_STRENGTH, DRAG_ROTATION_PER_PIXEL, KEY_ROTATION_STEP};
use crate::interaction::{InteractionKind, InteractionVector, RotationDelta};
use glam::{Vec2, Vec3};

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub uv: [f32; 2],
    pub down: bool,
    pub inside: bool,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last_px: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_uv(px: Vec2, viewport: Vec2) -> [f32; 2] {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        let u = (px.x / viewport.x).clamp(0.0, 1.0);
        let v = (px.y / viewport.y).clamp(0.0, 1.0);
        [u, v]
    } else {
        [0.5, 0.5]
    }
}

/// Image-space uv (y down) to an interaction vector: held repels, hovering attracts.
#[inline]
pub fn cursor_vector(uv: [f32; 2], held: bool) -> InteractionVector {
    let position = Vec3::new(uv[0] * 2.0 - 1.0, -(uv[1] * 2.0 - 1.0), 0.0);
    let kind = if held {
        InteractionKind::Repel
    } else {
        InteractionKind::Attract
    };
    InteractionVector::new(position, kind, CURSOR_STRENGTH)
}

// ---------------- Rotation helpers ----------------
#[inline]
pub fn drag_rotation(delta_px: Vec2) -> RotationDelta {
    RotationDelta {
        yaw: delta_px.x * DRAG_ROTATION_PER_PIXEL,
        pitch: delta_px.y * DRAG_ROTATION_PER_PIXEL,
    }
}

#[inline]
pub fn key_rotation(key: ArrowKey) -> RotationDelta {
    match key {
        ArrowKey::Up => RotationDelta {
            yaw: 0.0,
            pitch: -KEY_ROTATION_STEP,
        },
        ArrowKey::Down => RotationDelta {
            yaw: 0.0,
            pitch: KEY_ROTATION_STEP,
        },
        ArrowKey::Left => RotationDelta {
            yaw: -KEY_ROTATION_STEP,
            pitch: 0.0,
        },
        ArrowKey::Right => RotationDelta {
            yaw: KEY_ROTATION_STEP,
            pitch: 0.0,
        },
    }
}

/// Turns raw pointer events into interaction vectors and drag rotations.
#[derive(Default, Clone, Copy, Debug)]
pub struct CursorAdapter {
    pub pointer: PointerState,
    pub drag: DragState,
}

impl CursorAdapter {
    pub fn pointer_move(&mut self, px: Vec2, viewport: Vec2) -> InteractionVector {
        self.pointer.uv = pointer_uv(px, viewport);
        self.pointer.inside = true;
        cursor_vector(self.pointer.uv, self.pointer.down)
    }

    /// Primary button. Release ends the interaction.
    pub fn button(&mut self, down: bool) -> InteractionVector {
        self.pointer.down = down;
        if down && self.pointer.inside {
            cursor_vector(self.pointer.uv, true)
        } else {
            InteractionVector::INACTIVE
        }
    }

    pub fn leave(&mut self) -> InteractionVector {
        self.pointer.inside = false;
        self.pointer.down = false;
        self.drag.active = false;
        InteractionVector::INACTIVE
    }

    pub fn drag_begin(&mut self, px: Vec2) {
        self.drag = DragState {
            active: true,
            last_px: px,
        };
    }

    pub fn drag_move(&mut self, px: Vec2) -> Option<RotationDelta> {
        if !self.drag.active {
            return None;
        }
        let delta = px - self.drag.last_px;
        self.drag.last_px = px;
        Some(drag_rotation(delta))
    }

    pub fn drag_end(&mut self) {
        self.drag.active = false;
    }
}
