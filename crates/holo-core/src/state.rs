//! Display-side state shared with whatever renders the particle field.
//!
//! Nothing here touches platform APIs. A renderer reads the combined
//! rotation and applies it to the position buffer the simulator exposes.

use crate::constants::AUTO_ROTATION_SPEED;
use crate::interaction::RotationDelta;
use glam::{Mat3, Mat4, Vec3};
use std::time::Duration;

/// Global rigid rotation: a continuous auto-rotation around Y plus a manual
/// pitch/yaw offset from gestures, drag and keys.
#[derive(Clone, Debug)]
pub struct Orientation {
    pub auto_yaw: f32,
    pub manual_pitch: f32,
    pub manual_yaw: f32,
    /// Radians per second; 0 disables auto-rotation.
    pub auto_speed: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            auto_yaw: 0.0,
            manual_pitch: 0.0,
            manual_yaw: 0.0,
            auto_speed: AUTO_ROTATION_SPEED,
        }
    }
}

impl Orientation {
    pub fn with_speed(auto_speed: f32) -> Self {
        Self {
            auto_speed,
            ..Self::default()
        }
    }

    /// Advance the auto-rotation accumulator. It only runs in formation mode.
    pub fn advance(&mut self, dt: Duration, formation: bool) {
        if formation {
            self.auto_yaw = (self.auto_yaw + dt.as_secs_f32() * self.auto_speed)
                .rem_euclid(std::f32::consts::TAU);
        }
    }

    pub fn apply(&mut self, delta: RotationDelta) {
        self.manual_pitch += delta.pitch;
        self.manual_yaw += delta.yaw;
    }

    pub fn reset_manual(&mut self) {
        self.manual_pitch = 0.0;
        self.manual_yaw = 0.0;
    }

    pub fn pitch(&self) -> f32 {
        self.manual_pitch
    }

    pub fn yaw(&self) -> f32 {
        self.auto_yaw + self.manual_yaw
    }

    /// Combined rotation, pitch (X) applied first, then yaw (Y).
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_rotation_y(self.yaw()) * Mat3::from_rotation_x(self.pitch())
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_mat3(self.matrix())
    }

    #[inline]
    pub fn rotate(&self, p: Vec3) -> Vec3 {
        self.matrix() * p
    }
}
