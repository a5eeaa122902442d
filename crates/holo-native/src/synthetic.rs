//! Scripted input sources standing in for a camera tracker or a mouse.

use glam::{Vec2, Vec3};
use holo_core::hands::*;
use std::f32::consts::TAU;

/// Finger layout for a synthetic hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Open,
    Fist,
    Pinch,
    Point,
    Peace,
}

/// Build a plausible 21-point hand centred on `palm` (image space).
pub fn hand(pose: Pose, palm: Vec2, depth: f32) -> HandPose {
    let mut lm = [Vec3::new(palm.x, palm.y, depth); LANDMARK_COUNT];
    let at = |dx: f32, dy: f32| Vec3::new(palm.x + dx, palm.y + dy, depth);

    lm[WRIST] = at(0.0, 0.15);
    lm[1] = at(-0.04, 0.11);
    lm[THUMB_MCP] = at(-0.06, 0.08);
    lm[3] = at(-0.09, 0.06);
    let thumb_out = matches!(pose, Pose::Open);
    lm[THUMB_TIP] = if thumb_out {
        at(-0.18, 0.03)
    } else {
        // tucked across the palm, clear of the index tip
        at(0.02, 0.06)
    };

    let extended = match pose {
        Pose::Open => [true; 4],
        Pose::Fist | Pose::Pinch => [false; 4],
        Pose::Point => [true, false, false, false],
        Pose::Peace => [true, true, false, false],
    };
    let joints = [
        (INDEX_MCP, INDEX_PIP, 7, INDEX_TIP),
        (MIDDLE_MCP, MIDDLE_PIP, 11, MIDDLE_TIP),
        (RING_MCP, RING_PIP, 15, RING_TIP),
        (PINKY_MCP, PINKY_PIP, 19, PINKY_TIP),
    ];
    for (i, (mcp, pip, dip, tip)) in joints.into_iter().enumerate() {
        let dx = -0.03 + i as f32 * 0.02;
        lm[mcp] = at(dx, 0.0);
        lm[pip] = at(dx, -0.04);
        if extended[i] {
            lm[dip] = at(dx, -0.07);
            lm[tip] = at(dx, -0.10);
        } else {
            lm[dip] = at(dx, -0.01);
            lm[tip] = at(dx, 0.02);
        }
    }
    if pose == Pose::Pinch {
        lm[THUMB_TIP] = lm[INDEX_TIP] + Vec3::new(0.01, 0.0, 0.0);
    }
    HandPose::new(lm)
}

/// A repeating script cycling through single-hand gestures and a two-hand
/// tracing pass.
pub struct HandScript {
    period_ms: u64,
}

impl HandScript {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
        }
    }

    pub fn frame(&self, now_ms: u64) -> HandFrame {
        let phase = (now_ms / self.period_ms) % 6;
        let local = (now_ms % self.period_ms) as f32 / self.period_ms as f32;
        let sweep = Vec2::new(0.3 + 0.4 * local, 0.5 + 0.1 * (local * TAU).sin());
        let mut frame = HandFrame::new();
        match phase {
            0 => frame.push(hand(Pose::Open, sweep, 0.0)),
            1 => frame.push(hand(Pose::Fist, Vec2::new(0.5, 0.5), -0.05)),
            2 => frame.push(hand(Pose::Pinch, sweep, 0.0)),
            3 => frame.push(hand(Pose::Peace, sweep, 0.02)),
            4 => {
                // trace an arc for the first half, then hold still
                let s = local.min(0.5) * 2.0;
                let a = s * TAU * 0.5;
                let left = Vec2::new(0.5 - 0.2 * a.cos(), 0.5 - 0.2 * a.sin());
                let right = Vec2::new(0.5 + 0.2 * a.cos(), 0.5 + 0.2 * a.sin());
                frame.push(hand(Pose::Point, left, 0.0).with_handedness(Handedness::Left));
                frame.push(hand(Pose::Point, right, 0.0).with_handedness(Handedness::Right));
            }
            _ => {}
        }
        frame
    }
}

/// Pointer sweep for the cursor input path: position in pixels and button.
pub fn cursor_sample(now_ms: u64, viewport: Vec2) -> (Vec2, bool) {
    let t = now_ms as f32 / 1000.0;
    let px = Vec2::new(
        viewport.x * (0.5 + 0.35 * (t * 0.7).cos()),
        viewport.y * (0.5 + 0.35 * (t * 1.1).sin()),
    );
    let held = (now_ms / 1500) % 2 == 1;
    (px, held)
}
