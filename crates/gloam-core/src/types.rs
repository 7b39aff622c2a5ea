//! Fundamental geometric and simulation types.
//!
//! Simulation space is y-up: x/z span the ground plane, y is altitude.
//! All distances are meters, all angles radians, all durations seconds.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Length below which a direction vector is treated as zero (no movement,
/// no normalization) to avoid NaN/Infinity from near-degenerate inputs.
pub const DIR_EPSILON: f32 = 1e-4;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Project a point onto the ground plane.
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Horizontal distance between two points (ignoring altitude).
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar(a).distance(planar(b))
}

/// Yaw angle of a planar direction (0 = +z, clockwise toward +x).
pub fn dir_to_yaw(dir: Vec3) -> f32 {
    dir.x.atan2(dir.z)
}

/// Unit direction on the ground plane for a yaw angle.
pub fn yaw_to_dir(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Wrap an angle difference into `[-PI, PI]`.
pub fn wrap_angle(a: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    let wrapped = a.rem_euclid(tau);
    if wrapped > std::f32::consts::PI {
        wrapped - tau
    } else {
        wrapped
    }
}

/// Hermite smoothstep of `x` between `edge0` and `edge1`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
