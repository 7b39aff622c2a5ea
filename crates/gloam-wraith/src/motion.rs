//! Wraith steering: planar pursuit with yaw-rate limiting, burst speed,
//! arrival snapping, and the swoop altitude blend.

use glam::{Vec2, Vec3};

use gloam_core::components::{MotionTuning, SwoopProfile};
use gloam_core::types::{planar, wrap_angle, yaw_to_dir, DIR_EPSILON};

/// Input to one steering step.
pub struct SteerInput {
    pub position: Vec3,
    pub yaw: f32,
    /// Resolved pursuit point for this tick.
    pub target: Vec3,
    /// Current base speed (m/s).
    pub speed: f32,
    pub burst_multiplier: f32,
    /// Ground elevation under the wraith.
    pub ground_y: f32,
    pub dt: f32,
}

/// Output of one steering step.
pub struct SteerOutput {
    pub position: Vec3,
    pub yaw: f32,
    pub velocity: Vec3,
}

/// Advance one wraith by `dt`.
///
/// Non-finite targets are rejected outright (the wraith holds position)
/// rather than propagating NaN through the integrator.
pub fn steer(input: &SteerInput, tuning: &MotionTuning, swoop: &SwoopProfile) -> SteerOutput {
    let mut out = SteerOutput {
        position: input.position,
        yaw: input.yaw,
        velocity: Vec3::ZERO,
    };

    if !input.target.is_finite() {
        return out;
    }

    let to_target: Vec2 = planar(input.target) - planar(input.position);
    let dist = to_target.length();

    // Altitude blends regardless of horizontal motion.
    let new_y = blend_altitude(input.position.y, dist, input.ground_y, swoop, input.dt);
    out.velocity.y = (new_y - input.position.y) / input.dt.max(DIR_EPSILON);
    out.position.y = new_y;

    if dist < DIR_EPSILON {
        return out;
    }

    let desired_yaw = to_target.x.atan2(to_target.y);
    out.yaw = if dist > tuning.hard_lock_range {
        // Snap straight at the target: prevents orbiting at long range.
        desired_yaw
    } else {
        let err = wrap_angle(desired_yaw - input.yaw);
        let rate = if err.abs() > tuning.sharp_turn_error {
            tuning.turn_rate * tuning.sharp_turn_factor
        } else {
            tuning.turn_rate
        };
        let step = err.abs().min(rate * input.dt);
        wrap_angle(input.yaw + err.signum() * step)
    };

    let dir = to_target / dist;
    let stop: Vec2 = planar(input.target) - dir * tuning.keep_distance;
    let dist_to_stop = (stop - planar(input.position)).length();

    if dist_to_stop <= tuning.arrive_radius {
        // Arrived: snap to the standoff point instead of stepping past it.
        out.position.x = stop.x;
        out.position.z = stop.y;
        return out;
    }

    let speed = if dist > tuning.burst_range {
        input.speed * input.burst_multiplier
    } else {
        input.speed
    };

    let heading = yaw_to_dir(out.yaw) * speed;
    out.velocity.x = heading.x;
    out.velocity.z = heading.z;
    out.position.x += heading.x * input.dt;
    out.position.z += heading.z * input.dt;
    out
}

/// Rate-limited blend toward the swoop altitude for the current planar
/// distance: `high_alt` when far, `low_alt` when near, floored so the wraith
/// never touches the ground.
fn blend_altitude(y: f32, planar_dist: f32, ground_y: f32, swoop: &SwoopProfile, dt: f32) -> f32 {
    let band = (swoop.far_band - swoop.near_band).max(DIR_EPSILON);
    let t = ((planar_dist - swoop.near_band) / band).clamp(0.0, 1.0);
    let desired = ground_y + swoop.low_alt + (swoop.high_alt - swoop.low_alt) * t;
    if desired.is_nan() {
        return y;
    }
    let max_step = swoop.blend_rate * dt;
    let stepped = y + (desired - y).clamp(-max_step, max_step);
    stepped.max(ground_y + swoop.low_alt)
}
