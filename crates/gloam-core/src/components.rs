//! ECS components for hecs entities.
//!
//! Components are plain data structs; game logic lives in systems. The one
//! exception is `Exposure`, whose value is private so that every mutation
//! goes through a single entry point, since the saturation transition must fire
//! exactly once no matter which system is illuminating.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::WraithPhase;

/// Marks an entity as a wraith (member of the fixed adversary pool).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wraith;

/// World-space position component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Lifecycle state: phase, time in phase, and the veil dissolve scalar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WraithState {
    pub phase: WraithPhase,
    /// Seconds spent in the current phase.
    pub phase_elapsed: f32,
    /// Manifestation scalar driving the dissolve shader:
    /// 1.0 = fully hidden, 0.0 = fully manifest.
    pub veil: f32,
}

impl Default for WraithState {
    fn default() -> Self {
        Self {
            phase: WraithPhase::Dormant,
            phase_elapsed: 0.0,
            veil: 1.0,
        }
    }
}

impl WraithState {
    /// Enter a new phase, resetting the phase timer.
    pub fn enter(&mut self, phase: WraithPhase) {
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }
}

/// Accumulated illumination on a wraith, always in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Exposure {
    value: f32,
    /// Set when the beam applies exposure; consumed by the decay pass on the
    /// following tick so freshly lit wraiths do not also decay.
    lit: bool,
}

impl Exposure {
    /// Current exposure in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether the beam lit this wraith since the last decay pass.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Apply illumination. Returns true exactly once, on the call that
    /// saturates exposure to 1.0 (the Hunting → Dissolving trigger).
    pub fn apply(&mut self, amount: f32) -> bool {
        if self.value >= 1.0 {
            self.lit = true;
            return false;
        }
        self.value = (self.value + amount).min(1.0);
        self.lit = true;
        self.value >= 1.0
    }

    /// Linear falloff while unlit. Consumes the lit flag.
    pub fn decay(&mut self, amount: f32) {
        if !self.lit && self.value > 0.0 {
            self.value = (self.value - amount).max(0.0);
        }
        self.lit = false;
    }

    /// Reset on respawn.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.lit = false;
    }
}

/// Kinematic state of a wraith.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Motion {
    pub velocity: Vec3,
    /// Heading on the ground plane (radians, 0 = +z).
    pub yaw: f32,
    /// Current base speed (m/s). Boosted guards carry a raised value here
    /// and are restored from config when the boost ends.
    pub speed: f32,
    /// Current burst multiplier.
    pub burst_multiplier: f32,
}

/// Steering limits and thresholds, copied from config at spawn time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionTuning {
    /// Maximum yaw rate (rad/s).
    pub turn_rate: f32,
    /// Turn-rate multiplier past `sharp_turn_error`.
    pub sharp_turn_factor: f32,
    /// Heading error that engages the sharp-turn factor (radians).
    pub sharp_turn_error: f32,
    /// Beyond this planar distance, heading snaps straight at the target.
    pub hard_lock_range: f32,
    /// Beyond this planar distance, the burst multiplier applies.
    pub burst_range: f32,
    /// Standoff distance held from the target (meters, 0 = none).
    pub keep_distance: f32,
    /// Snap radius around the standoff point (meters).
    pub arrive_radius: f32,
}

/// Altitude-versus-distance interpolation for the approach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwoopProfile {
    /// Planar distance at which altitude holds `high_alt` (meters).
    pub far_band: f32,
    /// Planar distance at which altitude reaches `low_alt` (meters).
    pub near_band: f32,
    /// Altitude above ground when far (meters).
    pub high_alt: f32,
    /// Altitude above ground when near (meters). Also the ground clearance
    /// floor; a wraith never descends to ground level.
    pub low_alt: f32,
    /// Maximum vertical blend rate (m/s).
    pub blend_rate: f32,
}

/// How a wraith resolves its pursuit point each tick.
///
/// A tagged variant instead of a per-instance callback: a single dispatch
/// function reads the tag, so behavior changes are plain data edits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TargetStrategy {
    /// Pursue the live focus point.
    Chase,
    /// Circle a hotspot, breaking into boosted pursuit when triggered.
    Guard {
        center: Vec3,
        /// Orbit radius around the center (meters).
        radius: f32,
        /// Focus distance (to the hotspot or to this wraith) that triggers
        /// the boosted pursuit.
        trigger_dist: f32,
        /// Current angle on the orbit (radians).
        orbit_phase: f32,
        /// Remaining boosted-pursuit time; 0 = orbiting.
        alert_remaining: f32,
    },
}

impl Default for TargetStrategy {
    fn default() -> Self {
        Self::Chase
    }
}

/// Per-wraith culling bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CullTimers {
    /// Accumulated time spent behind the viewer and out of sight.
    pub behind_secs: f32,
    /// Remaining post-spawn protection window.
    pub protect_remaining: f32,
}
