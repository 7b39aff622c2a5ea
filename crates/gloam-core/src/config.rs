//! Runtime configuration.
//!
//! Every tunable, including the empirically chosen steering and swoop
//! constants, is an overridable field whose default comes from `constants`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::{MotionTuning, SwoopProfile};
use crate::constants::*;
use crate::enums::DespawnStyle;

/// Baseline kinematics given to every wraith at spawn time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionConfig {
    pub speed: f32,
    pub burst_multiplier: f32,
    pub tuning: MotionTuning,
    pub swoop: SwoopProfile,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: WRAITH_SPEED,
            burst_multiplier: BURST_MULTIPLIER,
            tuning: MotionTuning {
                turn_rate: TURN_RATE,
                sharp_turn_factor: SHARP_TURN_FACTOR,
                sharp_turn_error: SHARP_TURN_ERROR,
                hard_lock_range: HARD_LOCK_RANGE,
                burst_range: BURST_RANGE,
                keep_distance: 0.0,
                arrive_radius: ARRIVE_RADIUS,
            },
            swoop: SwoopProfile {
                far_band: SWOOP_FAR_BAND,
                near_band: SWOOP_NEAR_BAND,
                high_alt: SWOOP_HIGH_ALT,
                low_alt: SWOOP_LOW_ALT,
                blend_rate: SWOOP_BLEND_RATE,
            },
        }
    }
}

/// Wraith lifecycle timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifecycleConfig {
    pub emerge_secs: f32,
    pub dissolve_secs: f32,
    pub manifest_cutoff: f32,
    pub gone_cutoff: f32,
    pub exposure_falloff: f32,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            emerge_secs: EMERGE_SECS,
            dissolve_secs: DISSOLVE_SECS,
            manifest_cutoff: VEIL_MANIFEST_CUTOFF,
            gone_cutoff: VEIL_GONE_CUTOFF,
            exposure_falloff: EXPOSURE_FALLOFF,
        }
    }
}

/// Wave escalation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Net focus travel that arms a wave (meters).
    pub travel_meters: f32,
    /// Minimum interval between waves (seconds).
    pub min_interval: f32,
    /// Uniform random extra added to the cooldown (seconds).
    pub jitter: f32,
    pub count_min: u32,
    pub count_max: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            travel_meters: WAVE_TRAVEL_METERS,
            min_interval: WAVE_MIN_INTERVAL,
            jitter: WAVE_JITTER,
            count_min: WAVE_COUNT_MIN,
            count_max: WAVE_COUNT_MAX,
        }
    }
}

/// Culling thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CullConfig {
    /// Absolute recycle distance from the viewer (meters).
    pub cull_distance: f32,
    /// Behind-the-viewer distance past which the behind timer runs.
    pub behind_distance: f32,
    /// Behind-timer duration before despawn (seconds).
    pub behind_timeout: f32,
    /// Exposure at or below which a wraith counts as unlit.
    pub exposure_epsilon: f32,
    /// How a behind-culled wraith leaves the world.
    pub despawn_style: DespawnStyle,
}

impl Default for CullConfig {
    fn default() -> Self {
        Self {
            cull_distance: CULL_DISTANCE,
            behind_distance: CULL_BEHIND_DISTANCE,
            behind_timeout: CULL_BEHIND_TIMEOUT,
            exposure_epsilon: CULL_EXPOSURE_EPSILON,
            despawn_style: DespawnStyle::default(),
        }
    }
}

/// Guard (hotspot defense) behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Orbit angular speed (rad/s).
    pub orbit_rate: f32,
    /// Focus distance that triggers boosted pursuit (meters).
    pub trigger_dist: f32,
    /// Boosted-pursuit duration after a trigger (seconds).
    pub chase_secs: f32,
    /// Speed multiplier during boosted pursuit.
    pub chase_speed_factor: f32,
    /// Burst-multiplier factor during boosted pursuit.
    pub chase_burst_factor: f32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            orbit_rate: GUARD_ORBIT_RATE,
            trigger_dist: GUARD_TRIGGER_DIST,
            chase_secs: GUARD_CHASE_SECS,
            chase_speed_factor: GUARD_CHASE_SPEED_FACTOR,
            chase_burst_factor: GUARD_CHASE_BURST_FACTOR,
        }
    }
}

/// Spawner parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Fixed pool size. All wraiths are constructed once at init.
    pub pool_size: usize,
    /// Maximum simultaneously active wraiths, before any hotspot boost.
    pub max_alive: usize,
    /// Interval between timed spawns (seconds).
    pub interval: f32,
    /// Retry cooldown after exhausting placement attempts (seconds).
    pub retry_fallback: f32,
    /// Placement attempts per spawn call.
    pub max_attempts: u32,
    /// Spawn radius band from the anchor point (meters).
    pub min_radius: f32,
    pub max_radius: f32,
    /// Candidates closer than this to the live focus are rejected (meters).
    pub min_focus_dist: f32,
    /// Minimum planar separation between wraiths at spawn time (meters).
    pub min_separation: f32,
    /// Angular jitter half-angle around the chosen sector (radians).
    pub jitter_half_angle: f32,
    /// Sector weights: forward, behind, left, right.
    pub sector_weights: [f32; 4],
    /// Whether in-frustum close candidates are rejected.
    pub anti_popin: bool,
    /// Anti-pop-in distance as a fraction of `min_radius`.
    pub anti_popin_factor: f32,
    /// Random upward jitter on the canopy entry altitude (meters).
    pub spawn_alt_jitter: f32,
    /// Post-spawn protection window (seconds).
    pub protect_secs: f32,
    pub wave: WaveConfig,
    pub cull: CullConfig,
    pub guard: GuardConfig,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            max_alive: MAX_ALIVE,
            interval: SPAWN_INTERVAL,
            retry_fallback: SPAWN_RETRY_FALLBACK,
            max_attempts: SPAWN_MAX_ATTEMPTS,
            min_radius: SPAWN_MIN_RADIUS,
            max_radius: SPAWN_MAX_RADIUS,
            min_focus_dist: SPAWN_MIN_FOCUS_DIST,
            min_separation: SPAWN_MIN_SEPARATION,
            jitter_half_angle: SPAWN_JITTER_HALF_ANGLE,
            sector_weights: SECTOR_WEIGHTS,
            anti_popin: true,
            anti_popin_factor: ANTI_POPIN_FACTOR,
            spawn_alt_jitter: SPAWN_ALT_JITTER,
            protect_secs: SPAWN_PROTECT_SECS,
            wave: WaveConfig::default(),
            cull: CullConfig::default(),
            guard: GuardConfig::default(),
        }
    }
}

/// Beam parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamConfig {
    pub half_angle: f32,
    pub half_angle_min: f32,
    pub half_angle_max: f32,
    pub half_angle_step: f32,
    pub range: f32,
    pub range_min: f32,
    pub range_max: f32,
    pub range_step: f32,
    /// Exposure applied per second at full weight.
    pub exposure_rate: f32,
    /// Aim point height above a wraith's position (meters).
    pub aim_height: f32,
    pub heat_rise: f32,
    pub heat_fall: f32,
    pub overheat_hi: f32,
    pub overheat_lo: f32,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            half_angle: BEAM_HALF_ANGLE,
            half_angle_min: BEAM_HALF_ANGLE_MIN,
            half_angle_max: BEAM_HALF_ANGLE_MAX,
            half_angle_step: BEAM_HALF_ANGLE_STEP,
            range: BEAM_RANGE,
            range_min: BEAM_RANGE_MIN,
            range_max: BEAM_RANGE_MAX,
            range_step: BEAM_RANGE_STEP,
            exposure_rate: BEAM_EXPOSURE_RATE,
            aim_height: BEAM_AIM_HEIGHT,
            heat_rise: BEAM_HEAT_RISE,
            heat_fall: BEAM_HEAT_FALL,
            overheat_hi: BEAM_OVERHEAT_HI,
            overheat_lo: BEAM_OVERHEAT_LO,
        }
    }
}

/// Per-sanctuary parameters (shared by all sanctuaries in a mission).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SanctuaryConfig {
    /// Planar activation radius (meters).
    pub radius: f32,
    /// Continuous hold required to purify (seconds).
    pub hold_secs: f32,
    /// Charge lost per second while ineligible.
    pub decay_rate: f32,
    /// Interval between forced spawns while charging (seconds).
    pub surge_period: f32,
    /// Aim point height above the base position (meters).
    pub aim_height: f32,
}

impl Default for SanctuaryConfig {
    fn default() -> Self {
        Self {
            radius: SANCTUARY_RADIUS,
            hold_secs: SANCTUARY_HOLD_SECS,
            decay_rate: SANCTUARY_DECAY_RATE,
            surge_period: SANCTUARY_SURGE_PERIOD,
            aim_height: SANCTUARY_AIM_HEIGHT,
        }
    }
}

/// Top-level configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub motion: MotionConfig,
    pub lifecycle: LifecycleConfig,
    pub spawner: SpawnerConfig,
    pub beam: BeamConfig,
    pub sanctuary: SanctuaryConfig,
    /// Base positions of the mission's sanctuaries.
    pub sanctuary_positions: Vec<Vec3>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            motion: MotionConfig::default(),
            lifecycle: LifecycleConfig::default(),
            spawner: SpawnerConfig::default(),
            beam: BeamConfig::default(),
            sanctuary: SanctuaryConfig::default(),
            sanctuary_positions: Vec::new(),
        }
    }
}
