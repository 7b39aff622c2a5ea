//! Default tuning parameters.
//!
//! Every value here is a default for a field in `config`; nothing reads
//! these directly at runtime, so hosts can override any of them.

// --- Wraith lifecycle ---

/// Time for a wraith to fade in after spawning (seconds).
pub const EMERGE_SECS: f32 = 1.6;

/// Time for a wraith to fade out once cleansed (seconds).
pub const DISSOLVE_SECS: f32 = 1.1;

/// Veil value at or below which an emerging wraith counts as manifest.
pub const VEIL_MANIFEST_CUTOFF: f32 = 0.05;

/// Veil value at or above which a dissolving wraith counts as gone.
pub const VEIL_GONE_CUTOFF: f32 = 0.95;

/// Exposure lost per second while a hunting wraith is not lit.
pub const EXPOSURE_FALLOFF: f32 = 0.35;

// --- Wraith motion ---

/// Base pursuit speed (m/s).
pub const WRAITH_SPEED: f32 = 6.5;

/// Speed multiplier beyond the burst range.
pub const BURST_MULTIPLIER: f32 = 1.6;

/// Planar distance beyond which the burst multiplier applies (meters).
pub const BURST_RANGE: f32 = 38.0;

/// Maximum yaw rate (rad/s).
pub const TURN_RATE: f32 = 2.2;

/// Turn-rate multiplier applied past the sharp-turn heading error.
pub const SHARP_TURN_FACTOR: f32 = 3.5;

/// Heading error past which the sharp-turn factor engages (radians, 35°).
pub const SHARP_TURN_ERROR: f32 = 35.0 * std::f32::consts::PI / 180.0;

/// Planar distance beyond which heading snaps straight at the target
/// instead of blending, preventing long-range orbiting (meters).
pub const HARD_LOCK_RANGE: f32 = 60.0;

/// Radius around the (offset) target inside which position snaps (meters).
pub const ARRIVE_RADIUS: f32 = 2.0;

// --- Swoop profile ---

/// Planar distance at which a wraith holds its high altitude (meters).
pub const SWOOP_FAR_BAND: f32 = 30.0;

/// Planar distance at which a wraith reaches its low altitude (meters).
pub const SWOOP_NEAR_BAND: f32 = 8.0;

/// Altitude above ground when far from the target (meters).
pub const SWOOP_HIGH_ALT: f32 = 14.0;

/// Altitude above ground when close to the target (meters).
/// Also the hard floor; a wraith never descends to ground level.
pub const SWOOP_LOW_ALT: f32 = 2.5;

/// Maximum vertical blend rate (m/s).
pub const SWOOP_BLEND_RATE: f32 = 5.0;

/// Random upward jitter added to the canopy entry altitude (meters).
pub const SPAWN_ALT_JITTER: f32 = 1.5;

// --- Spawner ---

/// Fixed wraith pool size.
pub const POOL_SIZE: usize = 10;

/// Maximum simultaneously active wraiths (before any hotspot boost).
pub const MAX_ALIVE: usize = 6;

/// Interval between timed spawns (seconds).
pub const SPAWN_INTERVAL: f32 = 4.5;

/// Retry cooldown after a spawn tick exhausts its placement attempts.
pub const SPAWN_RETRY_FALLBACK: f32 = 0.6;

/// Placement attempts per spawn call before deferring to the next tick.
pub const SPAWN_MAX_ATTEMPTS: u32 = 12;

/// Minimum spawn radius from the anchor point (meters).
pub const SPAWN_MIN_RADIUS: f32 = 18.0;

/// Maximum spawn radius from the anchor point (meters).
pub const SPAWN_MAX_RADIUS: f32 = 42.0;

/// Candidates closer than this to the live focus are rejected (meters).
pub const SPAWN_MIN_FOCUS_DIST: f32 = 12.0;

/// Minimum planar separation between wraiths at spawn time (meters).
pub const SPAWN_MIN_SEPARATION: f32 = 6.0;

/// Uniform angular jitter half-angle around the chosen sector (radians, 35°).
pub const SPAWN_JITTER_HALF_ANGLE: f32 = 35.0 * std::f32::consts::PI / 180.0;

/// Anti-pop-in: reject in-frustum candidates closer than this fraction of
/// the minimum spawn radius.
pub const ANTI_POPIN_FACTOR: f32 = 0.85;

/// Sector weights for placement direction relative to the view:
/// forward, behind, left, right.
pub const SECTOR_WEIGHTS: [f32; 4] = [0.45, 0.20, 0.175, 0.175];

// --- Waves ---

/// Net focus travel distance that arms a wave (meters).
pub const WAVE_TRAVEL_METERS: f32 = 140.0;

/// Minimum interval between waves (seconds).
pub const WAVE_MIN_INTERVAL: f32 = 25.0;

/// Random extra added to the wave cooldown (seconds, uniform 0..this).
pub const WAVE_JITTER: f32 = 10.0;

/// Wave burst size bounds (inclusive), further bounded by free capacity.
pub const WAVE_COUNT_MIN: u32 = 2;
pub const WAVE_COUNT_MAX: u32 = 4;

// --- Culling ---

/// Absolute recycle distance from the viewer (meters).
pub const CULL_DISTANCE: f32 = 90.0;

/// Behind-the-viewer distance past which the behind timer runs (meters).
pub const CULL_BEHIND_DISTANCE: f32 = 30.0;

/// Behind-timer duration before a wraith is despawned (seconds).
pub const CULL_BEHIND_TIMEOUT: f32 = 6.0;

/// Post-spawn window during which a wraith is immune to behind-culling.
pub const SPAWN_PROTECT_SECS: f32 = 3.0;

/// Exposure at or below which a wraith counts as unlit for culling.
pub const CULL_EXPOSURE_EPSILON: f32 = 0.05;

// --- Guard behavior ---

/// Angular speed of the guard orbit around a hotspot (rad/s).
pub const GUARD_ORBIT_RATE: f32 = 0.5;

/// Focus distance (to the hotspot or to the guard itself) that triggers
/// boosted pursuit (meters).
pub const GUARD_TRIGGER_DIST: f32 = 10.0;

/// Duration of the boosted pursuit after a guard is triggered (seconds).
pub const GUARD_CHASE_SECS: f32 = 6.0;

/// Speed multiplier while a guard is in boosted pursuit.
pub const GUARD_CHASE_SPEED_FACTOR: f32 = 1.35;

/// Burst multiplier factor while a guard is in boosted pursuit.
pub const GUARD_CHASE_BURST_FACTOR: f32 = 1.25;

// --- Beam ---

/// Beam cone half-angle (radians, 10°), and its adjustment bounds/step.
pub const BEAM_HALF_ANGLE: f32 = 10.0 * std::f32::consts::PI / 180.0;
pub const BEAM_HALF_ANGLE_MIN: f32 = 4.0 * std::f32::consts::PI / 180.0;
pub const BEAM_HALF_ANGLE_MAX: f32 = 18.0 * std::f32::consts::PI / 180.0;
pub const BEAM_HALF_ANGLE_STEP: f32 = 1.0 * std::f32::consts::PI / 180.0;

/// Beam reach (meters), and its adjustment bounds/step.
pub const BEAM_RANGE: f32 = 30.0;
pub const BEAM_RANGE_MIN: f32 = 15.0;
pub const BEAM_RANGE_MAX: f32 = 50.0;
pub const BEAM_RANGE_STEP: f32 = 2.0;

/// Exposure applied per second at full weight.
pub const BEAM_EXPOSURE_RATE: f32 = 0.9;

/// Aim point height above a wraith's position (meters).
pub const BEAM_AIM_HEIGHT: f32 = 1.2;

/// Heat gained per second while firing.
pub const BEAM_HEAT_RISE: f32 = 0.22;

/// Heat lost per second while not firing (or overheated).
pub const BEAM_HEAT_FALL: f32 = 0.35;

/// Heat level that trips the overheat latch.
pub const BEAM_OVERHEAT_HI: f32 = 1.0;

/// Heat level at which the overheat latch releases (hysteresis band).
pub const BEAM_OVERHEAT_LO: f32 = 0.35;

// --- Sanctuaries ---

/// Planar radius within which the focus activates a sanctuary (meters).
pub const SANCTUARY_RADIUS: f32 = 9.0;

/// Continuous beam-hold required to purify a sanctuary (seconds).
pub const SANCTUARY_HOLD_SECS: f32 = 6.0;

/// Charge lost per second while ineligible.
pub const SANCTUARY_DECAY_RATE: f32 = 0.12;

/// Interval between forced spawns while a sanctuary charges (seconds).
pub const SANCTUARY_SURGE_PERIOD: f32 = 1.2;

/// Aim point height above a sanctuary's base position (meters).
pub const SANCTUARY_AIM_HEIGHT: f32 = 1.5;
