//! Spawner: owns the wraith pool, decides placement, timing, waves, and the
//! optional defense-hotspot mode.
//!
//! Placement is bounded rejection sampling around the active anchor (the
//! focus, or the hotspot center in defense mode). A tick that exhausts its
//! attempts defers to a short fallback cooldown; never an error.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gloam_core::components::*;
use gloam_core::config::{MotionConfig, SpawnerConfig};
use gloam_core::enums::{SpawnSector, WraithPhase};
use gloam_core::events::SimEvent;
use gloam_core::external::Frame;
use gloam_core::state::SpawnerDebug;
use gloam_core::types::{dir_to_yaw, planar, planar_distance};

use super::culling;

/// A defense hotspot: spawn pressure concentrates here while the focus is
/// inside its radius.
#[derive(Debug, Clone, Copy)]
pub struct Hotspot {
    pub center: Vec3,
    pub radius: f32,
    /// Extra active capacity while engaged.
    pub cap_boost: usize,
    /// Spawn interval multiplier while engaged (< 1 = faster).
    pub interval_mul: f32,
}

/// Mutable spawner state. The pool and active lists partition the fixed
/// entity set: every wraith is in exactly one of them at all times.
pub struct SpawnerState {
    pool: Vec<Entity>,
    active: Vec<Entity>,
    spawn_cooldown: f32,
    wave_travel: f32,
    wave_cooldown: f32,
    last_focus: Option<Vec3>,
    hotspot: Option<Hotspot>,
    hotspot_engaged: bool,
    /// Capacity still consumed by over-cap wraiths spawned under a hotspot
    /// boost that has since dropped. Drains with attrition.
    cap_carry: usize,
    recycle_buffer: Vec<Entity>,
}

impl SpawnerState {
    pub fn new(pool: Vec<Entity>, cfg: &SpawnerConfig) -> Self {
        Self {
            pool,
            active: Vec::new(),
            spawn_cooldown: cfg.interval,
            wave_travel: 0.0,
            wave_cooldown: 0.0,
            last_focus: None,
            hotspot: None,
            hotspot_engaged: false,
            cap_carry: 0,
            recycle_buffer: Vec::new(),
        }
    }

    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    pub fn pool_free(&self) -> usize {
        self.pool.len()
    }

    /// Current active-wraith capacity: the base cap plus an engaged hotspot
    /// boost, or the carried remainder of a boost that has dropped while its
    /// over-cap wraiths are still active.
    pub fn cap(&self, cfg: &SpawnerConfig) -> usize {
        let boost = match (&self.hotspot, self.hotspot_engaged) {
            (Some(h), true) => h.cap_boost,
            _ => 0,
        };
        cfg.max_alive + boost.max(self.cap_carry)
    }

    fn interval_mul(&self) -> f32 {
        match (&self.hotspot, self.hotspot_engaged) {
            (Some(h), true) => h.interval_mul,
            _ => 1.0,
        }
    }

    /// Anchor point for placement sampling.
    fn anchor(&self, frame: &Frame) -> Vec3 {
        match (&self.hotspot, self.hotspot_engaged) {
            (Some(h), true) => h.center,
            _ => frame.focus,
        }
    }

    /// Read-only snapshot of spawner internals for debug overlays.
    pub fn debug_info(&self, cfg: &SpawnerConfig) -> SpawnerDebug {
        SpawnerDebug {
            alive: self.active.len(),
            cap: self.cap(cfg),
            pool_free: self.pool.len(),
            next_spawn_secs: self.spawn_cooldown.max(0.0),
            defense_mode: self.hotspot.is_some(),
            hotspot_engaged: self.hotspot_engaged,
            wave_travel: self.wave_travel,
            wave_cooldown: self.wave_cooldown.max(0.0),
        }
    }
}

/// Run the spawner for one tick: dormant sweep, culling, hotspot engagement,
/// wave check, timed spawn.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
    dt: f32,
    events: &mut Vec<SimEvent>,
) {
    sweep_dormant(world, state);

    let mut buffer = std::mem::take(&mut state.recycle_buffer);
    buffer.clear();
    culling::run(world, &state.active, &cfg.cull, frame, dt, &mut buffer);
    for entity in buffer.drain(..) {
        recycle(world, state, entity);
    }
    state.recycle_buffer = buffer;

    // Attrition shrinks the carried capacity toward the current excess.
    let excess = state.active.len().saturating_sub(cfg.max_alive);
    state.cap_carry = state.cap_carry.min(excess);

    update_hotspot_engagement(state, cfg, frame, events);
    update_waves(world, rng, state, cfg, motion, frame, dt, events);

    state.spawn_cooldown -= dt;
    if state.spawn_cooldown <= 0.0 {
        if spawn_one(world, rng, state, cfg, motion, frame) {
            state.spawn_cooldown = cfg.interval * state.interval_mul();
        } else {
            state.spawn_cooldown = cfg.retry_fallback;
        }
    }
}

/// Spawn one wraith immediately, bypassing the cooldown. Returns false when
/// the pool is empty, capacity is full, or placement fails; a silent no-op.
pub fn force_spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
) -> bool {
    spawn_one(world, rng, state, cfg, motion, frame)
}

/// Enter defense mode around `center`.
pub fn set_hotspot(state: &mut SpawnerState, hotspot: Hotspot) {
    state.hotspot = Some(hotspot);
    state.hotspot_engaged = false;
}

/// Leave defense mode. Every guarding wraith reverts to pursuing the focus
/// and its speed/burst parameters reset to baseline.
pub fn clear_hotspot(
    world: &mut World,
    state: &mut SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    events: &mut Vec<SimEvent>,
) {
    if state.hotspot.take().is_none() {
        return;
    }
    if state.hotspot_engaged {
        state.cap_carry = state.active.len().saturating_sub(cfg.max_alive);
        events.push(SimEvent::HotspotReleased);
    }
    state.hotspot_engaged = false;

    for &entity in &state.active {
        if let Ok((strategy, mot)) =
            world.query_one_mut::<(&mut TargetStrategy, &mut Motion)>(entity)
        {
            if matches!(strategy, TargetStrategy::Guard { .. }) {
                *strategy = TargetStrategy::Chase;
                mot.speed = motion.speed;
                mot.burst_multiplier = motion.burst_multiplier;
            }
        }
    }
}

/// Return every wraith to the pool and reset all timers and modes.
pub fn reset(world: &mut World, state: &mut SpawnerState, cfg: &SpawnerConfig) {
    while let Some(entity) = state.active.pop() {
        reset_wraith(world, entity);
        state.pool.push(entity);
    }
    state.spawn_cooldown = cfg.interval;
    state.wave_travel = 0.0;
    state.wave_cooldown = 0.0;
    state.last_focus = None;
    state.hotspot = None;
    state.hotspot_engaged = false;
    state.cap_carry = 0;
}

/// Move wraiths whose dissolve completed back into the pool.
fn sweep_dormant(world: &mut World, state: &mut SpawnerState) {
    let mut i = 0;
    while i < state.active.len() {
        let entity = state.active[i];
        let dormant = world
            .get::<&WraithState>(entity)
            .map(|s| s.phase == WraithPhase::Dormant)
            .unwrap_or(false);
        if dormant {
            let entity = state.active.swap_remove(i);
            reset_wraith(world, entity);
            state.pool.push(entity);
        } else {
            i += 1;
        }
    }
}

/// Return one active wraith to the pool.
fn recycle(world: &mut World, state: &mut SpawnerState, entity: Entity) {
    let Some(idx) = state.active.iter().position(|&e| e == entity) else {
        return;
    };
    state.active.swap_remove(idx);
    reset_wraith(world, entity);
    state.pool.push(entity);
}

/// Reset a wraith's components to their dormant baseline.
fn reset_wraith(world: &mut World, entity: Entity) {
    if let Ok((state, exposure, motion, strategy, timers)) = world.query_one_mut::<(
        &mut WraithState,
        &mut Exposure,
        &mut Motion,
        &mut TargetStrategy,
        &mut CullTimers,
    )>(entity)
    {
        *state = WraithState::default();
        exposure.reset();
        motion.velocity = Vec3::ZERO;
        *strategy = TargetStrategy::Chase;
        *timers = CullTimers::default();
    }
}

fn update_hotspot_engagement(
    state: &mut SpawnerState,
    cfg: &SpawnerConfig,
    frame: &Frame,
    events: &mut Vec<SimEvent>,
) {
    let engaged = state
        .hotspot
        .as_ref()
        .is_some_and(|h| planar_distance(frame.focus, h.center) <= h.radius);
    if engaged != state.hotspot_engaged {
        if !engaged {
            // Wraiths spawned under the boost stay up; they keep consuming
            // capacity until attrition brings the count back under the cap.
            state.cap_carry = state.active.len().saturating_sub(cfg.max_alive);
        }
        events.push(if engaged {
            SimEvent::HotspotEngaged
        } else {
            SimEvent::HotspotReleased
        });
    }
    state.hotspot_engaged = engaged;
}

/// Accumulate focus travel and fire a wave burst when armed.
#[allow(clippy::too_many_arguments)]
fn update_waves(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
    dt: f32,
    events: &mut Vec<SimEvent>,
) {
    if let Some(last) = state.last_focus {
        state.wave_travel += planar_distance(frame.focus, last);
    }
    state.last_focus = Some(frame.focus);
    state.wave_cooldown -= dt;

    if state.wave_travel < cfg.wave.travel_meters || state.wave_cooldown > 0.0 {
        return;
    }

    let want = rng.gen_range(cfg.wave.count_min..=cfg.wave.count_max) as usize;
    let capacity = state.cap(cfg).saturating_sub(state.active.len());
    let want = want.min(capacity).min(state.pool.len());

    let mut spawned = 0u32;
    for _ in 0..want {
        if spawn_one(world, rng, state, cfg, motion, frame) {
            spawned += 1;
        }
    }

    state.wave_travel = 0.0;
    state.wave_cooldown = cfg.wave.min_interval
        + if cfg.wave.jitter > 0.0 {
            rng.gen_range(0.0..cfg.wave.jitter)
        } else {
            0.0
        };

    if spawned > 0 {
        debug!("wave spawned {spawned} wraiths");
        events.push(SimEvent::WaveSpawned { count: spawned });
    }
}

/// Attempt a single spawn: capacity/pool gate, placement, activation.
fn spawn_one(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
) -> bool {
    if state.active.len() >= state.cap(cfg) || state.pool.is_empty() {
        return false;
    }
    let Some(spot) = try_place(world, rng, state, cfg, motion, frame) else {
        return false;
    };
    let entity = match state.pool.pop() {
        Some(e) => e,
        None => return false,
    };
    activate(world, rng, entity, spot, state, cfg, motion, frame);
    state.active.push(entity);
    true
}

/// Bounded rejection sampling for a spawn point. Returns the accepted
/// planar candidate, or None when every attempt was rejected.
fn try_place(
    world: &World,
    rng: &mut ChaCha8Rng,
    state: &SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
) -> Option<Vec2> {
    let anchor = planar(state.anchor(frame));
    let view_yaw = dir_to_yaw(frame.view_forward);

    for _ in 0..cfg.max_attempts {
        let candidate = sample_candidate(rng, cfg, anchor, view_yaw);

        // Distance to the live focus point, not the anchor: hotspot spawns
        // must still respect the player's personal space.
        let focus_dist = candidate.distance(planar(frame.focus));
        if focus_dist < cfg.min_focus_dist {
            continue;
        }

        if too_close_to_active(world, state, candidate, cfg.min_separation) {
            continue;
        }

        if cfg.anti_popin && focus_dist < cfg.min_radius * cfg.anti_popin_factor {
            let ground = frame.terrain.ground_height(candidate.x, candidate.y);
            let probe = Vec3::new(
                candidate.x,
                ground + motion.swoop.high_alt,
                candidate.y,
            );
            if frame.frustum.contains(probe) {
                continue;
            }
        }

        return Some(candidate);
    }
    None
}

/// Draw one placement candidate: weighted sector, angular jitter, and a
/// radius sampled uniformly over *area* so density does not pile up near
/// the inner ring.
pub fn sample_candidate(
    rng: &mut ChaCha8Rng,
    cfg: &SpawnerConfig,
    anchor: Vec2,
    view_yaw: f32,
) -> Vec2 {
    let sector = pick_sector(rng, &cfg.sector_weights);
    let jitter: f32 = rng.gen_range(-cfg.jitter_half_angle..=cfg.jitter_half_angle);
    let yaw = view_yaw + sector.yaw_offset() + jitter;

    let u: f32 = rng.gen();
    let r_min2 = cfg.min_radius * cfg.min_radius;
    let r_max2 = cfg.max_radius * cfg.max_radius;
    let r = (r_min2 + (r_max2 - r_min2) * u).sqrt();

    anchor + Vec2::new(yaw.sin(), yaw.cos()) * r
}

fn pick_sector(rng: &mut ChaCha8Rng, weights: &[f32; 4]) -> SpawnSector {
    const SECTORS: [SpawnSector; 4] = [
        SpawnSector::Forward,
        SpawnSector::Behind,
        SpawnSector::Left,
        SpawnSector::Right,
    ];
    let total: f32 = weights.iter().sum();
    let mut roll = rng.gen::<f32>() * total;
    for (sector, &w) in SECTORS.iter().zip(weights) {
        if roll < w {
            return *sector;
        }
        roll -= w;
    }
    SpawnSector::Right
}

fn too_close_to_active(
    world: &World,
    state: &SpawnerState,
    candidate: Vec2,
    min_separation: f32,
) -> bool {
    state.active.iter().any(|&entity| {
        world
            .get::<&Position>(entity)
            .map(|p| planar(p.0).distance(candidate) < min_separation)
            .unwrap_or(false)
    })
}

/// Bring a pooled wraith to life at the accepted spot: canopy entry
/// altitude, fresh exposure/timers, and the mode-appropriate strategy.
#[allow(clippy::too_many_arguments)]
fn activate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    spot: Vec2,
    state: &SpawnerState,
    cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
) {
    let ground = frame.terrain.ground_height(spot.x, spot.y);
    let alt_jitter: f32 = if cfg.spawn_alt_jitter > 0.0 {
        rng.gen_range(0.0..cfg.spawn_alt_jitter)
    } else {
        0.0
    };
    // Enter from above the canopy so wraiths swoop down rather than pop in.
    let position = Vec3::new(spot.x, ground + motion.swoop.high_alt + alt_jitter, spot.y);

    let strategy = match (&state.hotspot, state.hotspot_engaged) {
        (Some(h), true) => TargetStrategy::Guard {
            center: h.center,
            radius: h.radius,
            trigger_dist: cfg.guard.trigger_dist,
            orbit_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            alert_remaining: 0.0,
        },
        _ => TargetStrategy::Chase,
    };

    if let Ok((pos, wstate, exposure, mot, strat, timers)) = world.query_one_mut::<(
        &mut Position,
        &mut WraithState,
        &mut Exposure,
        &mut Motion,
        &mut TargetStrategy,
        &mut CullTimers,
    )>(entity)
    {
        pos.0 = position;
        *wstate = WraithState::default();
        wstate.enter(WraithPhase::Emerging);
        exposure.reset();
        mot.velocity = Vec3::ZERO;
        mot.yaw = dir_to_yaw(frame.focus - position);
        mot.speed = motion.speed;
        mot.burst_multiplier = motion.burst_multiplier;
        *strat = strategy;
        *timers = CullTimers {
            behind_secs: 0.0,
            protect_remaining: cfg.protect_secs,
        };
    }

    debug!(
        "wraith activated at ({:.1}, {:.1}), {} alive",
        spot.x,
        spot.y,
        state.active.len() + 1
    );
}
