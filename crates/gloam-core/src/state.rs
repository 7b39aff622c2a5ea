//! Simulation snapshot: the complete visible state handed to the host each
//! tick. Everything here is serde-serializable so hosts can ship it across
//! an FFI/IPC boundary and tests can compare whole runs byte-for-byte.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{SanctuaryState, WraithPhase};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete simulation state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub wraiths: Vec<WraithView>,
    pub beam: BeamView,
    pub sanctuaries: Vec<SanctuaryView>,
    pub spawner: SpawnerDebug,
    pub events: Vec<SimEvent>,
}

/// One active wraith, as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WraithView {
    /// Stable entity id (hecs entity index).
    pub id: u32,
    pub position: Vec3,
    pub yaw: f32,
    pub phase: WraithPhase,
    /// Illumination accumulated, 0..1.
    pub exposure: f32,
    /// Dissolve scalar for the shader: 1 = hidden, 0 = manifest.
    pub veil: f32,
    /// Whether this wraith is currently guarding a hotspot.
    pub guarding: bool,
}

/// Beam status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeamView {
    pub firing: bool,
    pub heat: f32,
    pub overheated: bool,
    pub half_angle: f32,
    pub range: f32,
    /// Best-weighted wraith in the cone this tick, if any.
    pub focus: Option<BeamFocusView>,
}

/// The beam's current best target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamFocusView {
    pub id: u32,
    pub weight: f32,
    pub distance: f32,
}

/// One sanctuary's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanctuaryView {
    pub position: Vec3,
    pub state: SanctuaryState,
    /// Accumulated hold, 0..hold_secs.
    pub charge: f32,
    pub hold_secs: f32,
}

/// Read-only spawner internals for debug overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnerDebug {
    pub alive: usize,
    /// Current capacity including any hotspot boost.
    pub cap: usize,
    pub pool_free: usize,
    /// Seconds until the next timed spawn attempt.
    pub next_spawn_secs: f32,
    /// A defense hotspot is configured.
    pub defense_mode: bool,
    /// The focus is currently inside the hotspot radius.
    pub hotspot_engaged: bool,
    /// Focus travel accumulated toward the next wave (meters).
    pub wave_travel: f32,
    /// Remaining wave cooldown (seconds).
    pub wave_cooldown: f32,
}
