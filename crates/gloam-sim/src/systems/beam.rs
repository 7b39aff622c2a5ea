//! Beam targeting: per-tick cone-of-effect detection against all hunting
//! wraiths, exposure application, and the heat/overheat resource.

use glam::Vec3;
use hecs::{Entity, World};

use gloam_core::components::{Exposure, Position, Wraith, WraithState};
use gloam_core::config::BeamConfig;
use gloam_core::enums::WraithPhase;
use gloam_core::events::SimEvent;
use gloam_core::external::Frame;
use gloam_core::state::{BeamFocusView, BeamView};
use gloam_core::types::DIR_EPSILON;

/// The beam's best target this tick.
#[derive(Debug, Clone, Copy)]
pub struct BeamFocus {
    pub entity: Entity,
    pub weight: f32,
    pub distance: f32,
}

/// Beam resource: trigger state, heat, and the adjustable cone.
pub struct BeamState {
    /// What the host requested; actual firing is gated by the heat latch.
    firing_requested: bool,
    pub heat: f32,
    pub overheated: bool,
    pub half_angle: f32,
    pub range: f32,
    focus: Option<BeamFocus>,
}

impl BeamState {
    pub fn new(cfg: &BeamConfig) -> Self {
        Self {
            firing_requested: false,
            heat: 0.0,
            overheated: false,
            half_angle: cfg.half_angle,
            range: cfg.range,
            focus: None,
        }
    }

    pub fn set_firing(&mut self, firing: bool) {
        self.firing_requested = firing;
    }

    /// Whether the beam actually emits this tick. While overheated, firing
    /// is forced off regardless of the requested state.
    pub fn is_firing(&self) -> bool {
        self.firing_requested && !self.overheated
    }

    /// Best-weighted wraith in the cone this tick, if any.
    pub fn focus_info(&self) -> Option<BeamFocus> {
        self.focus
    }

    pub fn widen(&mut self, cfg: &BeamConfig) {
        self.half_angle = (self.half_angle + cfg.half_angle_step).min(cfg.half_angle_max);
    }

    pub fn narrow(&mut self, cfg: &BeamConfig) {
        self.half_angle = (self.half_angle - cfg.half_angle_step).max(cfg.half_angle_min);
    }

    pub fn extend(&mut self, cfg: &BeamConfig) {
        self.range = (self.range + cfg.range_step).min(cfg.range_max);
    }

    pub fn shorten(&mut self, cfg: &BeamConfig) {
        self.range = (self.range - cfg.range_step).max(cfg.range_min);
    }

    /// HUD view of the beam.
    pub fn view(&self) -> BeamView {
        BeamView {
            firing: self.is_firing(),
            heat: self.heat,
            overheated: self.overheated,
            half_angle: self.half_angle,
            range: self.range,
            focus: self.focus.map(|f| BeamFocusView {
                id: f.entity.id(),
                weight: f.weight,
                distance: f.distance,
            }),
        }
    }
}

/// Run beam detection and the heat resource for one tick.
pub fn run(
    world: &mut World,
    beam: &mut BeamState,
    cfg: &BeamConfig,
    frame: &Frame,
    dt: f32,
    events: &mut Vec<SimEvent>,
) {
    beam.focus = None;
    let firing = beam.is_firing();

    if firing {
        illuminate(world, beam, cfg, frame, dt, events);
    }

    // Heat latch with hysteresis: trips at overheat_hi, releases only once
    // heat has fallen back to overheat_lo.
    if firing {
        beam.heat = (beam.heat + cfg.heat_rise * dt).min(1.0);
    } else {
        beam.heat = (beam.heat - cfg.heat_fall * dt).max(0.0);
    }
    if !beam.overheated && beam.heat >= cfg.overheat_hi {
        beam.overheated = true;
        events.push(SimEvent::BeamOverheated);
    } else if beam.overheated && beam.heat <= cfg.overheat_lo {
        beam.overheated = false;
        events.push(SimEvent::BeamCooled);
    }
}

/// Sweep the cone over all hunting wraiths, applying exposure and tracking
/// the best-weighted candidate.
fn illuminate(
    world: &mut World,
    beam: &mut BeamState,
    cfg: &BeamConfig,
    frame: &Frame,
    dt: f32,
    events: &mut Vec<SimEvent>,
) {
    let apex = frame.view_pos;
    let forward = frame.view_forward;
    let cos_half = beam.half_angle.cos();

    for (entity, (_wraith, pos, state, exposure)) in
        world.query_mut::<(&Wraith, &Position, &mut WraithState, &mut Exposure)>()
    {
        if state.phase != WraithPhase::Hunting {
            continue;
        }

        let aim: Vec3 = pos.0 + Vec3::Y * cfg.aim_height;
        let to_target = aim - apex;
        let dist = to_target.length();
        if dist > beam.range || dist < DIR_EPSILON {
            continue;
        }

        let cos_angle = (to_target / dist).dot(forward);
        // Strict gate: the exact boundary is still lit, with zero centering.
        if cos_angle < cos_half {
            continue;
        }

        if frame.blocked(apex, aim) {
            continue;
        }

        let denom = (1.0 - cos_half).max(DIR_EPSILON);
        let centering = (cos_angle - cos_half) / denom;
        let proximity = 1.0 - dist / beam.range;
        let weight = (0.5 * centering + 0.5 * proximity).clamp(0.0, 1.0);

        if exposure.apply(cfg.exposure_rate * weight * dt) {
            state.enter(WraithPhase::Dissolving);
            events.push(SimEvent::WraithCleansed { position: pos.0 });
        }

        let better = beam.focus.map_or(true, |f| weight > f.weight);
        if better {
            beam.focus = Some(BeamFocus {
                entity,
                weight,
                distance: dist,
            });
        }
    }
}
