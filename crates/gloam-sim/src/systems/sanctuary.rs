//! Sanctuary objectives: a charge/decay state machine gated on the beam's
//! aim and the focus position. Holding the beam on a sanctuary charges it;
//! sustained charging periodically forces extra spawns, escalating pressure
//! while the player commits to holding position.

use glam::Vec3;
use hecs::World;
use log::info;
use rand_chacha::ChaCha8Rng;

use gloam_core::config::{MotionConfig, SanctuaryConfig, SpawnerConfig};
use gloam_core::enums::SanctuaryState;
use gloam_core::events::SimEvent;
use gloam_core::external::Frame;
use gloam_core::state::SanctuaryView;
use gloam_core::types::{planar_distance, DIR_EPSILON};

use super::beam::BeamState;
use super::spawner::{self, SpawnerState};

/// One sanctuary.
#[derive(Debug, Clone)]
pub struct Sanctuary {
    pub position: Vec3,
    pub charge: f32,
    pub state: SanctuaryState,
    surge_timer: f32,
}

impl Sanctuary {
    fn new(position: Vec3) -> Self {
        Self {
            position,
            charge: 0.0,
            state: SanctuaryState::Idle,
            surge_timer: 0.0,
        }
    }
}

/// All sanctuaries in the mission.
pub struct SanctuaryField {
    sanctuaries: Vec<Sanctuary>,
}

impl SanctuaryField {
    pub fn new(positions: &[Vec3]) -> Self {
        Self {
            sanctuaries: positions.iter().copied().map(Sanctuary::new).collect(),
        }
    }

    pub fn sanctuaries(&self) -> &[Sanctuary] {
        &self.sanctuaries
    }

    pub fn completed(&self) -> usize {
        self.sanctuaries
            .iter()
            .filter(|s| s.state == SanctuaryState::Done)
            .count()
    }

    /// Nearest sanctuary to `pos`: `(index, planar distance)`.
    pub fn nearest_info(&self, pos: Vec3) -> Option<(usize, f32)> {
        self.nearest_matching(pos, |_| true)
    }

    /// Nearest sanctuary that is not yet Done.
    pub fn nearest_incomplete(&self, pos: Vec3) -> Option<(usize, f32)> {
        self.nearest_matching(pos, |s| s.state != SanctuaryState::Done)
    }

    fn nearest_matching(
        &self,
        pos: Vec3,
        keep: impl Fn(&Sanctuary) -> bool,
    ) -> Option<(usize, f32)> {
        self.sanctuaries
            .iter()
            .enumerate()
            .filter(|(_, s)| keep(s))
            .map(|(i, s)| (i, planar_distance(pos, s.position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn views(&self, cfg: &SanctuaryConfig) -> Vec<SanctuaryView> {
        self.sanctuaries
            .iter()
            .map(|s| SanctuaryView {
                position: s.position,
                state: s.state,
                charge: s.charge,
                hold_secs: cfg.hold_secs,
            })
            .collect()
    }
}

/// Advance every sanctuary for one tick. Runs after the beam system so the
/// cone test sees this tick's aim.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    field: &mut SanctuaryField,
    cfg: &SanctuaryConfig,
    beam: &BeamState,
    spawner_state: &mut SpawnerState,
    spawner_cfg: &SpawnerConfig,
    motion: &MotionConfig,
    frame: &Frame,
    dt: f32,
    events: &mut Vec<SimEvent>,
) {
    let total = field.sanctuaries.len();
    let cos_half = beam.half_angle.cos();
    let mut surge_spawns = 0usize;

    for index in 0..total {
        let became_done = {
            let sanctuary = &mut field.sanctuaries[index];
            // Done is terminal: charge and state never regress.
            if sanctuary.state == SanctuaryState::Done {
                continue;
            }

            let aim = sanctuary.position + Vec3::Y * cfg.aim_height;
            let eligible = beam.is_firing()
                && planar_distance(frame.focus, sanctuary.position) <= cfg.radius
                && aim_in_cone(frame.view_pos, frame.view_forward, aim, cos_half)
                && !frame.blocked(frame.view_pos, aim);

            if eligible {
                sanctuary.state = SanctuaryState::Purifying;
                sanctuary.charge = (sanctuary.charge + dt).min(cfg.hold_secs);

                sanctuary.surge_timer += dt;
                while sanctuary.surge_timer >= cfg.surge_period {
                    sanctuary.surge_timer -= cfg.surge_period;
                    surge_spawns += 1;
                }

                if sanctuary.charge >= cfg.hold_secs {
                    sanctuary.state = SanctuaryState::Done;
                    sanctuary.surge_timer = 0.0;
                    true
                } else {
                    false
                }
            } else {
                sanctuary.charge = (sanctuary.charge - cfg.decay_rate * dt).max(0.0);
                sanctuary.state = SanctuaryState::Idle;
                sanctuary.surge_timer = 0.0;
                false
            }
        };

        if became_done {
            let completed = field.completed();
            info!("sanctuary {index} purified ({completed}/{total})");
            events.push(SimEvent::SanctuaryPurified {
                index,
                completed,
                total,
            });
        }
    }

    for _ in 0..surge_spawns {
        spawner::force_spawn(world, rng, spawner_state, spawner_cfg, motion, frame);
    }
}

/// Same cosine test as the beam, with the objective's `>=` acceptance.
fn aim_in_cone(apex: Vec3, forward: Vec3, aim: Vec3, cos_half: f32) -> bool {
    let to_aim = aim - apex;
    let dist = to_aim.length();
    if dist < DIR_EPSILON {
        // Aim point coincides with the apex; the cone trivially covers it.
        return true;
    }
    (to_aim / dist).dot(forward) >= cos_half
}
