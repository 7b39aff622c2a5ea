//! Wraith advancement system: drives the lifecycle FSM and steering from
//! `gloam-wraith` for every non-dormant wraith, once per tick.

use hecs::World;

use gloam_core::components::*;
use gloam_core::config::{GuardConfig, LifecycleConfig, MotionConfig};
use gloam_core::enums::WraithPhase;
use gloam_core::external::Frame;

use gloam_wraith::fsm;
use gloam_wraith::motion::{steer, SteerInput};
use gloam_wraith::strategy::{resolve_target, BoostEdge};

/// Advance lifecycle, exposure falloff, and movement for all wraiths.
pub fn run(
    world: &mut World,
    lifecycle: &LifecycleConfig,
    motion_cfg: &MotionConfig,
    guard_cfg: &GuardConfig,
    frame: &Frame,
    dt: f32,
) {
    for (
        _entity,
        (_wraith, pos, state, exposure, motion, tuning, swoop, strategy),
    ) in world.query_mut::<(
        &Wraith,
        &mut Position,
        &mut WraithState,
        &mut Exposure,
        &mut Motion,
        &MotionTuning,
        &SwoopProfile,
        &mut TargetStrategy,
    )>() {
        if state.phase == WraithPhase::Dormant {
            continue;
        }

        // Timer-driven lifecycle edges (emerge/dissolve fades).
        let update = fsm::evaluate(state, dt, lifecycle);
        state.phase_elapsed += dt;
        state.veil = update.veil;
        if update.phase_changed {
            state.enter(update.new_phase);
        }

        if state.phase != WraithPhase::Hunting {
            motion.velocity = glam::Vec3::ZERO;
            continue;
        }

        // Unlit exposure falls off linearly; a tick the beam lit is skipped.
        exposure.decay(lifecycle.exposure_falloff * dt);

        let (target, edge) = resolve_target(strategy, pos.0, frame.focus, guard_cfg, dt);
        match edge {
            BoostEdge::Started => {
                motion.speed = motion_cfg.speed * guard_cfg.chase_speed_factor;
                motion.burst_multiplier =
                    motion_cfg.burst_multiplier * guard_cfg.chase_burst_factor;
            }
            BoostEdge::Ended => {
                motion.speed = motion_cfg.speed;
                motion.burst_multiplier = motion_cfg.burst_multiplier;
            }
            BoostEdge::None => {}
        }

        let out = steer(
            &SteerInput {
                position: pos.0,
                yaw: motion.yaw,
                target,
                speed: motion.speed,
                burst_multiplier: motion.burst_multiplier,
                ground_y: frame.terrain.ground_height(pos.0.x, pos.0.z),
                dt,
            },
            tuning,
            swoop,
        );
        pos.0 = out.position;
        motion.yaw = out.yaw;
        motion.velocity = out.velocity;
    }
}
