//! Culling: recycles wraiths the player left behind.
//!
//! Runs inside the spawner pass, before any spawning. Two rules:
//! an absolute distance cut, and a behind-the-viewer timer gated on the
//! frustum, the post-spawn protection window, and near-zero exposure.

use hecs::{Entity, World};

use gloam_core::components::{CullTimers, Exposure, Position, WraithState};
use gloam_core::config::CullConfig;
use gloam_core::enums::{DespawnStyle, WraithPhase};
use gloam_core::external::Frame;
use gloam_core::types::{planar, planar_distance, DIR_EPSILON};

/// Evaluate culling for every active wraith. Entities to recycle are pushed
/// into `recycle_out`; dissolve-style despawns are flipped in place and
/// recycled by the dormant sweep once their fade completes.
pub fn run(
    world: &mut World,
    active: &[Entity],
    cfg: &CullConfig,
    frame: &Frame,
    dt: f32,
    recycle_out: &mut Vec<Entity>,
) {
    let view_fwd = planar(frame.view_forward);
    // Looking straight down degenerates the planar forward; nothing counts
    // as behind in that case.
    let view_fwd = if view_fwd.length() < DIR_EPSILON {
        None
    } else {
        Some(view_fwd.normalize())
    };

    for &entity in active {
        let Ok((pos, state, exposure, timers)) = world
            .query_one_mut::<(&Position, &mut WraithState, &Exposure, &mut CullTimers)>(entity)
        else {
            continue;
        };
        if state.phase == WraithPhase::Dormant {
            continue;
        }

        timers.protect_remaining = (timers.protect_remaining - dt).max(0.0);

        let dist = planar_distance(pos.0, frame.view_pos);
        if dist > cfg.cull_distance {
            recycle_out.push(entity);
            continue;
        }

        let behind = view_fwd.is_some_and(|fwd| {
            let rel = planar(pos.0) - planar(frame.view_pos);
            rel.dot(fwd) < 0.0 && dist > cfg.behind_distance
        });
        let eligible = behind
            && !frame.frustum.contains(pos.0)
            && timers.protect_remaining <= 0.0
            && exposure.value() <= cfg.exposure_epsilon;

        if !eligible {
            timers.behind_secs = 0.0;
            continue;
        }

        timers.behind_secs += dt;
        if timers.behind_secs > cfg.behind_timeout {
            timers.behind_secs = 0.0;
            match cfg.despawn_style {
                DespawnStyle::Recycle => recycle_out.push(entity),
                DespawnStyle::Dissolve => {
                    if state.phase == WraithPhase::Hunting {
                        state.enter(WraithPhase::Dissolving);
                    }
                }
            }
        }
    }
}
