//! Snapshot assembly: flattens world and resource state into the
//! serializable `SimSnapshot` handed back to the host each tick.

use hecs::World;

use gloam_core::components::{Exposure, Motion, Position, TargetStrategy, Wraith, WraithState};
use gloam_core::config::{SanctuaryConfig, SpawnerConfig};
use gloam_core::enums::WraithPhase;
use gloam_core::events::SimEvent;
use gloam_core::state::{SimSnapshot, WraithView};
use gloam_core::types::SimTime;

use super::beam::BeamState;
use super::sanctuary::SanctuaryField;
use super::spawner::SpawnerState;

/// Build the snapshot for one completed tick, consuming this tick's events.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: SimTime,
    spawner: &SpawnerState,
    spawner_cfg: &SpawnerConfig,
    beam: &BeamState,
    field: &SanctuaryField,
    sanctuary_cfg: &SanctuaryConfig,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let mut wraiths = Vec::with_capacity(spawner.active().len());
    let mut query =
        world.query::<(&Wraith, &Position, &WraithState, &Exposure, &Motion, &TargetStrategy)>();
    for (entity, (_w, pos, state, exposure, motion, strategy)) in query.iter() {
        if state.phase == WraithPhase::Dormant {
            continue;
        }
        wraiths.push(WraithView {
            id: entity.id(),
            position: pos.0,
            yaw: motion.yaw,
            phase: state.phase,
            exposure: exposure.value(),
            veil: state.veil,
            guarding: matches!(strategy, TargetStrategy::Guard { .. }),
        });
    }

    SimSnapshot {
        time,
        wraiths,
        beam: beam.view(),
        sanctuaries: field.views(sanctuary_cfg),
        spawner: spawner.debug_info(spawner_cfg),
        events,
    }
}
