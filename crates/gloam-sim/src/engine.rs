//! Simulation engine: the core of the game.
//!
//! `Simulation` owns the hecs world, the seeded RNG, and the spawner, beam,
//! and sanctuary resources. The host render loop calls `tick(dt, &frame)`
//! once per animation frame; pausing is simply not calling `tick` (no timer
//! advances, and each tick's work is self-contained). Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gloam_core::commands::SimCommand;
use gloam_core::config::SimConfig;
use gloam_core::events::SimEvent;
use gloam_core::external::Frame;
use gloam_core::state::{SimSnapshot, SpawnerDebug};
use gloam_core::types::SimTime;

use crate::systems;
use crate::systems::beam::{BeamFocus, BeamState};
use crate::systems::sanctuary::SanctuaryField;
use crate::systems::spawner::{Hotspot, SpawnerState};
use crate::world_setup;

/// The simulation. Owns the ECS world and all per-run state.
pub struct Simulation {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    config: SimConfig,
    spawner: SpawnerState,
    beam: BeamState,
    sanctuaries: SanctuaryField,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
}

impl Simulation {
    /// Create a new simulation. The whole wraith pool is constructed here;
    /// gameplay never allocates or destroys entities.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let pool = world_setup::init_pool(&mut world, config.spawner.pool_size, &config.motion);
        let spawner = SpawnerState::new(pool, &config.spawner);
        let beam = BeamState::new(&config.beam);
        let sanctuaries = SanctuaryField::new(&config.sanctuary_positions);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Self {
            world,
            time: SimTime::default(),
            rng,
            config,
            spawner,
            beam,
            sanctuaries,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// System order matches the data dependencies: the spawner mutates the
    /// active set, the beam reads this tick's positions, and the sanctuaries
    /// read this tick's aim (and may force spawns back through the spawner).
    pub fn tick(&mut self, dt: f32, frame: &Frame) -> SimSnapshot {
        self.process_commands(frame);

        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.config.spawner,
            &self.config.motion,
            frame,
            dt,
            &mut self.events,
        );
        systems::wraith_ai::run(
            &mut self.world,
            &self.config.lifecycle,
            &self.config.motion,
            &self.config.spawner.guard,
            frame,
            dt,
        );
        systems::beam::run(
            &mut self.world,
            &mut self.beam,
            &self.config.beam,
            frame,
            dt,
            &mut self.events,
        );
        systems::sanctuary::run(
            &mut self.world,
            &mut self.rng,
            &mut self.sanctuaries,
            &self.config.sanctuary,
            &self.beam,
            &mut self.spawner,
            &self.config.spawner,
            &self.config.motion,
            frame,
            dt,
            &mut self.events,
        );

        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.time,
            &self.spawner,
            &self.config.spawner,
            &self.beam,
            &self.sanctuaries,
            &self.config.sanctuary,
            events,
        )
    }

    /// Spawn one wraith immediately. Returns false when the pool is empty,
    /// capacity is full, or no valid placement was found; never an error.
    pub fn force_spawn_now(&mut self, frame: &Frame) -> bool {
        systems::spawner::force_spawn(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.config.spawner,
            &self.config.motion,
            frame,
        )
    }

    /// Set the beam trigger state directly (hosts may prefer the command
    /// queue for input-driven changes).
    pub fn set_firing(&mut self, firing: bool) {
        self.beam.set_firing(firing);
    }

    /// The beam's best target this tick.
    pub fn beam_focus(&self) -> Option<BeamFocus> {
        self.beam.focus_info()
    }

    /// Read-only spawner internals.
    pub fn debug_info(&self) -> SpawnerDebug {
        self.spawner.debug_info(&self.config.spawner)
    }

    /// Nearest sanctuary to `pos`: `(index, planar distance)`.
    pub fn nearest_sanctuary(&self, pos: glam::Vec3) -> Option<(usize, f32)> {
        self.sanctuaries.nearest_info(pos)
    }

    /// Nearest not-yet-purified sanctuary.
    pub fn nearest_incomplete_sanctuary(&self, pos: glam::Vec3) -> Option<(usize, f32)> {
        self.sanctuaries.nearest_incomplete(pos)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the sanctuary field.
    pub fn sanctuaries(&self) -> &SanctuaryField {
        &self.sanctuaries
    }

    /// Process all queued commands.
    fn process_commands(&mut self, frame: &Frame) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, frame);
        }
    }

    fn handle_command(&mut self, command: SimCommand, frame: &Frame) {
        match command {
            SimCommand::SetFiring { firing } => self.beam.set_firing(firing),
            SimCommand::WidenBeam => self.beam.widen(&self.config.beam),
            SimCommand::NarrowBeam => self.beam.narrow(&self.config.beam),
            SimCommand::ExtendBeam => self.beam.extend(&self.config.beam),
            SimCommand::ShortenBeam => self.beam.shorten(&self.config.beam),
            SimCommand::SetDefenseHotspot {
                center,
                radius,
                cap_boost,
                interval_mul,
            } => {
                systems::spawner::set_hotspot(
                    &mut self.spawner,
                    Hotspot {
                        center,
                        radius,
                        cap_boost,
                        interval_mul,
                    },
                );
            }
            SimCommand::ClearDefenseHotspot => {
                systems::spawner::clear_hotspot(
                    &mut self.world,
                    &mut self.spawner,
                    &self.config.spawner,
                    &self.config.motion,
                    &mut self.events,
                );
            }
            SimCommand::ForceSpawn => {
                self.force_spawn_now(frame);
            }
            SimCommand::Reset => {
                systems::spawner::reset(&mut self.world, &mut self.spawner, &self.config.spawner);
                self.time = SimTime::default();
            }
        }
    }
}
