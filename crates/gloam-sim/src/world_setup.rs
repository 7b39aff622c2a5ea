//! Entity construction for the wraith pool.
//!
//! The whole pool is built once at init; wraiths are never despawned during
//! gameplay, they only change phase and move between the spawner's pool and
//! active lists.

use glam::Vec3;
use hecs::World;

use gloam_core::components::*;
use gloam_core::config::MotionConfig;

/// Spawn the fixed wraith pool and return the entity handles, all Dormant.
pub fn init_pool(world: &mut World, pool_size: usize, motion: &MotionConfig) -> Vec<hecs::Entity> {
    (0..pool_size)
        .map(|_| spawn_wraith(world, motion))
        .collect()
}

/// Construct a single dormant wraith with its full component bundle.
fn spawn_wraith(world: &mut World, motion: &MotionConfig) -> hecs::Entity {
    world.spawn((
        Wraith,
        Position(Vec3::ZERO),
        WraithState::default(),
        Exposure::default(),
        Motion {
            velocity: Vec3::ZERO,
            yaw: 0.0,
            speed: motion.speed,
            burst_multiplier: motion.burst_multiplier,
        },
        motion.tuning,
        motion.swoop,
        TargetStrategy::default(),
        CullTimers::default(),
    ))
}
