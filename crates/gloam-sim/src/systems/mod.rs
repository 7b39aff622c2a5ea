//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` plus explicit resource
//! arguments. They do not own entity state; all per-wraith state lives in
//! components; spawner/beam/sanctuary resources live on the engine and are
//! threaded through by `Simulation::tick` in a fixed order.

pub mod beam;
pub mod culling;
pub mod sanctuary;
pub mod snapshot;
pub mod spawner;
pub mod wraith_ai;
