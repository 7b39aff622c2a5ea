//! Simulation engine for GLOAM.
//!
//! Owns the hecs ECS world, advances all systems once per host frame,
//! and produces `SimSnapshot`s for the renderer/HUD.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::Simulation;
pub use gloam_core as core;
