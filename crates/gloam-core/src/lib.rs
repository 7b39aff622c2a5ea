//! Core types and definitions for the GLOAM simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, config, state snapshots, events, and constants.
//! It has no dependency on any ECS or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod external;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
