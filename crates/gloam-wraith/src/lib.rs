//! Wraith behavior for GLOAM.
//!
//! Pure functions that compute lifecycle transitions, steering, and target
//! resolution for wraith entities. No ECS dependency; it operates on plain
//! data, which keeps it trivially unit-testable.

pub mod fsm;
pub mod motion;
pub mod strategy;

pub use gloam_core as core;

#[cfg(test)]
mod tests;
