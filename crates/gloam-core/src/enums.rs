//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Wraith lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WraithPhase {
    /// In the pool, invisible, not eligible for targeting or culling.
    #[default]
    Dormant,
    /// Manifesting out of the canopy, veil fading in.
    Emerging,
    /// Fully manifest and pursuing its target.
    Hunting,
    /// Saturated by the beam, veil fading out.
    Dissolving,
}

/// How a culled wraith leaves the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DespawnStyle {
    /// Returned to the pool immediately (no visual).
    #[default]
    Recycle,
    /// Forced into the dissolve fade first.
    Dissolve,
}

/// Sanctuary progress state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SanctuaryState {
    /// Not currently charging.
    #[default]
    Idle,
    /// Beam held on the sanctuary, charge accumulating.
    Purifying,
    /// Fully charged. Terminal, never regresses.
    Done,
}

/// Placement sector relative to the planar view direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSector {
    Forward,
    Behind,
    Left,
    Right,
}

impl SpawnSector {
    /// Yaw offset of the sector center from the view yaw (radians).
    pub fn yaw_offset(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Self::Forward => 0.0,
            Self::Behind => PI,
            Self::Left => -FRAC_PI_2,
            Self::Right => FRAC_PI_2,
        }
    }
}
