//! Host commands, queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A command from the host (input handling, UI) to the simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SimCommand {
    /// Set the beam trigger state.
    SetFiring { firing: bool },
    /// Step the beam cone half-angle up or down one notch.
    WidenBeam,
    NarrowBeam,
    /// Step the beam range up or down one notch.
    ExtendBeam,
    ShortenBeam,
    /// Enter defense mode around a hotspot.
    SetDefenseHotspot {
        center: Vec3,
        radius: f32,
        /// Extra active-wraith capacity while the focus is inside.
        cap_boost: usize,
        /// Spawn interval multiplier while the focus is inside (< 1 = faster).
        interval_mul: f32,
    },
    /// Leave defense mode; guards revert to pursuing the focus.
    ClearDefenseHotspot,
    /// Spawn one wraith immediately, bypassing the spawn cooldown.
    ForceSpawn,
    /// Return every wraith to the pool and reset spawner timers.
    Reset,
}
