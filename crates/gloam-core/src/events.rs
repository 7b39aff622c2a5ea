//! Events emitted by the simulation for the host's audio/VFX/UI feedback.
//!
//! The buffer is drained into each tick's snapshot; hosts that ignore an
//! event simply drop it, so every callback of the original surface is a
//! no-op by default.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One tick's worth of simulation feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A wraith's exposure saturated and it began dissolving.
    WraithCleansed { position: Vec3 },
    /// A travel-distance wave fired.
    WaveSpawned { count: u32 },
    /// The beam heat latch tripped; firing is forced off.
    BeamOverheated,
    /// Heat fell back below the release threshold.
    BeamCooled,
    /// The focus entered a defense hotspot's radius.
    HotspotEngaged,
    /// Defense mode ended (cleared or focus left the radius).
    HotspotReleased,
    /// A sanctuary finished purifying.
    SanctuaryPurified {
        index: usize,
        completed: usize,
        total: usize,
    },
}
