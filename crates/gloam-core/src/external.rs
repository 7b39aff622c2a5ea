//! Seams to the host world.
//!
//! The simulation core never owns terrain, cameras, or collision geometry;
//! it consumes them through these traits, handed in fresh each tick inside a
//! `Frame`. One explicit context threaded through every system, no
//! process-wide singletons.

use glam::Vec3;

/// Ground elevation sampling.
pub trait Terrain {
    /// Ground height (y) at the given horizontal coordinates.
    fn ground_height(&self, x: f32, z: f32) -> f32;
}

/// Visibility test against the viewer's frustum.
pub trait Frustum {
    fn contains(&self, point: Vec3) -> bool;
}

/// Opaque obstacle geometry, used only for occlusion ray tests.
pub trait Occluder {
    /// Whether the segment `from → to` hits any obstacle.
    fn ray_blocked(&self, from: Vec3, to: Vec3) -> bool;
}

/// Per-tick view of the host world.
pub struct Frame<'a> {
    /// The pursued point, typically the player.
    pub focus: Vec3,
    /// Viewer position; also the beam apex.
    pub view_pos: Vec3,
    /// Viewer forward direction; also the beam axis. Unit length.
    pub view_forward: Vec3,
    pub terrain: &'a dyn Terrain,
    pub frustum: &'a dyn Frustum,
    /// Absent = no occlusion tests (open terrain).
    pub occluder: Option<&'a dyn Occluder>,
}

impl<'a> Frame<'a> {
    /// Whether the segment is blocked, treating a missing occluder as clear.
    pub fn blocked(&self, from: Vec3, to: Vec3) -> bool {
        self.occluder.is_some_and(|o| o.ray_blocked(from, to))
    }
}

/// Flat ground at a fixed elevation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain(pub f32);

impl Terrain for FlatTerrain {
    fn ground_height(&self, _x: f32, _z: f32) -> f32 {
        self.0
    }
}

/// A frustum that accepts (or rejects) everything. Useful for hosts without
/// a camera yet and for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedFrustum(pub bool);

impl Frustum for FixedFrustum {
    fn contains(&self, _point: Vec3) -> bool {
        self.0
    }
}
