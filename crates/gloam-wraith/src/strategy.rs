//! Target resolution.
//!
//! One dispatch function reads the `TargetStrategy` tag and produces this
//! tick's pursuit point. Guards additionally manage their own alert timer;
//! the caller reacts to the returned edge by boosting or restoring the
//! wraith's speed.

use glam::Vec3;

use gloam_core::components::TargetStrategy;
use gloam_core::config::GuardConfig;
use gloam_core::types::{planar_distance, yaw_to_dir};

/// Whether a guard's boosted pursuit started or ended this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostEdge {
    None,
    Started,
    Ended,
}

/// Resolve the pursuit point for this tick, advancing guard orbit/alert
/// state in place.
pub fn resolve_target(
    strategy: &mut TargetStrategy,
    position: Vec3,
    focus: Vec3,
    cfg: &GuardConfig,
    dt: f32,
) -> (Vec3, BoostEdge) {
    match strategy {
        TargetStrategy::Chase => (focus, BoostEdge::None),
        TargetStrategy::Guard {
            center,
            radius,
            trigger_dist,
            orbit_phase,
            alert_remaining,
        } => {
            if *alert_remaining > 0.0 {
                *alert_remaining -= dt;
                if *alert_remaining <= 0.0 {
                    *alert_remaining = 0.0;
                    let orbit = *center + yaw_to_dir(*orbit_phase) * *radius;
                    return (orbit, BoostEdge::Ended);
                }
                return (focus, BoostEdge::None);
            }

            let focus_near = planar_distance(focus, *center) < *trigger_dist
                || planar_distance(focus, position) < *trigger_dist;
            if focus_near {
                *alert_remaining = cfg.chase_secs;
                (focus, BoostEdge::Started)
            } else {
                *orbit_phase += cfg.orbit_rate * dt;
                (*center + yaw_to_dir(*orbit_phase) * *radius, BoostEdge::None)
            }
        }
    }
}
