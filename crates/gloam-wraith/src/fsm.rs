//! Wraith lifecycle finite state machine.
//!
//! Dormant → Emerging → Hunting → Dissolving → Dormant. The Hunting →
//! Dissolving edge is exposure-driven and fired by whoever saturates the
//! exposure (the beam system); everything timer-driven lives here.

use gloam_core::components::WraithState;
use gloam_core::config::LifecycleConfig;
use gloam_core::enums::WraithPhase;
use gloam_core::types::smoothstep;

/// Output of one lifecycle evaluation.
pub struct LifecycleUpdate {
    pub new_phase: WraithPhase,
    pub veil: f32,
    pub phase_changed: bool,
}

/// Evaluate the timer-driven edges for one wraith over `dt` seconds.
///
/// The veil interpolates with a smoothstep over the phase duration; the
/// transition fires when the duration elapses or the veil crosses its
/// cutoff, whichever comes first.
pub fn evaluate(state: &WraithState, dt: f32, cfg: &LifecycleConfig) -> LifecycleUpdate {
    let elapsed = state.phase_elapsed + dt;

    match state.phase {
        WraithPhase::Dormant | WraithPhase::Hunting => LifecycleUpdate {
            new_phase: state.phase,
            veil: state.veil,
            phase_changed: false,
        },
        WraithPhase::Emerging => {
            let veil = 1.0 - smoothstep(0.0, cfg.emerge_secs, elapsed);
            if elapsed >= cfg.emerge_secs || veil <= cfg.manifest_cutoff {
                LifecycleUpdate {
                    new_phase: WraithPhase::Hunting,
                    veil: 0.0,
                    phase_changed: true,
                }
            } else {
                LifecycleUpdate {
                    new_phase: WraithPhase::Emerging,
                    veil,
                    phase_changed: false,
                }
            }
        }
        WraithPhase::Dissolving => {
            let veil = smoothstep(0.0, cfg.dissolve_secs, elapsed);
            if elapsed >= cfg.dissolve_secs || veil >= cfg.gone_cutoff {
                LifecycleUpdate {
                    new_phase: WraithPhase::Dormant,
                    veil: 1.0,
                    phase_changed: true,
                }
            } else {
                LifecycleUpdate {
                    new_phase: WraithPhase::Dissolving,
                    veil,
                    phase_changed: false,
                }
            }
        }
    }
}
