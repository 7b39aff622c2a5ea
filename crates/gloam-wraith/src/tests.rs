#[cfg(test)]
mod tests {
    use glam::Vec3;

    use gloam_core::components::{TargetStrategy, WraithState};
    use gloam_core::config::{GuardConfig, LifecycleConfig, MotionConfig};
    use gloam_core::enums::WraithPhase;

    use crate::fsm::evaluate;
    use crate::motion::{steer, SteerInput};
    use crate::strategy::{resolve_target, BoostEdge};

    fn emerging_state(elapsed: f32) -> WraithState {
        WraithState {
            phase: WraithPhase::Emerging,
            phase_elapsed: elapsed,
            veil: 1.0,
        }
    }

    // ---- Lifecycle ----

    #[test]
    fn test_emerge_completes_after_duration() {
        let cfg = LifecycleConfig::default();
        let state = emerging_state(cfg.emerge_secs);
        let update = evaluate(&state, 0.016, &cfg);
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, WraithPhase::Hunting);
        assert_eq!(update.veil, 0.0);
    }

    #[test]
    fn test_emerge_veil_fades_monotonically() {
        let cfg = LifecycleConfig::default();
        let dt = 0.1;
        let mut state = emerging_state(0.0);
        let mut last_veil = 1.0;
        loop {
            let update = evaluate(&state, dt, &cfg);
            assert!(
                update.veil <= last_veil + 1e-6,
                "veil should never increase while emerging"
            );
            last_veil = update.veil;
            if update.phase_changed {
                assert_eq!(update.new_phase, WraithPhase::Hunting);
                break;
            }
            state.phase_elapsed += dt;
            state.veil = update.veil;
            assert!(state.phase_elapsed < 60.0, "emerge never completed");
        }
    }

    #[test]
    fn test_emerge_cutoff_fires_before_full_duration() {
        // With a generous cutoff, the veil crosses it before the timer runs
        // out (smoothstep reaches 1 - 0.5 at the halfway point).
        let cfg = LifecycleConfig {
            manifest_cutoff: 0.5,
            ..Default::default()
        };
        let state = emerging_state(cfg.emerge_secs * 0.5);
        let update = evaluate(&state, 0.016, &cfg);
        assert!(update.phase_changed, "cutoff should end the phase early");
        assert_eq!(update.new_phase, WraithPhase::Hunting);
    }

    #[test]
    fn test_dissolve_returns_to_dormant() {
        let cfg = LifecycleConfig::default();
        let state = WraithState {
            phase: WraithPhase::Dissolving,
            phase_elapsed: cfg.dissolve_secs,
            veil: 0.8,
        };
        let update = evaluate(&state, 0.016, &cfg);
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, WraithPhase::Dormant);
        assert_eq!(update.veil, 1.0);
    }

    #[test]
    fn test_hunting_and_dormant_have_no_timed_edges() {
        let cfg = LifecycleConfig::default();
        for phase in [WraithPhase::Hunting, WraithPhase::Dormant] {
            let state = WraithState {
                phase,
                phase_elapsed: 1000.0,
                veil: 0.0,
            };
            let update = evaluate(&state, 0.016, &cfg);
            assert!(!update.phase_changed, "{phase:?} must not transition on time");
        }
    }

    // ---- Steering ----

    fn steer_input(position: Vec3, yaw: f32, target: Vec3) -> SteerInput {
        let motion = MotionConfig::default();
        SteerInput {
            position,
            yaw,
            target,
            speed: motion.speed,
            burst_multiplier: motion.burst_multiplier,
            ground_y: 0.0,
            dt: 1.0 / 60.0,
        }
    }

    #[test]
    fn test_hard_lock_snaps_heading_at_long_range() {
        let motion = MotionConfig::default();
        // Target far beyond the hard-lock range, wraith facing the wrong way.
        let input = steer_input(
            Vec3::new(0.0, 10.0, 0.0),
            std::f32::consts::PI,
            Vec3::new(0.0, 0.0, motion.tuning.hard_lock_range + 20.0),
        );
        let out = steer(&input, &motion.tuning, &motion.swoop);
        assert!(
            out.yaw.abs() < 1e-4,
            "beyond hard-lock range the heading should snap to the target"
        );
    }

    #[test]
    fn test_turn_is_rate_limited_at_close_range() {
        let motion = MotionConfig::default();
        // Target inside hard-lock range, 90 degrees off the current heading.
        let input = steer_input(
            Vec3::new(0.0, 10.0, 0.0),
            std::f32::consts::FRAC_PI_2,
            Vec3::new(0.0, 0.0, 20.0),
        );
        let out = steer(&input, &motion.tuning, &motion.swoop);
        // 90 degrees exceeds the sharp-turn error, so the fast rate applies,
        // but one tick still cannot close the whole error.
        let max_step = motion.tuning.turn_rate * motion.tuning.sharp_turn_factor * input.dt;
        let turned = (input.yaw - out.yaw).abs();
        assert!(turned > 0.0, "should turn toward the target");
        assert!(
            turned <= max_step + 1e-5,
            "turn must respect the sharp-turn rate limit"
        );
    }

    #[test]
    fn test_small_error_uses_base_turn_rate() {
        let motion = MotionConfig::default();
        // ~11 degrees of error: below the sharp-turn threshold.
        let input = steer_input(
            Vec3::new(0.0, 10.0, 0.0),
            0.2,
            Vec3::new(0.0, 0.0, 20.0),
        );
        let out = steer(&input, &motion.tuning, &motion.swoop);
        let turned = (input.yaw - out.yaw).abs();
        assert!(
            turned <= motion.tuning.turn_rate * input.dt + 1e-5,
            "small errors must use the unboosted turn rate"
        );
    }

    #[test]
    fn test_burst_speed_beyond_burst_range() {
        let motion = MotionConfig::default();
        let far = Vec3::new(0.0, 0.0, motion.tuning.burst_range + 50.0);
        let near = Vec3::new(0.0, 0.0, motion.tuning.burst_range - 10.0);

        let out_far = steer(&steer_input(Vec3::new(0.0, 10.0, 0.0), 0.0, far), &motion.tuning, &motion.swoop);
        let out_near = steer(&steer_input(Vec3::new(0.0, 10.0, 0.0), 0.0, near), &motion.tuning, &motion.swoop);

        let h_far = (out_far.velocity.x * out_far.velocity.x + out_far.velocity.z * out_far.velocity.z).sqrt();
        let h_near = (out_near.velocity.x * out_near.velocity.x + out_near.velocity.z * out_near.velocity.z).sqrt();
        assert!((h_far - motion.speed * motion.burst_multiplier).abs() < 1e-3);
        assert!((h_near - motion.speed).abs() < 1e-3);
    }

    #[test]
    fn test_arrival_snaps_to_standoff_point() {
        let motion = MotionConfig::default();
        let mut tuning = motion.tuning;
        tuning.keep_distance = 3.0;
        // One meter short of the standoff point, facing the target.
        let target = Vec3::new(0.0, 0.0, 10.0);
        let input = steer_input(Vec3::new(0.0, 2.5, 10.0 - 3.0 - 1.0), 0.0, target);
        let out = steer(&input, &tuning, &motion.swoop);
        assert!(
            (out.position.z - 7.0).abs() < 1e-4,
            "inside the arrive radius the position snaps to the standoff point"
        );
        assert_eq!(out.velocity.x, 0.0);
        assert_eq!(out.velocity.z, 0.0);
    }

    #[test]
    fn test_altitude_blends_between_bands() {
        let motion = MotionConfig::default();
        let swoop = motion.swoop;
        // Far target: altitude should move toward high_alt.
        let mut pos = Vec3::new(0.0, swoop.low_alt, 0.0);
        let far_target = Vec3::new(0.0, 0.0, swoop.far_band + 40.0);
        for _ in 0..(10.0 / 0.016) as usize {
            let mut input = steer_input(pos, 0.0, far_target);
            input.speed = 0.0; // hold planar position, watch altitude only
            input.burst_multiplier = 1.0;
            let out = steer(&input, &motion.tuning, &swoop);
            pos.y = out.position.y;
        }
        assert!(
            (pos.y - swoop.high_alt).abs() < 0.2,
            "far from the target the wraith should ride at high altitude, got {}",
            pos.y
        );
    }

    #[test]
    fn test_altitude_never_reaches_ground() {
        let motion = MotionConfig::default();
        let swoop = motion.swoop;
        let mut input = steer_input(Vec3::new(0.0, 0.5, 0.0), 0.0, Vec3::new(0.0, 0.0, 2.0));
        input.ground_y = 0.0;
        let out = steer(&input, &motion.tuning, &swoop);
        assert!(
            out.position.y >= swoop.low_alt,
            "altitude must stay above the ground clearance floor"
        );
    }

    #[test]
    fn test_degenerate_direction_means_no_movement() {
        let motion = MotionConfig::default();
        let pos = Vec3::new(5.0, 6.0, 5.0);
        // Target planar-coincident with the wraith.
        let input = steer_input(pos, 1.0, Vec3::new(5.0, 0.0, 5.0));
        let out = steer(&input, &motion.tuning, &motion.swoop);
        assert_eq!(out.position.x, pos.x);
        assert_eq!(out.position.z, pos.z);
        assert_eq!(out.yaw, 1.0, "yaw unchanged when the direction degenerates");
    }

    #[test]
    fn test_non_finite_target_is_rejected() {
        let motion = MotionConfig::default();
        let pos = Vec3::new(1.0, 4.0, 2.0);
        let input = steer_input(pos, 0.3, Vec3::new(f32::NAN, 0.0, 0.0));
        let out = steer(&input, &motion.tuning, &motion.swoop);
        assert_eq!(out.position, pos, "NaN targets must not move the wraith");
        assert!(out.position.is_finite());
    }

    // ---- Target resolution ----

    #[test]
    fn test_chase_resolves_to_focus() {
        let cfg = GuardConfig::default();
        let focus = Vec3::new(3.0, 1.0, -2.0);
        let mut strategy = TargetStrategy::Chase;
        let (target, edge) =
            resolve_target(&mut strategy, Vec3::ZERO, focus, &cfg, 0.016);
        assert_eq!(target, focus);
        assert_eq!(edge, BoostEdge::None);
    }

    #[test]
    fn test_guard_orbits_until_triggered() {
        let cfg = GuardConfig::default();
        let center = Vec3::new(100.0, 0.0, 100.0);
        let mut strategy = TargetStrategy::Guard {
            center,
            radius: 10.0,
            trigger_dist: 8.0,
            orbit_phase: 0.0,
            alert_remaining: 0.0,
        };
        // Focus far away: orbit point on the circle, phase advancing.
        let far_focus = Vec3::ZERO;
        let (t1, e1) = resolve_target(&mut strategy, center, far_focus, &cfg, 0.1);
        let (t2, e2) = resolve_target(&mut strategy, center, far_focus, &cfg, 0.1);
        assert_eq!(e1, BoostEdge::None);
        assert_eq!(e2, BoostEdge::None);
        assert!((gloam_core::types::planar_distance(t1, center) - 10.0).abs() < 1e-3);
        assert_ne!(t1, t2, "the orbit point should advance");
    }

    #[test]
    fn test_guard_triggers_on_close_focus() {
        let cfg = GuardConfig::default();
        let center = Vec3::new(100.0, 0.0, 100.0);
        let mut strategy = TargetStrategy::Guard {
            center,
            radius: 10.0,
            trigger_dist: 8.0,
            orbit_phase: 0.0,
            alert_remaining: 0.0,
        };
        let close_focus = center + Vec3::new(5.0, 0.0, 0.0);
        let (target, edge) = resolve_target(&mut strategy, center, close_focus, &cfg, 0.016);
        assert_eq!(edge, BoostEdge::Started);
        assert_eq!(target, close_focus, "triggered guards pursue the focus");

        // Alert holds for the configured duration, then ends.
        let (_, edge) = resolve_target(&mut strategy, center, close_focus, &cfg, cfg.chase_secs * 0.5);
        assert_eq!(edge, BoostEdge::None);
        let (_, edge) = resolve_target(&mut strategy, center, close_focus, &cfg, cfg.chase_secs);
        assert_eq!(edge, BoostEdge::Ended);
    }
}
