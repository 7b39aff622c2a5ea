//! Tests for core types, the exposure entry point, and config defaults.

use glam::Vec3;

use crate::components::Exposure;
use crate::config::SimConfig;
use crate::types::{planar_distance, smoothstep, wrap_angle, yaw_to_dir};

// ---- Geometry helpers ----

#[test]
fn test_planar_distance_ignores_altitude() {
    let a = Vec3::new(0.0, 100.0, 0.0);
    let b = Vec3::new(3.0, -50.0, 4.0);
    assert!((planar_distance(a, b) - 5.0).abs() < 1e-6);
}

#[test]
fn test_wrap_angle_range() {
    use std::f32::consts::PI;
    assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
    assert!((wrap_angle(-0.1) + 0.1).abs() < 1e-6);
    assert!((wrap_angle(2.0 * PI)).abs() < 1e-5);
    for k in -8..8 {
        let a = 0.7 + k as f32 * std::f32::consts::TAU;
        assert!((wrap_angle(a) - 0.7).abs() < 1e-3);
    }
}

#[test]
fn test_yaw_dir_roundtrip() {
    let dir = yaw_to_dir(0.0);
    assert!((dir - Vec3::Z).length() < 1e-6, "yaw 0 should face +z");
    let dir = yaw_to_dir(std::f32::consts::FRAC_PI_2);
    assert!((dir - Vec3::X).length() < 1e-6, "yaw PI/2 should face +x");
}

#[test]
fn test_smoothstep_endpoints() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
}

// ---- Exposure entry point ----

#[test]
fn test_exposure_saturation_fires_once() {
    let mut exp = Exposure::default();
    assert!(!exp.apply(0.6));
    assert!(exp.apply(0.6), "crossing 1.0 should report the transition");
    assert_eq!(exp.value(), 1.0);
    assert!(
        !exp.apply(0.5),
        "already-saturated exposure must not re-trigger"
    );
    assert_eq!(exp.value(), 1.0, "exposure never exceeds 1.0");
}

#[test]
fn test_exposure_decay_floors_at_zero() {
    let mut exp = Exposure::default();
    exp.apply(0.3);
    exp.decay(0.1); // consumes the lit flag, no decay this pass
    assert!((exp.value() - 0.3).abs() < 1e-6);
    exp.decay(0.1);
    assert!((exp.value() - 0.2).abs() < 1e-6);
    exp.decay(10.0);
    assert_eq!(exp.value(), 0.0);
}

#[test]
fn test_exposure_lit_suppresses_one_decay_pass() {
    let mut exp = Exposure::default();
    exp.apply(0.5);
    assert!(exp.is_lit());
    exp.decay(0.2);
    assert!(!exp.is_lit());
    assert!((exp.value() - 0.5).abs() < 1e-6, "lit tick must not decay");
}

// ---- Config ----

#[test]
fn test_default_config_is_coherent() {
    let cfg = SimConfig::default();
    assert!(cfg.spawner.pool_size >= cfg.spawner.max_alive);
    assert!(cfg.spawner.min_radius < cfg.spawner.max_radius);
    assert!(cfg.beam.overheat_lo < cfg.beam.overheat_hi);
    assert!(cfg.motion.swoop.near_band < cfg.motion.swoop.far_band);
    assert!(cfg.motion.swoop.low_alt < cfg.motion.swoop.high_alt);
    let weights: f32 = cfg.spawner.sector_weights.iter().sum();
    assert!(weights > 0.0);
}

#[test]
fn test_config_roundtrips_through_json() {
    let cfg = SimConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: SimConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seed, cfg.seed);
    assert_eq!(back.spawner.max_alive, cfg.spawner.max_alive);
}
