//! Headless runs and determinism

use nbody_core::tests::test_helpers::approx_eq;
use nbody_core::{run_preset, SimError, SimulationConfig};

#[test]
fn test_run_preset_reports_final_state() {
    let config = SimulationConfig::default().with_trail_capacity(50);
    let result = run_preset("solar-system", 200, config).unwrap();

    assert_eq!(result.steps, 200);
    assert_eq!(result.bodies.len(), 5);
    assert!(result.bodies.iter().all(|b| b.trail_len == 50));
    // The star is the only massive body and feels no pull
    assert_eq!(result.bodies[0].velocity.length(), 0.0);
}

#[test]
fn test_run_preset_unknown_name() {
    let err = run_preset("nebula", 10, SimulationConfig::default()).unwrap_err();
    assert!(matches!(err, SimError::UnknownPreset(_)));
}

#[test]
fn test_runs_are_deterministic() {
    let a = run_preset("binary-stars", 1000, SimulationConfig::default()).unwrap();
    let b = run_preset("binary-stars", 1000, SimulationConfig::default()).unwrap();

    assert_eq!(a.bodies, b.bodies);
    assert_eq!(a.kinetic_energy, b.kinetic_energy);
}

#[test]
fn test_binary_momentum_reported_zero() {
    let result = run_preset("binary-stars", 500, SimulationConfig::default()).unwrap();
    assert!(result.momentum.length() < 1e-12);
    assert!(result.total_energy() < 0.0, "pair should stay bound");
    assert!(approx_eq(result.bodies[0].mass, 1.0, 0.0));
}
