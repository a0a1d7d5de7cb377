//! Integration test: reference copper scenario relaxing toward equilibrium.
//!
//! Checks the concrete reference values for step 0, then the physical
//! properties of the whole run: exact energy conservation, monotone decay
//! of the temperature difference, non-negative entropy production, the
//! period bound, and determinism.

use hf_core::{Tolerances, nearly_equal};
use hf_sim::{Scenario, run_collect};

#[test]
fn reference_run_step_zero_values() {
    let scenario = Scenario::default();
    let (records, _) = run_collect(&scenario).expect("reference scenario must run");

    let first = &records[0];
    assert_eq!(first.time, 0);
    assert_eq!(first.hot_temp_k, 1000.0);
    assert_eq!(first.cold_temp_k, 300.0);
    assert_eq!(first.temp_diff_k, 700.0);
    assert_eq!(first.heat_flow_j, 1400.0);
    assert_eq!(first.cum_heat_flow_j, 1400.0);
}

#[test]
fn reference_run_relaxes_geometrically() {
    // Per step the difference shrinks by the factor 1 - G*(1/C_hot + 1/C_cold)
    // with G = 2 W/K, C_hot = 100 J/K, C_cold = 600 J/K.
    let shrink = 1.0 - 2.0 * (1.0 / 100.0 + 1.0 / 600.0);

    let (records, _) = run_collect(&Scenario::default()).unwrap();
    assert!((records[1].temp_diff_k - 700.0 * shrink).abs() < 1e-9);
    assert!((records[2].temp_diff_k - 700.0 * shrink * shrink).abs() < 1e-9);
}

#[test]
fn reference_run_executes_all_periods() {
    let scenario = Scenario::default();
    let (records, summary) = run_collect(&scenario).unwrap();

    // 201 periods are not enough to reach equilibrium for these parameters.
    assert_eq!(records.len(), 201);
    assert_eq!(summary.steps_executed, 201);
    assert!(!summary.equilibrium_reached);
    assert!(summary.final_hot_temp_k > summary.final_cold_temp_k);
}

#[test]
fn energy_is_conserved_across_the_run() {
    let scenario = Scenario::default();
    let total_initial = scenario.hot.energy_j + scenario.cold.energy_j;

    let (records, summary) = run_collect(&scenario).unwrap();

    // The running sum of flows equals the energy drained from the hot side.
    let tol = Tolerances::default();
    let summed: f64 = records.iter().map(|r| r.heat_flow_j).sum();
    assert!(nearly_equal(summed, summary.cum_heat_flow_j, tol));

    let final_hot = scenario.hot.energy_j - summary.cum_heat_flow_j;
    let final_cold = scenario.cold.energy_j + summary.cum_heat_flow_j;
    assert!(nearly_equal(final_hot + final_cold, total_initial, tol));
}

#[test]
fn temperature_difference_is_monotone_non_increasing() {
    let (records, _) = run_collect(&Scenario::default()).unwrap();
    for pair in records.windows(2) {
        assert!(pair[1].temp_diff_k <= pair[0].temp_diff_k);
        assert!(pair[1].temp_diff_k > 0.0);
    }
}

#[test]
fn entropy_production_is_non_negative() {
    let (records, summary) = run_collect(&Scenario::default()).unwrap();
    for record in &records {
        assert!(
            record.entropy_change_j_per_k >= 0.0,
            "entropy production must not be negative at step {}",
            record.time
        );
    }
    assert!(summary.cum_entropy_change_j_per_k > 0.0);
}

#[test]
fn identical_scenarios_produce_identical_records() {
    let scenario = Scenario::default();
    let (a, _) = run_collect(&scenario).unwrap();
    let (b, _) = run_collect(&scenario).unwrap();
    assert_eq!(a, b);
}

#[test]
fn equilibrium_terminates_the_run_early() {
    // Iron bar sized so one step transfers exactly enough to equalize:
    // G = 80*1/80 = 1 W/K, both heat capacities 2 J/K, so the per-step
    // shrink factor is zero.
    let yaml = "
periods: 100
conductor:
  material: iron
  area_m2: 1.0
  length_m: 80.0
hot:
  volume_m3: 2.0
  specific_heat_j_per_m3_k: 1.0
  energy_j: 800.0
cold:
  volume_m3: 2.0
  specific_heat_j_per_m3_k: 1.0
  energy_j: 600.0
";
    let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
    let (records, summary) = run_collect(&scenario).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].heat_flow_j, 100.0);
    assert!(summary.equilibrium_reached);
    assert_eq!(summary.steps_executed, 1);
    assert!((summary.final_hot_temp_k - summary.final_cold_temp_k).abs() < 1e-12);
}
