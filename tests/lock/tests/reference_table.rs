//! Reference table lock tests.
//!
//! Every pinned row must reproduce its literal `(threshold, drops_linear,
//! drops_adaptive)` triple and its recorded `linear >= adaptive` flag,
//! both through `run_scenario()` directly and through the suite runner.

use marble_harness::policy::VerifierPolicy;
use marble_harness::runner::run_suite;
use marble_harness::scenario::reference_scenarios;
use marble_harness::verifier::{run_scenario, ScenarioResult};

#[test]
fn empty_building() {
    assert_eq!(run_scenario(0, 0).unwrap(), ScenarioResult::new(0, 0, 0));
}

#[test]
fn three_floors_ground_threshold_adaptive_strictly_worse() {
    let result = run_scenario(3, 0).unwrap();
    assert_eq!(result, ScenarioResult::new(0, 1, 2));
    assert!(!result.linear_at_least_adaptive);
}

#[test]
fn four_floors_threshold_three() {
    assert_eq!(run_scenario(4, 3).unwrap(), ScenarioResult::new(3, 4, 3));
}

#[test]
fn hundred_floors_threshold_seventy_three() {
    let result = run_scenario(100, 73).unwrap();
    assert_eq!(result, ScenarioResult::new(73, 74, 7));
    assert!(result.linear_at_least_adaptive);
}

#[test]
fn every_reference_row_reproduces() {
    for scenario in reference_scenarios() {
        let expected = scenario.expected.expect("reference rows are pinned");
        let actual = run_scenario(scenario.number_floors, scenario.threshold).unwrap();
        assert_eq!(
            actual, expected,
            "row ({}, {})",
            scenario.number_floors, scenario.threshold
        );
    }
}

#[test]
fn reference_suite_passes_and_records_exceptions() {
    let report = run_suite(&reference_scenarios(), &VerifierPolicy::default());
    assert!(report.is_success());
    assert_eq!(report.summary.passed, 16);
    assert_eq!(report.summary.adaptive_worse, vec![(3, 0), (4, 0)]);
}
