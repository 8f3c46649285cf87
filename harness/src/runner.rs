//! Suite runner: verifies every scenario a policy selects.
//!
//! Each scenario is atomic. A failure is recorded in its
//! [`ScenarioRecord`] and logged; it never aborts the remaining scenarios
//! unless the policy asks for `fail_fast`.

use serde::Serialize;

use marble_kernel::probe::Floor;
use marble_search::bounds::{adaptive_drop_bound, linear_drop_count};

use crate::policy::{PolicyError, VerifierPolicy};
use crate::report::SuiteReport;
use crate::scenario::Scenario;
use crate::verifier::{run_scenario_with_policy, ScenarioResult, VerifyError};

/// Verdict for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioRecord {
    pub number_floors: Floor,
    pub threshold: Floor,
    /// Present whenever both strategies ran and agreed.
    pub result: Option<ScenarioResult>,
    /// Rendered [`VerifyError`] if the scenario failed.
    pub failure: Option<String>,
}

impl ScenarioRecord {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Check a result against the scenario's pinned outcome and, if enabled,
/// the closed-form drop counts.
///
/// # Errors
///
/// Returns [`VerifyError::ExpectationMismatch`],
/// [`VerifyError::LinearDropCountMismatch`] or
/// [`VerifyError::DropBoundExceeded`], checked in that order.
pub fn check_result(
    scenario: &Scenario,
    result: &ScenarioResult,
    policy: &VerifierPolicy,
) -> Result<(), VerifyError> {
    let number_floors = scenario.number_floors;
    let threshold = scenario.threshold;

    if let Some(expected) = scenario.expected {
        if expected != *result {
            return Err(VerifyError::ExpectationMismatch {
                number_floors,
                threshold,
                expected,
                actual: *result,
            });
        }
    }

    if policy.check_drop_bounds {
        let expected = linear_drop_count(number_floors, threshold);
        if result.drops_linear != expected {
            return Err(VerifyError::LinearDropCountMismatch {
                number_floors,
                threshold,
                expected,
                actual: result.drops_linear,
            });
        }
        let bound = adaptive_drop_bound(number_floors);
        if result.drops_adaptive > bound {
            return Err(VerifyError::DropBoundExceeded {
                number_floors,
                drops: result.drops_adaptive,
                bound,
            });
        }
    }

    Ok(())
}

/// Verify a single scenario under a policy.
#[must_use]
pub fn verify_scenario(scenario: &Scenario, policy: &VerifierPolicy) -> ScenarioRecord {
    let outcome = run_scenario_with_policy(
        scenario.number_floors,
        scenario.threshold,
        policy.range_policy,
    );
    let (result, failure) = match outcome {
        Ok(result) => (Some(result), check_result(scenario, &result, policy).err()),
        Err(err) => (None, Some(err)),
    };

    if let Some(err) = &failure {
        tracing::error!(
            number_floors = scenario.number_floors,
            threshold = scenario.threshold,
            error = %err,
            "scenario failed"
        );
    }

    ScenarioRecord {
        number_floors: scenario.number_floors,
        threshold: scenario.threshold,
        result,
        failure: failure.map(|e| e.to_string()),
    }
}

/// Verify scenarios in order and collect the report.
#[must_use]
pub fn run_suite(scenarios: &[Scenario], policy: &VerifierPolicy) -> SuiteReport {
    let mut records = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let record = verify_scenario(scenario, policy);
        let failed = !record.passed();
        records.push(record);
        if failed && policy.fail_fast {
            tracing::warn!(
                remaining = scenarios.len() - records.len(),
                "fail-fast: stopping suite"
            );
            break;
        }
    }

    let report = SuiteReport::from_records(records);
    tracing::info!(
        total = report.summary.total,
        passed = report.summary.passed,
        failed = report.summary.failed,
        adaptive_worse = report.summary.adaptive_worse.len(),
        "suite finished"
    );
    report
}

/// Validate a policy and run the scenarios it selects.
///
/// # Errors
///
/// Returns the [`PolicyError`] from [`VerifierPolicy::validate`]; no scenario
/// runs in that case.
pub fn run_policy(policy: &VerifierPolicy) -> Result<SuiteReport, PolicyError> {
    policy.validate()?;
    let scenarios = policy.scenarios();
    tracing::info!(scenarios = scenarios.len(), "running verification suite");
    Ok(run_suite(&scenarios, policy))
}
