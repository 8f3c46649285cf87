//! Scenario verifier: linear baseline vs adaptive search on one probe.

use serde::Serialize;

use marble_kernel::error::ProbeError;
use marble_kernel::mock::{MockBuilding, RangePolicy};
use marble_kernel::probe::{DropCount, Floor, Probe};
use marble_search::strategy::SearchStrategy;

/// Outcome of one verified scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioResult {
    /// Threshold both strategies agreed on.
    pub threshold: Floor,
    /// Drops spent by the linear baseline.
    pub drops_linear: DropCount,
    /// Drops spent by the adaptive search.
    pub drops_adaptive: DropCount,
    /// `drops_linear >= drops_adaptive`. Recorded, never enforced.
    pub linear_at_least_adaptive: bool,
}

impl ScenarioResult {
    /// Build a result, deriving the comparison flag from the drop counts.
    #[must_use]
    pub const fn new(threshold: Floor, drops_linear: DropCount, drops_adaptive: DropCount) -> Self {
        Self {
            threshold,
            drops_linear,
            drops_adaptive,
            linear_at_least_adaptive: drops_linear >= drops_adaptive,
        }
    }
}

/// Failure while verifying a scenario.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// The probe rejected a drop or could not be constructed.
    #[error("probe failure: {0}")]
    Probe(#[from] ProbeError),

    /// The strategies disagree. Either one of them is wrong or the probe
    /// broke its monotonic contract.
    #[error(
        "threshold mismatch on {number_floors} floors: linear found {linear}, adaptive found {adaptive}"
    )]
    ThresholdMismatch {
        number_floors: Floor,
        linear: Floor,
        adaptive: Floor,
    },

    /// The scenario did not reproduce its literal expected outcome.
    #[error("scenario ({number_floors}, {threshold}): expected {expected:?}, got {actual:?}")]
    ExpectationMismatch {
        number_floors: Floor,
        threshold: Floor,
        expected: ScenarioResult,
        actual: ScenarioResult,
    },

    /// The linear baseline spent a different number of drops than its
    /// closed form predicts.
    #[error(
        "linear search on ({number_floors}, {threshold}) took {actual} drops, expected {expected}"
    )]
    LinearDropCountMismatch {
        number_floors: Floor,
        threshold: Floor,
        expected: DropCount,
        actual: DropCount,
    },

    /// The adaptive search exceeded `ceil(log2(N + 1)) + 1` drops.
    #[error("adaptive search on {number_floors} floors took {drops} drops, bound is {bound}")]
    DropBoundExceeded {
        number_floors: Floor,
        drops: DropCount,
        bound: DropCount,
    },
}

/// Verify one `(number_floors, threshold)` scenario on a strict building.
///
/// # Errors
///
/// Returns [`VerifyError::ThresholdMismatch`] if the strategies disagree and
/// [`VerifyError::Probe`] if the building cannot be built or rejects a drop.
pub fn run_scenario(number_floors: Floor, threshold: Floor) -> Result<ScenarioResult, VerifyError> {
    run_scenario_with_policy(number_floors, threshold, RangePolicy::Strict)
}

/// [`run_scenario`] with an explicit out-of-range policy for the building.
///
/// # Errors
///
/// Same as [`run_scenario`].
pub fn run_scenario_with_policy(
    number_floors: Floor,
    threshold: Floor,
    range_policy: RangePolicy,
) -> Result<ScenarioResult, VerifyError> {
    let mut building = MockBuilding::with_policy(number_floors, threshold, range_policy)?;
    verify_probe(&mut building)
}

/// Run linear, reset, run adaptive on a caller-supplied probe and compare.
///
/// Drops are measured as counter deltas, so the probe does not need to be
/// fresh. It is reset between the two runs and left holding the adaptive
/// run's drops.
///
/// # Errors
///
/// Returns [`VerifyError::ThresholdMismatch`] if the strategies disagree and
/// [`VerifyError::Probe`] if the probe rejects a drop.
pub fn verify_probe<P: Probe + ?Sized>(probe: &mut P) -> Result<ScenarioResult, VerifyError> {
    let number_floors = probe.number_floors();
    let linear = SearchStrategy::Linear.run_measured(probe)?;
    probe.reset();
    let adaptive = SearchStrategy::Adaptive.run_measured(probe)?;

    if linear.threshold != adaptive.threshold {
        tracing::error!(
            number_floors,
            linear = linear.threshold,
            adaptive = adaptive.threshold,
            "strategies disagree on threshold"
        );
        return Err(VerifyError::ThresholdMismatch {
            number_floors,
            linear: linear.threshold,
            adaptive: adaptive.threshold,
        });
    }

    let result = ScenarioResult::new(linear.threshold, linear.drops, adaptive.drops);
    if !result.linear_at_least_adaptive {
        tracing::debug!(
            number_floors,
            threshold = result.threshold,
            drops_linear = result.drops_linear,
            drops_adaptive = result.drops_adaptive,
            "adaptive search used more drops than linear"
        );
    }
    Ok(result)
}
