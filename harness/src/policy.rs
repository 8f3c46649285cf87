//! Verifier policy: which scenarios run and which checks apply.
//!
//! The default policy is the standard suite: the reference table, the sweep
//! over every building up to 100 floors, drop-count property checks on, and
//! strict buildings. `validate()` rejects policies that would run nothing or
//! sweep more than [`MAX_SWEEP_FLOORS`] floors.

use std::collections::BTreeSet;

use marble_kernel::mock::RangePolicy;
use marble_kernel::probe::Floor;

use crate::scenario::{reference_scenarios, sweep_scenarios, Scenario};

/// Default sweep bound.
pub const DEFAULT_SWEEP_FLOORS: Floor = 100;

/// Hard cap on the sweep bound. The sweep is cubic in this value.
pub const MAX_SWEEP_FLOORS: Floor = 1000;

/// Suite configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierPolicy {
    /// Largest building in the sweep.
    pub max_floors: Floor,
    /// Run the pinned reference table.
    pub include_reference: bool,
    /// Run the `(N, H)` sweep up to `max_floors`.
    pub include_sweep: bool,
    /// Check linear drops against the closed form and adaptive drops
    /// against `ceil(log2(N + 1)) + 1`.
    pub check_drop_bounds: bool,
    /// Stop the suite at the first failing scenario.
    pub fail_fast: bool,
    /// Out-of-range handling for the buildings the verifier constructs.
    pub range_policy: RangePolicy,
}

impl Default for VerifierPolicy {
    fn default() -> Self {
        Self {
            max_floors: DEFAULT_SWEEP_FLOORS,
            include_reference: true,
            include_sweep: true,
            check_drop_bounds: true,
            fail_fast: false,
            range_policy: RangePolicy::Strict,
        }
    }
}

/// Rejected policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("sweep bound {requested} exceeds maximum {max}")]
    SweepTooLarge { requested: Floor, max: Floor },

    #[error("policy selects no scenarios: enable the reference table or the sweep")]
    NoScenarioSource,
}

impl VerifierPolicy {
    /// Check the policy before any scenario runs.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::NoScenarioSource`] if both scenario sources are
    /// disabled, and [`PolicyError::SweepTooLarge`] if the sweep is enabled
    /// with `max_floors > MAX_SWEEP_FLOORS`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.include_reference && !self.include_sweep {
            return Err(PolicyError::NoScenarioSource);
        }
        if self.include_sweep && self.max_floors > MAX_SWEEP_FLOORS {
            return Err(PolicyError::SweepTooLarge {
                requested: self.max_floors,
                max: MAX_SWEEP_FLOORS,
            });
        }
        Ok(())
    }

    /// The scenarios this policy selects: reference rows first, then the sweep.
    ///
    /// Each `(N, H)` pair appears once. Sweep pairs already covered by a
    /// reference row are skipped, so the pinned version is the one that runs.
    #[must_use]
    pub fn scenarios(&self) -> Vec<Scenario> {
        let mut scenarios = Vec::new();
        if self.include_reference {
            scenarios.extend(reference_scenarios());
        }
        if self.include_sweep {
            let pinned: BTreeSet<(Floor, Floor)> = scenarios
                .iter()
                .map(|s| (s.number_floors, s.threshold))
                .collect();
            scenarios.extend(
                sweep_scenarios(self.max_floors)
                    .filter(|s| !pinned.contains(&(s.number_floors, s.threshold))),
            );
        }
        scenarios
    }
}
