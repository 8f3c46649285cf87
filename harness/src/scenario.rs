//! Scenario constructors: the reference table and the exhaustive sweep.
//!
//! The reference table pins literal outcomes, including the rows where the
//! adaptive search spends more drops than the linear baseline. The sweep
//! covers every `(N, H)` pair up to a bound and carries no literal outcome;
//! those rows are checked only for agreement and drop-count bounds.

use serde::Serialize;

use marble_kernel::probe::{DropCount, Floor};

use crate::verifier::ScenarioResult;

/// One `(number_floors, threshold)` configuration to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub number_floors: Floor,
    pub threshold: Floor,
    /// Literal outcome the scenario must reproduce, if pinned.
    pub expected: Option<ScenarioResult>,
}

impl Scenario {
    /// A scenario with no pinned outcome.
    #[must_use]
    pub const fn new(number_floors: Floor, threshold: Floor) -> Self {
        Self {
            number_floors,
            threshold,
            expected: None,
        }
    }

    /// Pin the literal outcome of this scenario.
    #[must_use]
    pub const fn expecting(self, expected: ScenarioResult) -> Self {
        Self {
            expected: Some(expected),
            ..self
        }
    }
}

/// `((N, H), (threshold, drops_linear, drops_adaptive), linear >= adaptive)`.
type ReferenceRow = ((Floor, Floor), (Floor, DropCount, DropCount), bool);

const REFERENCE_TABLE: [ReferenceRow; 16] = [
    ((0, 0), (0, 0, 0), true),
    ((1, 0), (0, 1, 1), true),
    ((1, 1), (1, 1, 1), true),
    ((2, 0), (0, 1, 1), true),
    ((2, 1), (1, 2, 2), true),
    ((2, 2), (2, 2, 2), true),
    ((3, 0), (0, 1, 2), false),
    ((3, 1), (1, 2, 2), true),
    ((3, 2), (2, 3, 2), true),
    ((3, 3), (3, 3, 2), true),
    ((4, 0), (0, 1, 2), false),
    ((4, 1), (1, 2, 2), true),
    ((4, 2), (2, 3, 2), true),
    ((4, 3), (3, 4, 3), true),
    ((4, 4), (4, 4, 3), true),
    ((100, 73), (73, 74, 7), true),
];

/// The pinned reference scenarios, in table order.
#[must_use]
pub fn reference_scenarios() -> Vec<Scenario> {
    REFERENCE_TABLE
        .iter()
        .map(|&((n, h), (threshold, linear, adaptive), better)| {
            let expected = ScenarioResult {
                threshold,
                drops_linear: linear,
                drops_adaptive: adaptive,
                linear_at_least_adaptive: better,
            };
            Scenario::new(n, h).expecting(expected)
        })
        .collect()
}

/// Every `(N, H)` with `0 <= H <= N <= max_floors`, ascending by `N` then `H`.
pub fn sweep_scenarios(max_floors: Floor) -> impl Iterator<Item = Scenario> {
    (0..=max_floors).flat_map(|n| (0..=n).map(move |h| Scenario::new(n, h)))
}
