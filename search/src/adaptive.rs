//! Adaptive (binary) search over a shrinking bracket.
//!
//! The bracket `(max_true, min_false)` holds the highest floor known to be
//! safe and the lowest floor known to break. It starts at
//! `(0, number_floors + 1)` and every drop lands strictly between the two
//! ends, so its width shrinks on every iteration until it reaches 1. At that
//! point `max_true` is the threshold.
//!
//! # Tie-break
//!
//! The probe floor is `(max_true + min_false) / 2` with floor division: on an
//! even span the lower of the two middle floors is probed. Exact drop counts
//! for a given `(number_floors, threshold)` depend on this rule.

use marble_kernel::error::ProbeError;
use marble_kernel::probe::{Floor, Probe};

/// Working interval of the adaptive search.
///
/// Invariant: `max_true < min_false`. Bounds are kept in `u64` on the
/// breaking side so `number_floors + 1` never overflows a [`Floor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    max_true: Floor,
    min_false: u64,
}

impl Bracket {
    /// The initial bracket for a building: nothing known yet.
    #[must_use]
    pub fn new(number_floors: Floor) -> Self {
        Self {
            max_true: 0,
            min_false: u64::from(number_floors) + 1,
        }
    }

    /// Highest floor known to be safe.
    #[must_use]
    pub fn max_true(&self) -> Floor {
        self.max_true
    }

    /// Lowest floor known to break (`number_floors + 1` until one breaks).
    #[must_use]
    pub fn min_false(&self) -> u64 {
        self.min_false
    }

    /// `min_false - max_true`.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.min_false - u64::from(self.max_true)
    }

    /// True once no floor lies strictly between the two ends.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.width() <= 1
    }

    /// The next floor to probe, rounding down on even spans.
    ///
    /// Returns `None` once the bracket is resolved.
    #[must_use]
    pub fn midpoint(&self) -> Option<Floor> {
        if self.is_resolved() {
            return None;
        }
        // max_true < mid < min_false <= number_floors + 1, so mid fits a Floor.
        let mid = (u64::from(self.max_true) + self.min_false) / 2;
        Floor::try_from(mid).ok()
    }

    /// True if `floor` lies strictly between the two ends.
    #[must_use]
    pub fn contains(&self, floor: Floor) -> bool {
        floor > self.max_true && u64::from(floor) < self.min_false
    }

    /// Fold one observation into the bracket.
    ///
    /// Returns `false` and leaves the bracket untouched if `floor` is not
    /// strictly inside it; such an observation carries no information and
    /// would break `max_true < min_false`.
    #[must_use]
    pub fn narrow(&mut self, floor: Floor, survived: bool) -> bool {
        if !self.contains(floor) {
            return false;
        }
        if survived {
            self.max_true = floor;
        } else {
            self.min_false = u64::from(floor);
        }
        true
    }
}

/// Find the highest safe floor with a shrinking bracket.
///
/// Buildings with zero or one floor are answered directly: no drop for an
/// empty building and a single drop at floor 1 for a one-floor building.
/// Every other building runs the bracket loop, which needs at most
/// `ceil(log2(number_floors + 1))` drops.
///
/// This is NOT uniformly cheaper than [`crate::linear::linear_search`]: when
/// the threshold is 0 or very low, the bracket has to walk its breaking end
/// down from the middle while the linear scan stops after one or two drops.
///
/// # Errors
///
/// Propagates any [`ProbeError`] raised by the probe.
pub fn adaptive_search<P: Probe + ?Sized>(probe: &mut P) -> Result<Floor, ProbeError> {
    let number_floors = probe.number_floors();
    if number_floors == 0 {
        return Ok(0);
    }
    if number_floors == 1 {
        return Ok(Floor::from(probe.test(1)?));
    }

    let mut bracket = Bracket::new(number_floors);
    while let Some(floor) = bracket.midpoint() {
        let survived = probe.test(floor)?;
        let narrowed = bracket.narrow(floor, survived);
        debug_assert!(narrowed, "midpoint {floor} outside open bracket");
        tracing::trace!(
            floor,
            survived,
            max_true = bracket.max_true(),
            min_false = bracket.min_false(),
            "bracket narrowed"
        );
    }

    tracing::debug!(
        number_floors,
        threshold = bracket.max_true(),
        drops = probe.drop_count(),
        "adaptive search finished"
    );
    Ok(bracket.max_true())
}
