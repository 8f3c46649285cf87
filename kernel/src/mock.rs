//! `MockBuilding`: deterministic probe with a hidden threshold.
//!
//! The building answers `floor <= threshold` and counts every answered drop.
//! How it treats floors outside `[1, number_floors]` is selected with
//! [`RangePolicy`]:
//!
//! | Policy     | Floor outside range          | Counted |
//! |------------|------------------------------|---------|
//! | `Strict`   | `Err(FloorOutOfRange)`       | no      |
//! | `Tolerant` | `Ok(floor <= threshold)`     | yes     |
//!
//! Neither search strategy probes outside the range, so both policies give
//! identical results for them. `Tolerant` exists for callers whose bracket
//! arithmetic touches floor 0 or `number_floors + 1`.

use crate::error::ProbeError;
use crate::probe::{DropCount, Floor, Probe};

/// How a [`MockBuilding`] handles floors outside `[1, number_floors]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Reject with [`ProbeError::FloorOutOfRange`]; the drop is not counted.
    #[default]
    Strict,
    /// Evaluate `floor <= threshold` anyway and count the drop.
    Tolerant,
}

/// A building whose highest safe floor is known only to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockBuilding {
    number_floors: Floor,
    highest_safe_floor: Floor,
    drops: DropCount,
    range_policy: RangePolicy,
}

impl MockBuilding {
    /// Build a strict building with `number_floors` floors and the given
    /// highest safe floor.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::ThresholdOutOfRange`] if
    /// `highest_safe_floor > number_floors`.
    pub fn new(number_floors: Floor, highest_safe_floor: Floor) -> Result<Self, ProbeError> {
        Self::with_policy(number_floors, highest_safe_floor, RangePolicy::Strict)
    }

    /// Build a building with an explicit out-of-range policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::ThresholdOutOfRange`] if
    /// `highest_safe_floor > number_floors`.
    pub fn with_policy(
        number_floors: Floor,
        highest_safe_floor: Floor,
        range_policy: RangePolicy,
    ) -> Result<Self, ProbeError> {
        if highest_safe_floor > number_floors {
            return Err(ProbeError::ThresholdOutOfRange {
                threshold: highest_safe_floor,
                number_floors,
            });
        }
        Ok(Self {
            number_floors,
            highest_safe_floor,
            drops: 0,
            range_policy,
        })
    }

    /// The configured out-of-range policy.
    #[must_use]
    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }
}

impl Probe for MockBuilding {
    fn number_floors(&self) -> Floor {
        self.number_floors
    }

    fn drop_count(&self) -> DropCount {
        self.drops
    }

    fn test(&mut self, floor: Floor) -> Result<bool, ProbeError> {
        let in_range = (1..=self.number_floors).contains(&floor);
        if !in_range && self.range_policy == RangePolicy::Strict {
            return Err(ProbeError::FloorOutOfRange {
                floor,
                number_floors: self.number_floors,
            });
        }
        let survived = floor <= self.highest_safe_floor;
        self.drops += 1;
        tracing::trace!(floor, survived, drops = self.drops, "marble dropped");
        Ok(survived)
    }

    fn reset(&mut self) {
        self.drops = 0;
    }
}
