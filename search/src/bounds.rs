//! Closed-form drop counts for each strategy.

use marble_kernel::probe::{DropCount, Floor};

/// `ceil(log2(x))` for `x >= 1`; 0 for `x <= 1`.
#[must_use]
pub fn ceil_log2(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        u64::BITS - (x - 1).leading_zeros()
    }
}

/// Exact number of drops [`crate::linear::linear_search`] performs.
///
/// `threshold + 1` while a breaking floor exists above the threshold,
/// otherwise every floor is dropped from once.
#[must_use]
pub fn linear_drop_count(number_floors: Floor, threshold: Floor) -> DropCount {
    if threshold < number_floors {
        DropCount::from(threshold) + 1
    } else {
        DropCount::from(number_floors)
    }
}

/// Upper bound on the drops [`crate::adaptive::adaptive_search`] performs:
/// `ceil(log2(number_floors + 1)) + 1`, or 0 for an empty building.
#[must_use]
pub fn adaptive_drop_bound(number_floors: Floor) -> DropCount {
    if number_floors == 0 {
        return 0;
    }
    DropCount::from(ceil_log2(u64::from(number_floors) + 1)) + 1
}
