//! Baseline linear search.

use marble_kernel::error::ProbeError;
use marble_kernel::probe::{Floor, Probe};

/// Find the highest safe floor by dropping from floor 1 upward.
///
/// Stops at the first broken marble or after the top floor. Returns the last
/// floor that survived, or 0 if none did (including `number_floors == 0`).
///
/// Drop count is `threshold + 1` when `threshold < number_floors`, otherwise
/// `number_floors`. Never probes outside `[1, number_floors]`.
///
/// # Errors
///
/// Propagates any [`ProbeError`] raised by the probe.
pub fn linear_search<P: Probe + ?Sized>(probe: &mut P) -> Result<Floor, ProbeError> {
    let number_floors = probe.number_floors();
    let mut highest_safe = 0;
    for floor in 1..=number_floors {
        if !probe.test(floor)? {
            break;
        }
        highest_safe = floor;
    }
    tracing::debug!(
        number_floors,
        threshold = highest_safe,
        drops = probe.drop_count(),
        "linear search finished"
    );
    Ok(highest_safe)
}
