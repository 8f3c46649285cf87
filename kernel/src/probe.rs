//! The probe contract consumed by every search strategy.

use crate::error::ProbeError;

/// A floor number. Valid probe points are `1..=number_floors`.
pub type Floor = u32;

/// Number of `test()` calls a probe has served since its last reset.
pub type DropCount = u64;

/// A building that can be probed floor by floor.
///
/// # Contract
///
/// - For every floor `f` in `[1, number_floors()]`, `test(f)` returns
///   `Ok(true)` iff `f <= threshold`, where the threshold is hidden, fixed at
///   construction and never larger than `number_floors()`.
/// - Every successful `test()` call increments `drop_count()` by exactly one,
///   whatever the outcome.
/// - `reset()` sets `drop_count()` to zero and changes nothing else.
///
/// Search algorithms rely on this monotonicity; their results are undefined
/// for a probe that violates it.
pub trait Probe {
    /// Number of floors in the building.
    fn number_floors(&self) -> Floor;

    /// Drops performed since construction or the last [`Probe::reset`].
    fn drop_count(&self) -> DropCount;

    /// Drop a marble from `floor`. Returns whether it survived.
    ///
    /// # Errors
    ///
    /// Implementations may return [`ProbeError::FloorOutOfRange`] when
    /// `floor` is outside `[1, number_floors()]`. Each implementation must
    /// document whether it rejects or tolerates such floors.
    fn test(&mut self, floor: Floor) -> Result<bool, ProbeError>;

    /// Zero the drop counter.
    fn reset(&mut self);
}

impl<P: Probe + ?Sized> Probe for &mut P {
    fn number_floors(&self) -> Floor {
        (**self).number_floors()
    }

    fn drop_count(&self) -> DropCount {
        (**self).drop_count()
    }

    fn test(&mut self, floor: Floor) -> Result<bool, ProbeError> {
        (**self).test(floor)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
