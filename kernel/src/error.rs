//! Typed probe errors.

use crate::probe::Floor;

/// Failure raised by a [`crate::probe::Probe`] or while constructing one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// `test()` was called with a floor outside `[1, number_floors]` on a
    /// probe that rejects such calls. The drop is not counted.
    #[error("floor {floor} is outside [1, {number_floors}]")]
    FloorOutOfRange { floor: Floor, number_floors: Floor },

    /// A building was configured with a threshold above its top floor.
    #[error("threshold {threshold} exceeds number of floors {number_floors}")]
    ThresholdOutOfRange { threshold: Floor, number_floors: Floor },
}
