//! `RecordingProbe`: a probe wrapper that keeps the observation log.
//!
//! The log is the ordered list of `(floor, survived)` pairs the inner probe
//! answered. Rejected calls are not logged. The wrapper forwards the drop
//! counter unchanged, so it is transparent to any search strategy.

use crate::error::ProbeError;
use crate::probe::{DropCount, Floor, Probe};

/// One answered drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub floor: Floor,
    pub survived: bool,
}

/// Wraps a probe and records every answered drop.
#[derive(Debug, Clone)]
pub struct RecordingProbe<P> {
    inner: P,
    log: Vec<Observation>,
}

impl<P: Probe> RecordingProbe<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Observations since construction or the last reset, in drop order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.log
    }

    /// Just the floors, in drop order.
    #[must_use]
    pub fn floors(&self) -> Vec<Floor> {
        self.log.iter().map(|o| o.floor).collect()
    }

    /// Unwrap the inner probe, discarding the log.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Probe> Probe for RecordingProbe<P> {
    fn number_floors(&self) -> Floor {
        self.inner.number_floors()
    }

    fn drop_count(&self) -> DropCount {
        self.inner.drop_count()
    }

    fn test(&mut self, floor: Floor) -> Result<bool, ProbeError> {
        let survived = self.inner.test(floor)?;
        self.log.push(Observation { floor, survived });
        Ok(survived)
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.log.clear();
    }
}
