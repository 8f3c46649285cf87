//! Strategy selection and drop measurement.

use marble_kernel::error::ProbeError;
use marble_kernel::probe::{DropCount, Floor, Probe};

use crate::adaptive::adaptive_search;
use crate::linear::linear_search;

/// The available threshold search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Floors 1, 2, 3, ... until one breaks.
    Linear,
    /// Shrinking bracket, midpoint rounded down.
    Adaptive,
}

/// What one strategy run found and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub threshold: Floor,
    pub drops: DropCount,
}

impl SearchStrategy {
    /// Every strategy, baseline first.
    pub const ALL: [SearchStrategy; 2] = [Self::Linear, Self::Adaptive];

    /// Stable lowercase name used in logs and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Adaptive => "adaptive",
        }
    }

    /// Run the strategy and return the threshold it found.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProbeError`] raised by the probe.
    pub fn run<P: Probe + ?Sized>(self, probe: &mut P) -> Result<Floor, ProbeError> {
        match self {
            Self::Linear => linear_search(probe),
            Self::Adaptive => adaptive_search(probe),
        }
    }

    /// Run the strategy and report the drops it added to the probe's counter.
    ///
    /// The counter is not reset first; callers that compare strategies reset
    /// the probe between runs.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProbeError`] raised by the probe.
    pub fn run_measured<P: Probe + ?Sized>(self, probe: &mut P) -> Result<SearchOutcome, ProbeError> {
        let before = probe.drop_count();
        let threshold = self.run(probe)?;
        let drops = probe.drop_count().saturating_sub(before);
        tracing::debug!(strategy = self.name(), threshold, drops, "strategy run");
        Ok(SearchOutcome { threshold, drops })
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
