//! Suite report: per-scenario records, summary, JSON bytes and digest.
//!
//! The JSON form is deterministic: records keep scenario order and struct
//! fields serialize in declaration order, so the same suite always produces
//! the same bytes. The digest is SHA-256 over a null-terminated domain prefix
//! followed by those bytes, rendered as `sha256:<hex>`.

use std::fmt::Write as _;

use serde::Serialize;
use sha2::{Digest, Sha256};

use marble_kernel::probe::Floor;

use crate::runner::ScenarioRecord;

/// Domain prefix for report digests.
pub const DOMAIN_SUITE_REPORT: &[u8] = b"MARBLE::SUITE_REPORT::V1\0";

/// Aggregate counts over a suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// `(N, H)` of every scenario where adaptive used more drops than linear.
    pub adaptive_worse: Vec<(Floor, Floor)>,
}

/// Everything a suite run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub records: Vec<ScenarioRecord>,
    pub summary: Summary,
}

impl SuiteReport {
    /// Summarize records in the order they ran.
    #[must_use]
    pub fn from_records(records: Vec<ScenarioRecord>) -> Self {
        let passed = records.iter().filter(|r| r.passed()).count();
        let adaptive_worse = records
            .iter()
            .filter(|r| r.result.is_some_and(|res| !res.linear_at_least_adaptive))
            .map(|r| (r.number_floors, r.threshold))
            .collect();
        let summary = Summary {
            total: records.len(),
            passed,
            failed: records.len() - passed,
            adaptive_worse,
        };
        Self { records, summary }
    }

    /// True iff no scenario failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.summary.failed == 0
    }

    /// The failing records, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioRecord> {
        self.records.iter().filter(|r| !r.passed())
    }

    /// Compact JSON bytes of the whole report.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// `sha256:<hex>` of the domain prefix followed by [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SUITE_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    /// One line per scenario followed by a summary line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            let status = if record.passed() { "ok  " } else { "FAIL" };
            let _ = write!(
                out,
                "{status} floors={} threshold={}",
                record.number_floors, record.threshold
            );
            if let Some(result) = record.result {
                let _ = write!(
                    out,
                    " found={} linear={} adaptive={} linear>=adaptive={}",
                    result.threshold,
                    result.drops_linear,
                    result.drops_adaptive,
                    result.linear_at_least_adaptive
                );
            }
            if let Some(failure) = &record.failure {
                let _ = write!(out, " error=\"{failure}\"");
            }
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "total={} passed={} failed={} adaptive_worse={}",
            self.summary.total,
            self.summary.passed,
            self.summary.failed,
            self.summary.adaptive_worse.len()
        );
        out
    }
}
