//! Marble Harness: cross-checks the search strategies against each other.
//!
//! The harness builds a probe per scenario, runs the linear baseline and the
//! adaptive search against it (resetting in between), and asserts that both
//! report the same threshold. Drop counts are compared and recorded; the
//! adaptive search losing to the baseline is an observation, not a failure.
//!
//! # Pipeline
//!
//! ```text
//! VerifierPolicy::validate() → scenarios()
//!   → [run_scenario() → check expectation + drop bounds] × N
//!   → SuiteReport (summary, JSON bytes, digest)
//! ```
//!
//! The harness does NOT implement search — it delegates to `marble_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod policy;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod verifier;
