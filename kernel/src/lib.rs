//! Marble Kernel: the probe abstraction every search runs against.
//!
//! # API Surface
//!
//! - [`probe::Probe`] -- a monotonic yes/no test with a drop counter
//! - [`mock::MockBuilding`] -- deterministic probe with a hidden threshold
//! - [`recording::RecordingProbe`] -- wrapper that keeps every observation
//!
//! # Module Dependency Direction
//!
//! `error` ← `probe` ← `mock`, `recording`
//!
//! The kernel depends on nothing internal to the workspace. Search
//! algorithms live in `marble_search`, verification in `marble_harness`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod mock;
pub mod probe;
pub mod recording;
