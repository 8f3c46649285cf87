//! Marble Search: threshold search strategies over a [`Probe`].
//!
//! This crate depends only on `marble_kernel` — it does NOT depend on
//! `marble_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! marble_kernel  ←  marble_search  ←  marble_harness
//! (probe, mock)     (strategies)       (scenarios, verifier, report)
//! ```
//!
//! # Key items
//!
//! - [`linear::linear_search`] — baseline, probes floors 1, 2, 3, ...
//! - [`adaptive::adaptive_search`] — shrinking bracket (binary search)
//! - [`adaptive::Bracket`] — the `(max_true, min_false)` working interval
//! - [`strategy::SearchStrategy`] — runs either strategy and measures drops
//! - [`bounds`] — closed-form drop counts used by the verifier
//!
//! [`Probe`]: marble_kernel::probe::Probe

#![forbid(unsafe_code)]

pub mod adaptive;
pub mod bounds;
pub mod linear;
pub mod strategy;
