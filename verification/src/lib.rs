//! Verification harness for spectral-filter arithmetic networks.
//!
//! A fixed filter family `φ_k(x) = tanh(k·x)/(k+1)` is summed over k = 1..K to
//! stand in for `x1 + x2` and `x1 · x2`. This crate measures how far those
//! surrogates land from the exact operations and how sensitive they are to
//! small input perturbations, over seeded random inputs.
//!
//! # Modules
//!
//! - [`spectral`]    — filter, addition/multiplication networks, bound [`spectral::Network`]
//! - [`condition`]   — forward-difference relative condition number
//! - [`stats`]       — streaming mean/max accumulators
//! - [`experiment`]  — seeded sweep over filter counts
//! - [`report`]      — text and JSON report
//! - [`config`]      — run parameters and their validation
//! - [`error`]       — configuration/sampling errors
//!
//! # Running
//!
//! ```bash
//! cargo run --release --bin spectral-verify
//! cargo test -- --nocapture
//! ```
//!
//! Reported values are whatever the formulas produce for the given seed; they
//! are golden values, not claims about approximation quality.

pub mod condition;
pub mod config;
pub mod error;
pub mod experiment;
pub mod report;
pub mod spectral;
pub mod stats;

pub use config::{ExperimentConfig, SampleRange};
pub use error::VerificationError;
pub use experiment::{run, run_experiment};
pub use report::ExperimentReport;
