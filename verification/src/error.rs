//! Error type for configuration and sampling failures.
//!
//! Every variant is raised before the first trial runs; once an experiment
//! starts it has no failure paths.

use thiserror::Error;

/// Failures surfaced by config validation and sampler construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerificationError {
    /// A filter count below 1.
    #[error("Invalid filter count: {0} (must be >= 1)")]
    InvalidFilterCount(usize),

    /// No filter counts to sweep.
    #[error("No filter counts configured")]
    EmptyFilterCounts,

    /// Trial count below 1.
    #[error("Invalid trial count: {0} (must be >= 1)")]
    InvalidTrials(usize),

    /// Sampling range that is empty, reversed or not finite.
    #[error("Invalid sampling range: [{low}, {high}) (bounds must be finite and low < high)")]
    InvalidRange { low: f64, high: f64 },

    /// Perturbation step that is not positive and finite.
    #[error("Invalid perturbation step: {0} (must be > 0 and finite)")]
    InvalidDelta(f64),

    /// Condition-number regularizer that is not positive and finite.
    #[error("Invalid regularizer: {0} (must be > 0 and finite)")]
    InvalidRegularizer(f64),

    /// Near-singular threshold that is negative or not finite.
    #[error("Invalid near-zero threshold: {0} (must be >= 0 and finite)")]
    InvalidThreshold(f64),

    /// The sampling distribution could not be built.
    #[error("Sampler construction failed: {0}")]
    Sampling(String),
}
