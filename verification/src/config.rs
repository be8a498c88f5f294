//! Experiment configuration.
//!
//! Defaults reproduce the reference sweep: K ∈ [3, 5, 10], 1000 trials per K,
//! inputs uniform on [-10, 10), δ = 1e-6, seed 42.
//!
//! `validate` is fail-fast and runs before any trial, so a bad config never
//! produces a partial report.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VerificationError;

/// Half-open sampling interval `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub low: f64,
    pub high: f64,
}

impl Default for SampleRange {
    fn default() -> Self {
        Self { low: -10.0, high: 10.0 }
    }
}

/// All tunables of a validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Filter counts, swept in this order.
    pub filter_counts: Vec<usize>,
    /// Trials per filter count.
    pub trials: usize,
    pub range: SampleRange,
    /// Forward-difference step of the condition estimator.
    pub delta: f64,
    /// Seed of the single generator for the whole run.
    pub seed: u64,
    /// ε in `… / (|f(x)| + ε)`.
    pub regularizer: f64,
    /// Outputs with `|f(x)|` below this are flagged near-singular.
    pub near_zero_threshold: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            filter_counts: vec![3, 5, 10],
            trials: 1000,
            range: SampleRange::default(),
            delta: 1e-6,
            seed: 42,
            regularizer: 1e-10,
            near_zero_threshold: 1e-6,
        }
    }
}

impl ExperimentConfig {
    /// Read a JSON config; absent fields take their defaults.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Check every parameter bound, cheapest first.
    pub fn validate(&self) -> Result<(), VerificationError> {
        if self.filter_counts.is_empty() {
            return Err(VerificationError::EmptyFilterCounts);
        }
        if let Some(&k) = self.filter_counts.iter().find(|&&k| k == 0) {
            return Err(VerificationError::InvalidFilterCount(k));
        }
        if self.trials == 0 {
            return Err(VerificationError::InvalidTrials(self.trials));
        }

        let SampleRange { low, high } = self.range;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(VerificationError::InvalidRange { low, high });
        }

        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(VerificationError::InvalidDelta(self.delta));
        }
        if !self.regularizer.is_finite() || self.regularizer <= 0.0 {
            return Err(VerificationError::InvalidRegularizer(self.regularizer));
        }
        if !self.near_zero_threshold.is_finite() || self.near_zero_threshold < 0.0 {
            return Err(VerificationError::InvalidThreshold(self.near_zero_threshold));
        }
        Ok(())
    }
}
