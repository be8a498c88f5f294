//! Running aggregates over trials.
//!
//! Trials are folded in one at a time and never stored. `merge` is
//! associative and commutative (sum, max, count), so partial accumulators can
//! be combined in any order with identical max and count, and sums equal up
//! to floating-point rounding.

use serde::{Deserialize, Serialize};

/// Streaming sum/max over absolute errors and condition numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accumulator {
    count: usize,
    error_sum: f64,
    error_max: f64,
    condition_sum: f64,
    near_singular: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial in.
    pub fn push(&mut self, abs_error: f64, condition: f64, near_singular: bool) {
        self.count += 1;
        self.error_sum += abs_error;
        self.error_max = self.error_max.max(abs_error);
        self.condition_sum += condition;
        self.near_singular += usize::from(near_singular);
    }

    pub fn merge(&mut self, other: &Accumulator) {
        self.count += other.count;
        self.error_sum += other.error_sum;
        self.error_max = self.error_max.max(other.error_max);
        self.condition_sum += other.condition_sum;
        self.near_singular += other.near_singular;
    }

    /// Freeze into summary statistics. `None` if nothing was pushed.
    pub fn finish(&self) -> Option<AggregateStatistics> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(AggregateStatistics {
            trials: self.count,
            mean_error: self.error_sum / n,
            max_error: self.error_max,
            mean_condition: self.condition_sum / n,
            near_singular: self.near_singular,
        })
    }
}

/// Summary for one (operation, K) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub trials: usize,
    pub mean_error: f64,
    pub max_error: f64,
    pub mean_condition: f64,
    /// Trials whose condition estimate was flagged near-singular.
    pub near_singular: usize,
}
