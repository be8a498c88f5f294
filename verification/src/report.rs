//! Text and JSON rendering of a finished sweep.
//!
//! The text layout is fixed:
//!
//! ```text
//! VALIDATION EXPERIMENTS
//! =====================
//!
//! Testing with K=3 filters:
//! Addition - Mean Error: 9.876543
//! Addition - Max Error: 18.123456
//! Addition - Mean Condition Number: 0.12
//! Multiplication - Mean Error: …
//! …
//! ```
//!
//! Errors print with 6 decimals, condition numbers with 2. One blank line
//! precedes every `Testing with` block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::experiment::ConfigurationResult;
use crate::spectral::Operation;

pub const TITLE: &str = "VALIDATION EXPERIMENTS";
pub const RULE: &str = "=====================";

/// Every configuration of one run, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub seed: u64,
    pub trials: usize,
    pub configurations: Vec<ConfigurationResult>,
}

impl ExperimentReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ConfigurationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Testing with K={} filters:", self.filters)?;
        for op in Operation::ALL {
            let s = self.stats(op);
            let name = op.label();
            writeln!(f, "{name} - Mean Error: {:.6}", s.mean_error)?;
            writeln!(f, "{name} - Max Error: {:.6}", s.max_error)?;
            writeln!(f, "{name} - Mean Condition Number: {:.2}", s.mean_condition)?;
        }
        Ok(())
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{RULE}")?;
        for config in &self.configurations {
            writeln!(f)?;
            write!(f, "{config}")?;
        }
        Ok(())
    }
}
