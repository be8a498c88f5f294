//! Spectral filter family and the two arithmetic networks built from it.
//!
//! ## The filter
//!
//! ```text
//! φ_k(x) = tanh(k · x) / (k + 1)          k = 1, 2, …
//! ```
//!
//! tanh saturates at ±1, so |φ_k(x)| ≤ 1/(k+1) for every finite x. The bound
//! is open in exact arithmetic; in f64 tanh rounds to exactly ±1 once
//! |k·x| ≳ 19, so computed values can sit on the bound.
//!
//! ## The networks
//!
//! ```text
//! add(x1, x2; K) = Σ_{k=1..K} [ φ_k(x1) + φ_k(x2) ]
//! mul(x1, x2; K) = Σ_{k=1..K} [ φ_k(x1) · φ_k(x2) ]
//! ```
//!
//! Neither is exact. The filters are fixed, not fit to the operations, so the
//! error is whatever these formulas produce; the harness reports it as-is.

use crate::error::VerificationError;

/// One filter instance: `tanh(k·x) / (k+1)`.
pub fn spectral_filter(x: f64, k: usize) -> f64 {
    let kf = k as f64;
    (kf * x).tanh() / (kf + 1.0)
}

/// Filter-sum surrogate for `x1 + x2`.
pub fn network_add(x1: f64, x2: f64, filters: usize) -> f64 {
    (1..=filters)
        .map(|k| spectral_filter(x1, k) + spectral_filter(x2, k))
        .sum()
}

/// Filter-sum surrogate for `x1 · x2`.
pub fn network_multiply(x1: f64, x2: f64, filters: usize) -> f64 {
    (1..=filters)
        .map(|k| spectral_filter(x1, k) * spectral_filter(x2, k))
        .sum()
}

// ── Operations ────────────────────────────────────────────────────────────────

/// The binary operation a network stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Addition, Operation::Multiplication];

    /// Exact result in f64.
    pub fn exact(self, x1: f64, x2: f64) -> f64 {
        match self {
            Operation::Addition => x1 + x2,
            Operation::Multiplication => x1 * x2,
        }
    }

    /// Network approximation with `filters` instances.
    pub fn approximate(self, x1: f64, x2: f64, filters: usize) -> f64 {
        match self {
            Operation::Addition => network_add(x1, x2, filters),
            Operation::Multiplication => network_multiply(x1, x2, filters),
        }
    }

    /// Report label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Multiplication => "Multiplication",
        }
    }
}

// ── Bound network ─────────────────────────────────────────────────────────────

/// An operation with its filter count fixed, evaluated on an input tuple.
///
/// This is the value handed to the condition estimator: it closes over `K`
/// so the estimator only ever sees `f(&[x1, x2])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    operation: Operation,
    filters: usize,
}

impl Network {
    pub fn new(operation: Operation, filters: usize) -> Result<Self, VerificationError> {
        if filters == 0 {
            return Err(VerificationError::InvalidFilterCount(filters));
        }
        Ok(Self { operation, filters })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn filters(&self) -> usize {
        self.filters
    }

    /// Evaluate on `[x1, x2]`.
    ///
    /// # Panics
    /// If `x` does not have exactly two coordinates.
    pub fn eval(&self, x: &[f64]) -> f64 {
        assert_eq!(x.len(), 2, "networks take exactly two inputs");
        self.operation.approximate(x[0], x[1], self.filters)
    }
}
