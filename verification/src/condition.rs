//! Empirical relative condition number by forward differences.
//!
//! ```text
//! κ(f, x) ≈ max_i |∂f/∂x_i| · ‖x‖₂ / (|f(x)| + ε)
//! ∂f/∂x_i ≈ (f(x + δ·e_i) − f(x)) / δ
//! ```
//!
//! ε keeps the quotient finite when f(x) → 0, at the price of biasing κ
//! downward there. The estimate is an order-of-magnitude proxy, not a bound:
//! δ is fixed and does not scale with |x|.
//!
//! Because ε hides the near-zero case instead of reporting it, every estimate
//! also carries a `near_singular` flag set when |f(x)| is below a threshold.

/// Estimator tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionSettings {
    /// Forward-difference step δ.
    pub delta: f64,
    /// Denominator regularizer ε.
    pub regularizer: f64,
    /// `|f(x)|` below this marks the estimate near-singular.
    pub near_zero_threshold: f64,
}

impl Default for ConditionSettings {
    fn default() -> Self {
        Self { delta: 1e-6, regularizer: 1e-10, near_zero_threshold: 1e-6 }
    }
}

/// One condition-number estimate at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionEstimate {
    /// κ as defined above; always ≥ 0.
    pub value: f64,
    /// Baseline output f(x).
    pub output: f64,
    /// `|f(x)| < near_zero_threshold`: κ is dominated by ε and not meaningful.
    pub near_singular: bool,
}

/// Estimate κ for `f` at `x`.
pub fn estimate<F>(f: F, x: &[f64], settings: &ConditionSettings) -> ConditionEstimate
where
    F: Fn(&[f64]) -> f64,
{
    let baseline = f(x);
    let near_singular = baseline.abs() < settings.near_zero_threshold;

    let mut perturbed = x.to_vec();
    let mut max_grad = 0.0f64;
    for i in 0..x.len() {
        perturbed[i] = x[i] + settings.delta;
        let grad = ((f(&perturbed) - baseline) / settings.delta).abs();
        max_grad = max_grad.max(grad);
        perturbed[i] = x[i];
    }

    let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
    let value = max_grad * norm / (baseline.abs() + settings.regularizer);

    ConditionEstimate { value, output: baseline, near_singular }
}

/// κ alone, with the default ε = 1e-10.
pub fn estimate_condition_number<F>(f: F, x: &[f64], delta: f64) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    let settings = ConditionSettings { delta, ..ConditionSettings::default() };
    estimate(f, x, &settings).value
}

// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::{Network, Operation};
    use approx::assert_relative_eq;

    // ── PRNG ──────────────────────────────────────────────────────────────────
    fn lcg(state: &mut u64) -> f64 {
        *state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (*state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Linear f(x) = a·x has κ = 1 in one dimension.
    #[test]
    fn linear_function_is_well_conditioned() {
        let f = |x: &[f64]| 3.0 * x[0];
        for &x0 in &[0.5, 2.0, -7.0, 100.0] {
            let kappa = estimate_condition_number(f, &[x0], 1e-6);
            assert_relative_eq!(kappa, 1.0, epsilon = 1e-4);
        }
    }

    /// f(x1, x2) = x1 − x2 near x1 = x2 is ill-conditioned (cancellation).
    #[test]
    fn cancellation_is_ill_conditioned() {
        let f = |x: &[f64]| x[0] - x[1];
        let kappa = estimate_condition_number(f, &[1.0, 0.999], 1e-6);
        println!("  κ(x1 − x2 at (1, 0.999)) = {kappa:.1}");
        assert!(kappa > 1000.0, "expected κ ≫ 1, got {kappa}");
    }

    #[test]
    fn non_negative_over_random_inputs() {
        let settings = ConditionSettings::default();
        let mut rng = 2024u64;
        for k in [1usize, 3, 5, 10] {
            for op in Operation::ALL {
                let net = Network::new(op, k).unwrap();
                for _ in 0..500 {
                    let x = [lcg(&mut rng) * 20.0 - 10.0, lcg(&mut rng) * 20.0 - 10.0];
                    let est = estimate(|v: &[f64]| net.eval(v), &x, &settings);
                    assert!(est.value >= 0.0, "{op:?} K={k} x={x:?}: κ = {}", est.value);
                    assert!(est.value.is_finite());
                }
            }
        }
    }

    /// Pinned against the reference formula at (3, −2), K = 5.
    #[test]
    fn network_add_condition_pinned() {
        let net = Network::new(Operation::Addition, 5).unwrap();
        let kappa = estimate_condition_number(|v: &[f64]| net.eval(v), &[3.0, -2.0], 1e-6);
        assert_relative_eq!(kappa, 8.303085251741601, max_relative = 1e-6);
    }

    #[test]
    fn network_multiply_condition_pinned() {
        let net = Network::new(Operation::Multiplication, 5).unwrap();
        let kappa = estimate_condition_number(|v: &[f64]| net.eval(v), &[3.0, -2.0], 1e-6);
        assert_relative_eq!(kappa, 0.13397744758442015, max_relative = 1e-6);
    }

    /// At the origin the output is exactly zero: ε avoids 0/0, ‖x‖ = 0 makes κ = 0,
    /// and the estimate is flagged.
    #[test]
    fn zero_output_is_flagged_not_fatal() {
        let net = Network::new(Operation::Addition, 3).unwrap();
        let est = estimate(|v: &[f64]| net.eval(v), &[0.0, 0.0], &ConditionSettings::default());
        assert_eq!(est.output, 0.0);
        assert_eq!(est.value, 0.0);
        assert!(est.near_singular);
    }

    /// Regularizer caps κ when f(x) = 0 but ‖x‖ > 0.
    #[test]
    fn regularizer_bounds_blow_up() {
        let net = Network::new(Operation::Addition, 3).unwrap();
        let settings = ConditionSettings::default();
        let est = estimate(|v: &[f64]| net.eval(v), &[2.0, -2.0], &settings);
        assert!(est.near_singular);
        assert!(est.value.is_finite());
        println!("  κ(add at (2, −2)) = {:.3e} (ε-limited)", est.value);

        let loose = ConditionSettings { regularizer: 1.0, ..settings };
        let capped = estimate(|v: &[f64]| net.eval(v), &[2.0, -2.0], &loose);
        assert!(capped.value < est.value);
    }

    #[test]
    fn empty_input_is_zero() {
        let kappa = estimate_condition_number(|_: &[f64]| 1.0, &[], 1e-6);
        assert_eq!(kappa, 0.0);
    }

    /// Only the coordinate being differentiated moves.
    #[test]
    fn perturbs_one_coordinate_at_a_time() {
        use std::cell::RefCell;
        let seen = RefCell::new(Vec::new());
        let f = |x: &[f64]| {
            seen.borrow_mut().push(x.to_vec());
            x[0] + x[1]
        };
        estimate(f, &[1.0, 2.0], &ConditionSettings::default());
        let seen = seen.into_inner();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], vec![1.0, 2.0]);
        assert_eq!(seen[1], vec![1.0 + 1e-6, 2.0]);
        assert_eq!(seen[2], vec![1.0, 2.0 + 1e-6]);
    }
}
