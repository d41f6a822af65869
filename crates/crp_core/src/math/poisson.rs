//! Truncated Poisson default-count expansion.
//!
//! CreditRisk+ models the number of defaults of one obligor over the risk
//! horizon as Poisson with intensity λ equal to its default probability.
//! Terms are produced by a multiplicative recurrence rather than an explicit
//! factorial, so the expansion is stack-safe and cannot overflow for any
//! admissible λ.

/// Expands the Poisson(λ) probability mass function until the tail becomes
/// negligible.
///
/// # Mathematical Definition
/// ```text
/// term(k) = (λ^k / k!) · e^(−λ),   k = 0, 1, 2, …
/// ```
/// computed by the recurrence
/// ```text
/// term(0) = e^(−λ),   term(k) = term(k−1) · λ / k
/// ```
///
/// # Truncation rule
/// Each term is appended to the result, and the expansion continues only
/// while the term just appended exceeds `epsilon`. The first term at or
/// below `epsilon` is therefore still included before iteration stops,
/// keeping the sliver of tail mass that a strict cut would drop.
///
/// # Arguments
/// * `lambda` - Poisson intensity, ≥ 0 (a default probability in this model)
/// * `epsilon` - Truncation threshold, strictly positive
///
/// # Returns
/// The truncated pmf `[term(0), …, term(K)]`, never empty; `term(K)` is the
/// only element at or below `epsilon` (every earlier element exceeds it).
///
/// # Panics
/// Panics if `epsilon <= 0` or `lambda < 0`.
///
/// # Examples
/// ```
/// use crp_core::math::poisson::truncated_terms;
///
/// let terms = truncated_terms(0.01, 1e-9);
/// assert!((terms[0] - (-0.01_f64).exp()).abs() < 1e-15);
/// assert!(terms.last().unwrap() <= &1e-9);
/// ```
pub fn truncated_terms(lambda: f64, epsilon: f64) -> Vec<f64> {
    assert!(epsilon > 0.0, "epsilon must be positive");
    assert!(lambda >= 0.0, "lambda must be non-negative");

    let mut terms = Vec::new();
    let mut term = (-lambda).exp();
    let mut k = 0u32;
    loop {
        terms.push(term);
        if term <= epsilon {
            break;
        }
        k += 1;
        term *= lambda / f64::from(k);
    }
    terms
}
