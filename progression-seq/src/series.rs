//! Series summation
//!
//! Direct summation for arithmetic series; closed form for geometric
//! series with the ratio == 1 degenerate case handled separately.

/// Sum of an arithmetic series by direct accumulation.
///
/// The term count is bounded by the validation boundary, so there is no
/// need for the n(a₁ + aₙ)/2 closed form here.
pub fn sum_arithmetic(sequence: &[f64]) -> f64 {
    sequence.iter().sum()
}

/// Sum of a geometric series: a₁ × (1 - rⁿ) / (1 - r).
///
/// A ratio of exactly 1 makes the closed form divide by zero; every term
/// equals the first term in that case, so the sum is a₁ × n. Ratios merely
/// close to 1 take the general branch and may suffer cancellation; that
/// matches the displayed sequence, which is built the same way.
pub fn sum_geometric(first_term: f64, common_ratio: f64, num_terms: u32) -> f64 {
    if common_ratio == 1.0 {
        return first_term * f64::from(num_terms);
    }
    first_term * (1.0 - common_ratio.powi(num_terms as i32)) / (1.0 - common_ratio)
}
