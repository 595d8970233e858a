//! Basic sequence generators
//!
//! arithmetic and geometric progressions, built term by term from the
//! closed form so each term is independent of rounding in its neighbors.

use progression_core::Sequence;

/// Generate an arithmetic sequence: seq[n] = first + n × diff.
///
/// Returns exactly `num_terms` elements; zero terms yield an empty
/// sequence (the validation boundary rejects that case before we get here).
pub fn arithmetic(first_term: f64, common_difference: f64, num_terms: u32) -> Sequence {
    let mut result = Vec::with_capacity(num_terms as usize);
    for n in 0..num_terms {
        result.push(first_term + f64::from(n) * common_difference);
    }
    result
}

/// Generate a geometric sequence: seq[n] = first × ratio^n.
///
/// Standard exponentiation semantics apply: ratio^0 is 1 even when the
/// ratio is 0, and negative ratios alternate sign.
pub fn geometric(first_term: f64, common_ratio: f64, num_terms: u32) -> Sequence {
    let mut result = Vec::with_capacity(num_terms as usize);
    for n in 0..num_terms {
        result.push(first_term * common_ratio.powi(n as i32));
    }
    result
}
