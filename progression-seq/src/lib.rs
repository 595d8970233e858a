//! Progression Sequence Library
//!
//! The pure computational payload: sequence generators and series
//! summation, dispatched over `SequenceKind`. Both operations are
//! stateless and bounded by `MAX_TERMS`, so each call is an independent,
//! effectively instantaneous computation.

pub mod generators;
pub mod series;

use progression_core::{Sequence, SequenceKind, SequenceParameters};

/// Produce the ordered sequence of terms for the given kind.
///
/// Callers validate parameters first; see
/// `SequenceParameters::validate`.
pub fn generate(kind: SequenceKind, params: &SequenceParameters) -> Sequence {
    match kind {
        SequenceKind::Arithmetic => {
            generators::arithmetic(params.first_term, params.step, params.num_terms)
        }
        SequenceKind::Geometric => {
            generators::geometric(params.first_term, params.step, params.num_terms)
        }
    }
}

/// Compute the aggregate sum of a generated series.
///
/// Arithmetic series are summed directly over the generated terms;
/// geometric series use the closed form from the parameters alone.
pub fn summarize(kind: SequenceKind, params: &SequenceParameters, sequence: &[f64]) -> f64 {
    match kind {
        SequenceKind::Arithmetic => series::sum_arithmetic(sequence),
        SequenceKind::Geometric => {
            series::sum_geometric(params.first_term, params.step, params.num_terms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: SequenceKind, first_term: f64, step: f64, num_terms: u32) -> (Sequence, f64) {
        let params = SequenceParameters::new(first_term, step, num_terms);
        let sequence = generate(kind, &params);
        let sum = summarize(kind, &params, &sequence);
        (sequence, sum)
    }

    #[test]
    fn test_arithmetic_scenario() {
        let (seq, sum) = run(SequenceKind::Arithmetic, 1.0, 2.0, 5);
        assert_eq!(seq, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(sum, 25.0);
    }

    #[test]
    fn test_geometric_scenario() {
        let (seq, sum) = run(SequenceKind::Geometric, 2.0, 2.0, 5);
        assert_eq!(seq, vec![2.0, 4.0, 8.0, 16.0, 32.0]);
        assert_eq!(sum, 62.0);
    }

    #[test]
    fn test_geometric_degenerate_scenario() {
        let (seq, sum) = run(SequenceKind::Geometric, 5.0, 1.0, 4);
        assert_eq!(seq, vec![5.0, 5.0, 5.0, 5.0]);
        assert_eq!(sum, 20.0);
    }

    #[test]
    fn test_single_term_both_kinds() {
        for kind in [SequenceKind::Arithmetic, SequenceKind::Geometric] {
            let (seq, sum) = run(kind, 4.5, 3.0, 1);
            assert_eq!(seq, vec![4.5]);
            assert_eq!(sum, 4.5);
        }
    }

    #[test]
    fn test_sequence_length_matches_count() {
        let (seq, _) = run(SequenceKind::Arithmetic, 0.0, 1.0, 1000);
        assert_eq!(seq.len(), 1000);
    }
}
