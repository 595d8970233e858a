//! Plain-text export
//!
//! One line per term, `Term <i+1>: <value>`, with a filename that encodes
//! the kind and parameters. File I/O stays in the presentation surface;
//! this module only produces the payload and name.

use progression_core::{SequenceKind, SequenceParameters};

/// Export payload: one `Term <n>: <value>` line per term.
pub fn export_text(sequence: &[f64]) -> String {
    sequence
        .iter()
        .enumerate()
        .map(|(i, term)| format!("Term {}: {}", i + 1, term))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export filename: `<kind>_sequence_<first>_<step>_<count>.txt`.
pub fn export_filename(kind: SequenceKind, params: &SequenceParameters) -> String {
    format!(
        "{}_sequence_{}_{}_{}.txt",
        kind, params.first_term, params.step, params.num_terms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_text_lines() {
        let text = export_text(&[1.0, 3.0, 5.0]);
        assert_eq!(text, "Term 1: 1\nTerm 2: 3\nTerm 3: 5");
    }

    #[test]
    fn test_export_text_empty() {
        assert_eq!(export_text(&[]), "");
    }

    #[test]
    fn test_export_filename_arithmetic() {
        let params = SequenceParameters::new(1.5, 2.0, 30);
        assert_eq!(
            export_filename(SequenceKind::Arithmetic, &params),
            "arithmetic_sequence_1.5_2_30.txt"
        );
    }

    #[test]
    fn test_export_filename_geometric() {
        let params = SequenceParameters::new(2.0, 0.5, 25);
        assert_eq!(
            export_filename(SequenceKind::Geometric, &params),
            "geometric_sequence_2_0.5_25.txt"
        );
    }
}
