//! Markdown renderer
//!
//! Renders a computed report as markdown for the terminal: parameters,
//! the windowed term list, summary metrics, and the optional table.

use crate::report::{Report, TermsView};

/// Report renderer
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the main report
    pub fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str("## Parameters\n\n");
        output.push_str(&format!("- Sequence type: {}\n", report.kind));
        output.push_str(&format!("- First term: {}\n", report.params.first_term));
        output.push_str(&format!(
            "- {}: {}\n",
            capitalize(report.kind.step_label()),
            report.params.step
        ));
        output.push_str(&format!("- Number of terms: {}\n\n", report.params.num_terms));
        output.push_str(&format!("**Formula:** {}\n\n", report.kind.formula()));

        output.push_str("## Generated Sequence\n\n");
        match report.terms_view() {
            TermsView::Full { terms } => {
                output.push_str(&format!("**Terms:** {}\n\n", join_terms(&terms)));
            }
            TermsView::Windowed { first, last } => {
                output.push_str(&format!("**First 10 terms:** {}\n", join_terms(&first)));
                output.push_str("**...**\n");
                output.push_str(&format!("**Last 10 terms:** {}\n\n", join_terms(&last)));
            }
        }

        output.push_str("| metric | value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| First Term | {} |\n", report.first_term));
        output.push_str(&format!("| Last Term | {} |\n", report.last_term));
        output.push_str(&format!("| Sum | {} |\n", report.sum));
        output.push_str(&format!("| Range | {} |\n", report.range));

        output
    }

    /// Render the tabular view, with a truncation notice when the
    /// sequence exceeds the row cap.
    pub fn render_table(&self, report: &Report) -> String {
        let table = report.table();
        let mut output = String::new();

        if table.is_truncated() {
            output.push_str(&format!(
                "Showing first {} terms in table (sequence has {} terms total)\n\n",
                table.rows.len(),
                table.total_terms
            ));
        }

        output.push_str("| n | term |\n");
        output.push_str("|---|------|\n");
        for row in &table.rows {
            output.push_str(&format!("| {} | {} |\n", row.n, row.value));
        }

        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn join_terms(terms: &[f64]) -> String {
    terms
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{SequenceKind, SequenceParameters};

    fn report(kind: SequenceKind, first: f64, step: f64, count: u32) -> crate::Report {
        let params = SequenceParameters::new(first, step, count);
        let sequence = progression_seq::generate(kind, &params);
        let sum = progression_seq::summarize(kind, &params, &sequence);
        crate::Report::new(kind, params, sequence, sum)
    }

    #[test]
    fn test_render_short_sequence() {
        let out = Renderer::new().render(&report(SequenceKind::Arithmetic, 1.0, 2.0, 5));
        assert!(out.contains("**Terms:** 1, 3, 5, 7, 9"));
        assert!(out.contains("| Sum | 25 |"));
        assert!(out.contains("Common difference: 2"));
        assert!(out.contains("aₙ = a₁ + (n-1) × d"));
    }

    #[test]
    fn test_render_long_sequence_windows() {
        let out = Renderer::new().render(&report(SequenceKind::Arithmetic, 1.0, 1.0, 60));
        assert!(out.contains("**First 10 terms:** 1, 2, 3, 4, 5, 6, 7, 8, 9, 10"));
        assert!(out.contains("**Last 10 terms:** 51, 52, 53, 54, 55, 56, 57, 58, 59, 60"));
        assert!(!out.contains("**Terms:**"));
    }

    #[test]
    fn test_render_geometric_labels() {
        let out = Renderer::new().render(&report(SequenceKind::Geometric, 2.0, 2.0, 5));
        assert!(out.contains("Common ratio: 2"));
        assert!(out.contains("aₙ = a₁ × r^(n-1)"));
    }

    #[test]
    fn test_render_table_truncation_notice() {
        let out = Renderer::new().render_table(&report(SequenceKind::Arithmetic, 0.0, 1.0, 150));
        assert!(out.contains("Showing first 100 terms in table (sequence has 150 terms total)"));
        assert!(out.contains("| 100 | 99 |"));
        assert!(!out.contains("| 101 |"));
    }

    #[test]
    fn test_render_table_no_notice_within_cap() {
        let out = Renderer::new().render_table(&report(SequenceKind::Arithmetic, 0.0, 1.0, 10));
        assert!(!out.contains("Showing first"));
        assert!(out.contains("| 10 | 9 |"));
    }
}
