//! Computed sequence reports
//!
//! A `Report` bundles everything the presentation surface shows for one
//! request: the terms, the series sum, summary metrics, a display window
//! over the term list, and the capped tabular view.

use progression_core::{Sequence, SequenceKind, SequenceParameters};
use serde::Serialize;

/// Sequences up to this length are displayed in full
pub const FULL_DISPLAY_LIMIT: usize = 50;

/// Head/tail window size for longer sequences
pub const DISPLAY_WINDOW: usize = 10;

/// Maximum rows in the tabular view
pub const TABLE_ROW_LIMIT: usize = 100;

/// Sequences longer than this are offered as a text export
pub const EXPORT_THRESHOLD: u32 = 20;

/// Display window over the term list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum TermsView {
    /// Every term, in order
    Full { terms: Vec<f64> },
    /// First and last `DISPLAY_WINDOW` terms of a long sequence
    Windowed { first: Vec<f64>, last: Vec<f64> },
}

/// One row of the tabular view: 1-based term number and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub n: usize,
    pub value: f64,
}

/// Tabular view capped at `TABLE_ROW_LIMIT` rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub total_terms: usize,
}

impl TableView {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_terms
    }
}

/// Result of one generation request
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub kind: SequenceKind,
    pub params: SequenceParameters,
    pub sequence: Sequence,
    pub sum: f64,
    pub first_term: f64,
    pub last_term: f64,
    pub range: f64,
}

impl Report {
    pub fn new(kind: SequenceKind, params: SequenceParameters, sequence: Sequence, sum: f64) -> Self {
        // Validation guarantees at least one term; fall back to the
        // requested first term so the accessors stay panic-free.
        let first_term = sequence.first().copied().unwrap_or(params.first_term);
        let last_term = sequence.last().copied().unwrap_or(params.first_term);
        Self {
            kind,
            params,
            sequence,
            sum,
            first_term,
            last_term,
            range: last_term - first_term,
        }
    }

    /// Display window: full list for short sequences, first/last
    /// `DISPLAY_WINDOW` terms otherwise.
    pub fn terms_view(&self) -> TermsView {
        if self.sequence.len() <= FULL_DISPLAY_LIMIT {
            TermsView::Full { terms: self.sequence.clone() }
        } else {
            TermsView::Windowed {
                first: self.sequence[..DISPLAY_WINDOW].to_vec(),
                last: self.sequence[self.sequence.len() - DISPLAY_WINDOW..].to_vec(),
            }
        }
    }

    /// Tabular view, capped at `TABLE_ROW_LIMIT` rows.
    pub fn table(&self) -> TableView {
        let limit = TABLE_ROW_LIMIT.min(self.sequence.len());
        TableView {
            rows: self.sequence[..limit]
                .iter()
                .enumerate()
                .map(|(i, value)| TableRow { n: i + 1, value: *value })
                .collect(),
            total_terms: self.sequence.len(),
        }
    }

    /// Whether the presentation surface should offer a text export.
    pub fn offers_export(&self) -> bool {
        self.params.num_terms > EXPORT_THRESHOLD
    }
}
