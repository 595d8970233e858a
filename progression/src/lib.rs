//! Progression - Sequence reports
//!
//! Runs one generation request end to end: validate parameters, generate
//! the sequence, summarize the series, and bundle the result into a
//! `Report` the presentation surface can render or serialize.

mod export;
mod render;
mod report;

pub use export::{export_filename, export_text};
pub use render::Renderer;
pub use report::{
    Report, TableRow, TableView, TermsView, DISPLAY_WINDOW, EXPORT_THRESHOLD, FULL_DISPLAY_LIMIT,
    TABLE_ROW_LIMIT,
};

use progression_core::{ProgressionError, SequenceKind, SequenceParameters};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Main Progression engine
pub struct Progression;

impl Progression {
    pub fn new() -> Self {
        Self
    }

    /// Run one request: validate, generate, summarize.
    ///
    /// Computation never runs for invalid parameters. Any unexpected
    /// panic inside the computation is caught here and reported as a
    /// generic computation error instead of taking down the process.
    pub fn run(
        &self,
        kind: SequenceKind,
        params: &SequenceParameters,
    ) -> Result<Report, ProgressionError> {
        params.validate()?;

        let computed = catch_unwind(AssertUnwindSafe(|| {
            let sequence = progression_seq::generate(kind, params);
            let sum = progression_seq::summarize(kind, params, &sequence);
            (sequence, sum)
        }));

        let (sequence, sum) = match computed {
            Ok(pair) => pair,
            Err(_) => return Err(ProgressionError::compute_error()),
        };

        tracing::debug!(%kind, terms = sequence.len(), sum, "sequence generated");

        Ok(Report::new(kind, *params, sequence, sum))
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
