//! Sequence parameters and the validation boundary
//!
//! Parameters are constructed fresh per request and validated before any
//! generation happens. The generators themselves assume validated input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the number of terms per request
pub const MAX_TERMS: u32 = 1000;

/// An ordered list of terms. Index 0 is the first term.
pub type Sequence = Vec<f64>;

/// Error type for parameter validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Number of terms must be a positive integer")]
    NonPositiveTermCount,

    #[error("Number of terms cannot exceed {0}")]
    TermCountExceeded(u32),

    #[error("{0} must be a finite number")]
    NonFiniteParam(&'static str),
}

/// Kind of progression to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Arithmetic,
    Geometric,
}

impl SequenceKind {
    /// How the `step` parameter is interpreted for this kind
    pub fn step_label(&self) -> &'static str {
        match self {
            SequenceKind::Arithmetic => "common difference",
            SequenceKind::Geometric => "common ratio",
        }
    }

    /// Closed-form expression for the nth term
    pub fn formula(&self) -> &'static str {
        match self {
            SequenceKind::Arithmetic => "aₙ = a₁ + (n-1) × d",
            SequenceKind::Geometric => "aₙ = a₁ × r^(n-1)",
        }
    }
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceKind::Arithmetic => write!(f, "arithmetic"),
            SequenceKind::Geometric => write!(f, "geometric"),
        }
    }
}

/// Request-scoped generation parameters
///
/// `step` is the common difference for arithmetic sequences and the common
/// ratio for geometric ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceParameters {
    pub first_term: f64,
    pub step: f64,
    pub num_terms: u32,
}

impl SequenceParameters {
    pub fn new(first_term: f64, step: f64, num_terms: u32) -> Self {
        Self { first_term, step, num_terms }
    }

    /// Enforce the boundary contract: term count in [1, MAX_TERMS],
    /// numeric parameters finite. Generators are never called with
    /// parameters that fail here.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.first_term.is_finite() {
            return Err(ParamError::NonFiniteParam("First term"));
        }
        if !self.step.is_finite() {
            return Err(ParamError::NonFiniteParam("Step"));
        }
        if self.num_terms == 0 {
            return Err(ParamError::NonPositiveTermCount);
        }
        if self.num_terms > MAX_TERMS {
            return Err(ParamError::TermCountExceeded(MAX_TERMS));
        }
        Ok(())
    }
}
