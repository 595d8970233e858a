//! Progression Core - Fundamental types
//!
//! This crate provides the core types used throughout Progression:
//! - `SequenceKind` / `SequenceParameters`: what to generate
//! - `Sequence`: the generated terms
//! - `ProgressionError`: structured errors for the presentation boundary

mod error;
mod params;

pub use error::{codes, ProgressionError, Severity};
pub use params::{ParamError, Sequence, SequenceKind, SequenceParameters, MAX_TERMS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ProgressionError, Sequence, SequenceKind, SequenceParameters, Severity, MAX_TERMS,
    };
    pub use crate::error::codes;
}
