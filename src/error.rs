//! Error types for truth table construction and evaluation.

use thiserror::Error;

use crate::table::{MAX_TERMS, MIN_TERMS};

/// Validation errors raised by [`TruthTable`][crate::table::TruthTable].
///
/// Every error is reported before any state is touched, so a failed call
/// leaves the table exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TruthTableError {
    /// The number of terms passed to the constructor is out of range.
    #[error("number of terms must be between {min} and {max}, got {terms}", min = MIN_TERMS, max = MAX_TERMS)]
    InvalidArity { terms: usize },

    /// All `2^N` input combinations are already present.
    #[error("table already holds all {capacity} rows")]
    TableFull { capacity: usize },

    /// Wrong number of terms passed to `add_row` (expects `N + 1`) or `check` (expects `N`).
    #[error("expected {expected} terms, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// The input combination of the row has already been used.
    #[error("input combination {combination} has already been used")]
    DuplicateRow { combination: String },

    /// A row term is neither 0 nor 1.
    #[error("term {position} must be 0 or 1, got {value}")]
    InvalidBit { position: usize, value: u8 },
}

/// Shorthand for results carrying a [`TruthTableError`].
pub type Result<T, E = TruthTableError> = std::result::Result<T, E>;
