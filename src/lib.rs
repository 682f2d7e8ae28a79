//! # truth-table-rs: incremental Boolean truth tables
//!
//! **`truth-table-rs`** lets you define a Boolean function of `N` variables row by row,
//! and keeps a canonical formula for it as you go.
//!
//! ## How it works
//!
//! Each row is an input combination plus an output bit. The table turns every row of the
//! "interesting" polarity into a term:
//!
//! - **Sum of products**: one minterm (AND of literals) per row with output 1, OR-ed together.
//! - **Product of sums**: one maxterm (OR of literals) per row with output 0, AND-ed together.
//!
//! The very first row picks the initial form. Before every evaluation the table re-balances:
//! as soon as both polarities are present it switches to whichever form needs fewer terms
//! (ties go to sum of products) and rebuilds the formula from all rows.
//! Evaluation results are memoised until the next change to the formula.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table_rs::table::TruthTable;
//!
//! # fn main() -> Result<(), truth_table_rs::error::TruthTableError> {
//! // f(A, B) = A
//! let mut table = TruthTable::new(2)?;
//! table.add_row(&[1, 1, 1])?;
//! table.add_row(&[1, 0, 1])?;
//! assert_eq!(table.to_string(), "(A.B)+(A.~B)");
//!
//! assert!(table.check(&[true, false])?);
//! assert!(!table.check(&[false, true])?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: the [`TruthTable`] engine.
//! - **[`formula`]**: marker sequences, their evaluation and rendering.
//! - **[`form`]**: the two normal forms and the re-balancing transition.
//! - **[`gate`]**: elementary Boolean gates used by the evaluator.
//! - **[`shared`]**: a mutex-guarded handle for use across threads.

pub mod bitset;
pub mod cache;
pub mod error;
pub mod form;
pub mod formula;
pub mod gate;
pub mod row;
pub mod shared;
pub mod table;

pub use crate::error::{Result, TruthTableError};
pub use crate::form::NormalForm;
pub use crate::table::TruthTable;
