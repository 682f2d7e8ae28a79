//! Thread-safe handle to a [`TruthTable`].
//!
//! A single mutex guards rows, formula and cache together, since both
//! `add_row` and the re-balancing step inside `check` mutate all of them.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::table::TruthTable;

#[derive(Debug)]
pub struct SharedTruthTable {
    inner: Mutex<TruthTable>,
}

impl SharedTruthTable {
    pub fn new(terms: usize) -> Result<Self> {
        Ok(Self::from(TruthTable::new(terms)?))
    }

    // Every mutation validates before writing, so a panic in another thread
    // cannot leave the table half-updated and the poison flag can be ignored.
    fn lock(&self) -> MutexGuard<'_, TruthTable> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_row(&self, terms: &[u8]) -> Result<()> {
        self.lock().add_row(terms)
    }

    pub fn check(&self, assignment: &[bool]) -> Result<bool> {
        self.lock().check(assignment)
    }

    pub fn render(&self) -> String {
        self.lock().to_string()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> TruthTable {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<TruthTable> for SharedTruthTable {
    fn from(table: TruthTable) -> Self {
        Self {
            inner: Mutex::new(table),
        }
    }
}
