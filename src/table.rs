//! The truth table engine.
//!
//! A [`TruthTable`] collects rows one at a time and keeps a canonical formula
//! for them in either sum-of-products or product-of-sums form. The form is
//! first guessed from the very first row (an output of 0 selects
//! product-of-sums) and re-balanced before every [`check`][TruthTable::check]:
//! once rows of both polarities are present, the table moves to whichever form
//! needs fewer terms and rebuilds the formula by replaying all rows.
//!
//! ```
//! use truth_table_rs::table::TruthTable;
//!
//! # fn main() -> Result<(), truth_table_rs::error::TruthTableError> {
//! let mut table = TruthTable::new(2)?;
//! table.add_row(&[1, 1, 0])?;
//! assert_eq!(table.to_string(), "(~A+~B)");
//! assert!(!table.check(&[true, true])?);
//! assert!(table.check(&[false, true])?);
//! # Ok(())
//! # }
//! ```

use std::fmt::{Display, Formatter};

use log::debug;

use crate::bitset::BitSet;
use crate::cache::{cache_key, CacheStats, EvalCache};
use crate::error::{Result, TruthTableError};
use crate::form::NormalForm;
use crate::formula::Formula;
use crate::row::Row;

/// Smallest supported number of terms.
pub const MIN_TERMS: usize = 2;
/// Largest supported number of terms.
pub const MAX_TERMS: usize = 10;

/// Tuning knobs for a [`TruthTable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TableConfig {
    /// The evaluation cache starts with room for `2^cache_bits` entries.
    ///
    /// Values above `MAX_TERMS` are clamped: no table has more distinct
    /// assignments than that.
    pub cache_bits: usize,
    /// Memoise [`check`][TruthTable::check] results.
    pub caching: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            cache_bits: 10,
            caching: true,
        }
    }
}

/// Rows, output counts and the active form, updated together.
#[derive(Debug, Clone)]
struct State {
    rows: Vec<Row>,
    taken: BitSet,
    ones: usize,
    zeros: usize,
    form: NormalForm,
}

impl State {
    fn new(combinations: usize) -> Self {
        Self {
            rows: Vec::with_capacity(combinations),
            taken: BitSet::new(combinations),
            ones: 0,
            zeros: 0,
            form: NormalForm::SumOfProducts,
        }
    }

    fn accept(&mut self, row: Row) {
        let fresh = self.taken.insert(row.index());
        assert!(fresh, "Combination {} is already taken", row.combination());

        self.rows.push(row);
        if row.output() {
            self.ones += 1;
        } else {
            self.zeros += 1;
        }

        debug_assert_eq!(self.ones + self.zeros, self.rows.len());
        debug_assert_eq!(self.taken.len(), self.rows.len());
    }
}

pub struct TruthTable {
    terms: usize,
    combinations: usize,
    state: State,
    formula: Formula,
    cache: EvalCache,
    caching: bool,
}

impl TruthTable {
    /// Create an empty table over `terms` variables.
    ///
    /// Fails with [`TruthTableError::InvalidArity`] unless
    /// `MIN_TERMS <= terms <= MAX_TERMS`.
    pub fn new(terms: usize) -> Result<Self> {
        Self::with_config(terms, TableConfig::default())
    }

    pub fn with_config(terms: usize, config: TableConfig) -> Result<Self> {
        if !(MIN_TERMS..=MAX_TERMS).contains(&terms) {
            return Err(TruthTableError::InvalidArity { terms });
        }

        let combinations = 1 << terms;
        debug!(
            "new(terms = {}, combinations = {}, config = {:?})",
            terms, combinations, config
        );

        Ok(Self {
            terms,
            combinations,
            state: State::new(combinations),
            formula: Formula::new(terms),
            cache: EvalCache::new(config.cache_bits.min(MAX_TERMS)),
            caching: config.caching,
        })
    }

    /// Build a fully specified table from a function of the assignment.
    ///
    /// Rows are added in counting order, with position 0 as the most
    /// significant bit.
    ///
    /// ```
    /// use truth_table_rs::table::TruthTable;
    ///
    /// # fn main() -> Result<(), truth_table_rs::error::TruthTableError> {
    /// let mut xor = TruthTable::from_fn(2, |x| x[0] != x[1])?;
    /// assert!(xor.is_full());
    /// assert!(xor.check(&[true, false])?);
    /// assert!(!xor.check(&[true, true])?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_fn(terms: usize, f: impl Fn(&[bool]) -> bool) -> Result<Self> {
        let mut table = Self::new(terms)?;
        let mut assignment = vec![false; terms];
        for index in 0..table.combinations {
            for (position, value) in assignment.iter_mut().enumerate() {
                *value = (index >> (terms - 1 - position)) & 1 == 1;
            }
            let output = f(&assignment);
            table.add_row_bools(&assignment, output)?;
        }
        Ok(table)
    }
}

impl TruthTable {
    pub fn num_terms(&self) -> usize {
        self.terms
    }
    /// Number of possible input combinations, `2^N`.
    pub fn num_combinations(&self) -> usize {
        self.combinations
    }

    /// Number of accepted rows.
    pub fn len(&self) -> usize {
        self.state.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.state.rows.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.len() == self.combinations
    }

    /// Number of accepted rows with output 1.
    pub fn ones(&self) -> usize {
        self.state.ones
    }
    /// Number of accepted rows with output 0.
    pub fn zeros(&self) -> usize {
        self.state.zeros
    }

    pub fn normal_form(&self) -> NormalForm {
        self.state.form
    }

    /// Accepted rows, in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.state.rows
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Combination indices not covered by any row yet, in increasing order.
    pub fn missing_combinations(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.combinations).filter(|&i| !self.state.taken.contains(i))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl TruthTable {
    /// Add a row of `N + 1` terms: the input bits followed by the output bit.
    ///
    /// Fails without touching the table when it is already full, when the
    /// number of terms is not `N + 1`, when a term is not 0 or 1, or when the
    /// input combination has already been used.
    pub fn add_row(&mut self, terms: &[u8]) -> Result<()> {
        self.ensure_not_full()?;
        if terms.len() != self.terms + 1 {
            return Err(TruthTableError::ArityMismatch {
                expected: self.terms + 1,
                actual: terms.len(),
            });
        }
        let row = Row::from_terms(terms)?;
        self.insert(row)
    }

    /// Typed counterpart of [`add_row`][TruthTable::add_row].
    pub fn add_row_bools(&mut self, inputs: &[bool], output: bool) -> Result<()> {
        self.ensure_not_full()?;
        if inputs.len() != self.terms {
            return Err(TruthTableError::ArityMismatch {
                expected: self.terms + 1,
                actual: inputs.len() + 1,
            });
        }
        self.insert(Row::from_bools(inputs, output)?)
    }

    fn ensure_not_full(&self) -> Result<()> {
        if self.is_full() {
            return Err(TruthTableError::TableFull {
                capacity: self.combinations,
            });
        }
        Ok(())
    }

    fn insert(&mut self, row: Row) -> Result<()> {
        if self.state.taken.contains(row.index()) {
            return Err(TruthTableError::DuplicateRow {
                combination: row.combination(),
            });
        }

        // Validation is over: from here on the call cannot fail.
        self.cache.clear();

        if self.state.rows.is_empty() && !row.output() {
            debug!("add_row: first row has output 0, using {}", NormalForm::ProductOfSums);
            self.state.form = NormalForm::ProductOfSums;
        }

        self.state.accept(row);
        let contributed = self.formula.push_term(&row, self.state.form);
        debug!(
            "add_row(row = {}) -> ones = {}, zeros = {}, contributed = {}",
            row, self.state.ones, self.state.zeros, contributed
        );

        Ok(())
    }

    /// Move to the preferred normal form if the output counts call for it.
    ///
    /// Returns whether the form changed. A change rebuilds the formula from
    /// all rows and clears the cache in one step.
    fn rebalance(&mut self) -> bool {
        let current = self.state.form;
        let next = current.rebalanced(self.state.ones, self.state.zeros);
        if next == current {
            return false;
        }

        debug!(
            "rebalance: {} -> {} (ones = {}, zeros = {})",
            current, next, self.state.ones, self.state.zeros
        );
        self.state.form = next;
        self.formula.rebuild(&self.state.rows, next);
        self.cache.clear();
        true
    }

    /// Evaluate the function on `assignment`, one value per variable.
    ///
    /// Fails with [`TruthTableError::ArityMismatch`] if the assignment does
    /// not have exactly `N` values. Combinations that were never added are
    /// answered by the current formula: false under sum-of-products, true
    /// under product-of-sums.
    pub fn check(&mut self, assignment: &[bool]) -> Result<bool> {
        if assignment.len() != self.terms {
            return Err(TruthTableError::ArityMismatch {
                expected: self.terms,
                actual: assignment.len(),
            });
        }

        self.rebalance();

        if !self.caching {
            return Ok(self.formula.eval(assignment, self.state.form));
        }

        let key = cache_key(assignment);
        if let Some(result) = self.cache.get(&key) {
            return Ok(result);
        }

        let result = self.formula.eval(assignment, self.state.form);
        self.cache.insert(key, result);
        Ok(result)
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula.display(self.state.form))
    }
}

impl std::fmt::Debug for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruthTable")
            .field("terms", &self.terms)
            .field("rows", &self.len())
            .field("ones", &self.state.ones)
            .field("zeros", &self.state.zeros)
            .field("form", &self.state.form)
            .field("formula", &self.to_string())
            .finish()
    }
}
