//! Normal forms and per-variable markers.
//!
//! A formula is either a disjunction of minterms ([`NormalForm::SumOfProducts`])
//! or a conjunction of maxterms ([`NormalForm::ProductOfSums`]). The two are
//! De Morgan duals: every operation here has a mirrored counterpart.

use std::fmt::{Display, Formatter};

use crate::gate;

/// Polarity of a variable inside a term.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Marker {
    /// The variable appears as is.
    Plain,
    /// The variable appears negated.
    Complement,
}

impl Marker {
    /// Value of the literal for the given variable value.
    pub fn literal(self, value: bool) -> bool {
        match self {
            Marker::Plain => value,
            Marker::Complement => gate::not(value),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum NormalForm {
    /// OR of AND-terms, one per row with output 1.
    #[default]
    SumOfProducts,
    /// AND of OR-terms, one per row with output 0.
    ProductOfSums,
}

impl NormalForm {
    /// The form needing fewer terms for the given output counts.
    ///
    /// Ties go to [`NormalForm::SumOfProducts`].
    pub fn preferred(ones: usize, zeros: usize) -> Self {
        if zeros >= ones {
            NormalForm::SumOfProducts
        } else {
            NormalForm::ProductOfSums
        }
    }

    /// Transition function of the re-balancing state machine.
    ///
    /// Stays put while no row of the opposite polarity has been seen yet,
    /// otherwise moves to the [preferred][NormalForm::preferred] form.
    pub fn rebalanced(self, ones: usize, zeros: usize) -> Self {
        let undecided = match self {
            NormalForm::SumOfProducts => zeros == 0,
            NormalForm::ProductOfSums => ones == 0,
        };
        if undecided {
            self
        } else {
            NormalForm::preferred(ones, zeros)
        }
    }

    /// Output value of the rows that contribute a term.
    pub fn significant_output(self) -> bool {
        match self {
            NormalForm::SumOfProducts => true,
            NormalForm::ProductOfSums => false,
        }
    }

    /// Marker for an input bit of a contributing row.
    ///
    /// Minterms keep true bits plain, maxterms keep false bits plain.
    pub fn marker(self, bit: bool) -> Marker {
        if bit == self.significant_output() {
            Marker::Plain
        } else {
            Marker::Complement
        }
    }

    /// Seed of the fold over literals inside a term.
    pub fn term_seed(self) -> bool {
        match self {
            NormalForm::SumOfProducts => true,
            NormalForm::ProductOfSums => false,
        }
    }

    /// Seed of the fold over terms, which is also the value of an empty formula.
    pub fn formula_seed(self) -> bool {
        gate::not(self.term_seed())
    }

    /// Combine a literal into a term: AND for minterms, OR for maxterms.
    pub fn join_literal(self, acc: bool, literal: bool) -> bool {
        match self {
            NormalForm::SumOfProducts => gate::and(&[acc, literal]),
            NormalForm::ProductOfSums => gate::or(&[acc, literal]),
        }
    }

    /// Combine a term into the formula: OR of minterms, AND of maxterms.
    pub fn join_term(self, acc: bool, term: bool) -> bool {
        match self {
            NormalForm::SumOfProducts => gate::or(&[acc, term]),
            NormalForm::ProductOfSums => gate::and(&[acc, term]),
        }
    }

    /// Whether a term with this value fixes the whole formula.
    pub fn is_decisive(self, term: bool) -> bool {
        term != self.formula_seed()
    }

    /// Separator between literals inside a rendered term.
    pub fn literal_separator(self) -> char {
        match self {
            NormalForm::SumOfProducts => '.',
            NormalForm::ProductOfSums => '+',
        }
    }

    /// Separator between rendered terms.
    pub fn term_separator(self) -> char {
        match self {
            NormalForm::SumOfProducts => '+',
            NormalForm::ProductOfSums => '.',
        }
    }
}

impl Display for NormalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalForm::SumOfProducts => write!(f, "SOP"),
            NormalForm::ProductOfSums => write!(f, "POS"),
        }
    }
}
