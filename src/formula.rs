//! Canonical formula derived from the rows of a truth table.
//!
//! The formula is a flat sequence of [`Marker`]s, one per (term, variable)
//! pair, grouped implicitly in blocks of `arity` markers. Each block is a
//! minterm or a maxterm depending on the active [`NormalForm`]; the form
//! itself is not stored here and is passed in by the owner.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::form::{Marker, NormalForm};
use crate::row::Row;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Formula {
    arity: usize,
    markers: Vec<Marker>,
}

impl Formula {
    pub fn new(arity: usize) -> Self {
        assert_ne!(arity, 0, "Formula arity should not be zero");
        Self {
            arity,
            markers: Vec::new(),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of terms (blocks).
    pub fn num_terms(&self) -> usize {
        self.markers.len() / self.arity
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterate over the terms, each a slice of `arity` markers.
    pub fn terms(&self) -> impl Iterator<Item = &[Marker]> {
        self.markers.chunks_exact(self.arity)
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Append the term contributed by `row` under `form`.
    ///
    /// Rows whose output does not match the form's significant output
    /// contribute nothing. Returns whether a term was appended.
    pub fn push_term(&mut self, row: &Row, form: NormalForm) -> bool {
        assert_eq!(row.arity(), self.arity, "Row arity does not match formula");

        if row.output() != form.significant_output() {
            return false;
        }
        self.markers.extend(row.inputs().map(|bit| form.marker(bit)));
        true
    }

    /// Replace the whole formula by replaying `rows` in order under `form`.
    pub fn rebuild<'a>(&mut self, rows: impl IntoIterator<Item = &'a Row>, form: NormalForm) {
        self.clear();
        for row in rows {
            self.push_term(row, form);
        }
        debug!("rebuild(form = {}) -> {} terms", form, self.num_terms());
    }

    /// Evaluate the formula on `assignment` under `form`.
    ///
    /// Stops at the first term that decides the result: a true minterm or a
    /// false maxterm. An empty formula yields [`NormalForm::formula_seed`].
    pub fn eval(&self, assignment: &[bool], form: NormalForm) -> bool {
        assert_eq!(
            assignment.len(),
            self.arity,
            "Assignment length does not match formula arity"
        );

        let mut result = form.formula_seed();
        for term in self.terms() {
            let value = term
                .iter()
                .zip(assignment)
                .fold(form.term_seed(), |acc, (marker, &x)| {
                    form.join_literal(acc, marker.literal(x))
                });
            result = form.join_term(result, value);
            if form.is_decisive(value) {
                break;
            }
        }
        result
    }

    /// Render the formula as text, e.g. `(A.B)+(A.~B)` or `(~A+~B)`.
    pub fn render(&self, form: NormalForm) -> String {
        self.display(form).to_string()
    }

    /// A [`Display`] adapter rendering the formula under `form`.
    pub fn display(&self, form: NormalForm) -> FormulaDisplay<'_> {
        FormulaDisplay {
            formula: self,
            form,
        }
    }
}

/// Letter naming the variable at `position`: `A`, `B`, `C`, ...
pub fn variable_name(position: usize) -> char {
    assert!(position < 26, "Variable position {} has no letter", position);
    (b'A' + position as u8) as char
}

pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    form: NormalForm,
}

impl Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, term) in self.formula.terms().enumerate() {
            if i > 0 {
                write!(f, "{}", self.form.term_separator())?;
            }
            write!(f, "(")?;
            for (position, marker) in term.iter().enumerate() {
                if position > 0 {
                    write!(f, "{}", self.form.literal_separator())?;
                }
                if *marker == Marker::Complement {
                    write!(f, "~")?;
                }
                write!(f, "{}", variable_name(position))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::form::NormalForm::{ProductOfSums as Pos, SumOfProducts as Sop};

    fn row(terms: &[u8]) -> Row {
        Row::from_terms(terms).unwrap()
    }

    #[test]
    fn test_push_term_sop() {
        let mut formula = Formula::new(2);
        assert!(formula.push_term(&row(&[1, 0, 1]), Sop));
        assert!(!formula.push_term(&row(&[1, 1, 0]), Sop));
        assert_eq!(formula.markers(), &[Marker::Plain, Marker::Complement]);
        assert_eq!(formula.num_terms(), 1);
    }

    #[test]
    fn test_push_term_pos() {
        let mut formula = Formula::new(3);
        assert!(formula.push_term(&row(&[1, 0, 1, 0]), Pos));
        assert!(!formula.push_term(&row(&[0, 0, 0, 1]), Pos));
        assert_eq!(
            formula.markers(),
            &[Marker::Complement, Marker::Plain, Marker::Complement]
        );
    }

    #[test]
    fn test_render() {
        let mut formula = Formula::new(2);
        formula.push_term(&row(&[1, 1, 1]), Sop);
        formula.push_term(&row(&[1, 0, 1]), Sop);
        assert_eq!(formula.render(Sop), "(A.B)+(A.~B)");

        let mut formula = Formula::new(2);
        formula.push_term(&row(&[1, 1, 0]), Pos);
        assert_eq!(formula.render(Pos), "(~A+~B)");

        let mut formula = Formula::new(3);
        formula.push_term(&row(&[0, 1, 0, 0]), Pos);
        formula.push_term(&row(&[1, 1, 1, 0]), Pos);
        assert_eq!(formula.render(Pos), "(A+~B+C).(~A+~B+~C)");
    }

    #[test]
    fn test_render_empty() {
        let formula = Formula::new(4);
        assert_eq!(formula.render(Sop), "");
        assert_eq!(formula.render(Pos), "");
    }

    #[test]
    fn test_eval_sop() {
        // (A.~B)+(~A.B)
        let mut formula = Formula::new(2);
        formula.push_term(&row(&[1, 0, 1]), Sop);
        formula.push_term(&row(&[0, 1, 1]), Sop);
        assert!(!formula.eval(&[false, false], Sop));
        assert!(formula.eval(&[false, true], Sop));
        assert!(formula.eval(&[true, false], Sop));
        assert!(!formula.eval(&[true, true], Sop));
    }

    #[test]
    fn test_eval_pos() {
        // (~A+~B).(A+B)
        let mut formula = Formula::new(2);
        formula.push_term(&row(&[1, 1, 0]), Pos);
        formula.push_term(&row(&[0, 0, 0]), Pos);
        assert!(!formula.eval(&[false, false], Pos));
        assert!(formula.eval(&[false, true], Pos));
        assert!(formula.eval(&[true, false], Pos));
        assert!(!formula.eval(&[true, true], Pos));
    }

    #[test]
    fn test_eval_empty_is_seed() {
        let formula = Formula::new(2);
        assert!(!formula.eval(&[true, true], Sop));
        assert!(formula.eval(&[true, true], Pos));
    }

    #[test]
    fn test_rebuild() {
        let rows = [row(&[1, 1, 0]), row(&[0, 1, 1]), row(&[0, 0, 1])];
        let mut formula = Formula::new(2);
        formula.rebuild(&rows, Pos);
        assert_eq!(formula.render(Pos), "(~A+~B)");
        formula.rebuild(&rows, Sop);
        assert_eq!(formula.render(Sop), "(~A.B)+(~A.~B)");
    }
}
