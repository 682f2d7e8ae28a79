//! Fixed-arity truth table rows.

use std::fmt::{Display, Formatter};

use crate::error::{Result, TruthTableError};

/// Largest arity a packed row can hold.
pub const MAX_ARITY: usize = 16;

fn check_arity(inputs: usize) -> Result<()> {
    if inputs > MAX_ARITY {
        return Err(TruthTableError::ArityMismatch {
            expected: MAX_ARITY + 1,
            actual: inputs + 1,
        });
    }
    Ok(())
}

/// An accepted row: `N` input bits plus one output bit.
///
/// Inputs are packed into an integer with position 0 as the most significant
/// bit, so the packed value is also the row's combination index.
///
/// # Invariants
///
/// - `arity` is at most 16 (tables cap it at 10)
/// - Bits above `arity` are always zero
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Row {
    inputs: u16,
    arity: u8,
    output: bool,
}

impl Row {
    /// Build a row from `N + 1` integer terms, the last one being the output.
    ///
    /// Fails with [`TruthTableError::ArityMismatch`] on an empty slice or more
    /// than `MAX_ARITY` inputs, and with [`TruthTableError::InvalidBit`] if any
    /// term is not 0 or 1.
    pub fn from_terms(terms: &[u8]) -> Result<Self> {
        let Some((&output, inputs)) = terms.split_last() else {
            return Err(TruthTableError::ArityMismatch {
                expected: 1,
                actual: 0,
            });
        };
        check_arity(inputs.len())?;

        if let Some((position, &value)) = terms.iter().enumerate().find(|&(_, &t)| t > 1) {
            return Err(TruthTableError::InvalidBit { position, value });
        }

        Ok(Self {
            inputs: inputs.iter().fold(0u16, |acc, &bit| (acc << 1) | bit as u16),
            arity: inputs.len() as u8,
            output: output == 1,
        })
    }

    /// Build a row from typed input bits and an output.
    pub fn from_bools(inputs: &[bool], output: bool) -> Result<Self> {
        check_arity(inputs.len())?;

        Ok(Self {
            inputs: inputs.iter().fold(0u16, |acc, &bit| (acc << 1) | bit as u16),
            arity: inputs.len() as u8,
            output,
        })
    }

    /// Number of input bits.
    pub fn arity(&self) -> usize {
        self.arity as usize
    }

    /// Index of the input combination, in `0..2^arity`.
    pub fn index(&self) -> usize {
        self.inputs as usize
    }

    /// Input bit at `position` (0 is variable `A`).
    pub fn input(&self, position: usize) -> bool {
        assert!(position < self.arity(), "Position {} out of range", position);
        (self.inputs >> (self.arity() - 1 - position)) & 1 == 1
    }

    /// Input bits in position order.
    pub fn inputs(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.arity()).map(|i| self.input(i))
    }

    pub fn output(&self) -> bool {
        self.output
    }

    /// Input bits rendered as `0`/`1` characters, e.g. `"110"`.
    pub fn combination(&self) -> String {
        self.inputs().map(|b| if b { '1' } else { '0' }).collect()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.combination(), self.output as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_terms() {
        let row = Row::from_terms(&[1, 1, 0, 1]).unwrap();
        assert_eq!(row.arity(), 3);
        assert_eq!(row.index(), 0b110);
        assert!(row.input(0));
        assert!(row.input(1));
        assert!(!row.input(2));
        assert!(row.output());
        assert_eq!(row.inputs().collect::<Vec<_>>(), vec![true, true, false]);
    }

    #[test]
    fn test_row_invalid_bit() {
        let err = Row::from_terms(&[1, 2, 0]).unwrap_err();
        assert_eq!(err, TruthTableError::InvalidBit { position: 1, value: 2 });
    }

    #[test]
    fn test_row_from_bools_matches_terms() {
        let a = Row::from_bools(&[false, true], false).unwrap();
        let b = Row::from_terms(&[0, 1, 0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_arity_out_of_range() {
        assert_eq!(
            Row::from_terms(&[]).unwrap_err(),
            TruthTableError::ArityMismatch {
                expected: 1,
                actual: 0
            }
        );
        assert_eq!(
            Row::from_terms(&[0; 18]).unwrap_err(),
            TruthTableError::ArityMismatch {
                expected: 17,
                actual: 18
            }
        );
        assert!(Row::from_terms(&[1; 17]).is_ok());
        assert!(Row::from_bools(&[true; 17], true).is_err());
    }

    #[test]
    fn test_row_display() {
        let row = Row::from_terms(&[1, 0, 1, 0]).unwrap();
        assert_eq!(row.combination(), "101");
        assert_eq!(row.to_string(), "101|0");
    }
}
