//! Elementary Boolean gates.
//!
//! All gates fold over every input with no early exit. Short-circuiting, where
//! it matters, is done by the caller (see [`Formula::eval`][crate::formula::Formula::eval]).

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateType {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
}

impl GateType {
    /// Evaluate the gate over all `inputs`.
    ///
    /// An empty input list yields the identity of the base gate
    /// (`true` for And, `false` for Or and Xor), negated for the inverted gates.
    pub fn eval(self, inputs: &[bool]) -> bool {
        match self {
            GateType::And => inputs.iter().fold(true, |acc, &x| acc & x),
            GateType::Or => inputs.iter().fold(false, |acc, &x| acc | x),
            GateType::Xor => inputs.iter().fold(false, |acc, &x| acc != x),
            GateType::Nand => !GateType::And.eval(inputs),
            GateType::Nor => !GateType::Or.eval(inputs),
            GateType::Xnor => !GateType::Xor.eval(inputs),
        }
    }

    /// The gate computing the complement of this one.
    pub fn inverted(self) -> GateType {
        match self {
            GateType::And => GateType::Nand,
            GateType::Or => GateType::Nor,
            GateType::Xor => GateType::Xnor,
            GateType::Nand => GateType::And,
            GateType::Nor => GateType::Or,
            GateType::Xnor => GateType::Xor,
        }
    }
}

pub fn and(inputs: &[bool]) -> bool {
    GateType::And.eval(inputs)
}

pub fn or(inputs: &[bool]) -> bool {
    GateType::Or.eval(inputs)
}

pub fn not(input: bool) -> bool {
    !input
}

pub fn xor(inputs: &[bool]) -> bool {
    GateType::Xor.eval(inputs)
}

pub fn nand(inputs: &[bool]) -> bool {
    GateType::Nand.eval(inputs)
}

pub fn nor(inputs: &[bool]) -> bool {
    GateType::Nor.eval(inputs)
}

pub fn xnor(inputs: &[bool]) -> bool {
    GateType::Xnor.eval(inputs)
}

/// Check whether `a` equals `b` or any of `rest`.
pub fn any_equal<T: PartialEq>(a: &T, b: &T, rest: &[T]) -> bool {
    a == b || rest.contains(a)
}

/// Gates over integer bits.
///
/// `and`/`or` are bitwise folds, `not` maps `1` to `0` and anything else to `1`.
pub mod int {
    pub fn and(inputs: &[u8]) -> u8 {
        inputs.iter().fold(1, |acc, &x| acc & x)
    }

    pub fn or(inputs: &[u8]) -> u8 {
        inputs.iter().fold(0, |acc, &x| acc | x)
    }

    pub fn not(input: u8) -> u8 {
        if input == 1 {
            0
        } else {
            1
        }
    }

    pub fn xor(inputs: &[u8]) -> u8 {
        inputs.iter().fold(0, |acc, &x| u8::from(acc != x))
    }

    pub fn nand(inputs: &[u8]) -> u8 {
        not(and(inputs))
    }

    pub fn nor(inputs: &[u8]) -> u8 {
        not(or(inputs))
    }

    pub fn xnor(inputs: &[u8]) -> u8 {
        not(xor(inputs))
    }
}

/// Method-call sugar for the gates: `a.and(b)`, `a.or(b)`, `a.not()`.
pub trait Gates {
    fn and(self, other: bool) -> bool;
    fn or(self, other: bool) -> bool;
    fn xor(self, other: bool) -> bool;
    fn not(self) -> bool;
}

impl Gates for bool {
    fn and(self, other: bool) -> bool {
        and(&[self, other])
    }

    fn or(self, other: bool) -> bool {
        or(&[self, other])
    }

    fn xor(self, other: bool) -> bool {
        xor(&[self, other])
    }

    fn not(self) -> bool {
        not(self)
    }
}
