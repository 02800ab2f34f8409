//! Calculation results.

use std::fmt;

use crate::arith::BigNumber;

/// Outcome of one calculation.
///
/// Division by zero is a defined result in both modes, so it is modelled as a
/// variant rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An exact non-negative integer.
    Finite(BigNumber),
    /// The division-by-zero sentinel; displays as `inf`.
    Infinity,
}

impl Value {
    /// Returns the number, or `None` for the infinity sentinel.
    pub const fn as_finite(&self) -> Option<&BigNumber> {
        match self {
            Self::Finite(n) => Some(n),
            Self::Infinity => None,
        }
    }

    /// True for the division-by-zero sentinel.
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinity)
    }
}

impl From<BigNumber> for Value {
    fn from(n: BigNumber) -> Self {
        Self::Finite(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => fmt::Display::fmt(n, f),
            Self::Infinity => f.write_str("inf"),
        }
    }
}
