//! Operator set.
//!
//! The calculator supports exactly five binary operators. Each one is bound to
//! a tape program (8-bit mode) and to a cell arithmetic routine (big-number
//! mode); the symbol is only consulted when text is parsed.

use std::fmt;

use super::error::CalcError;

/// A supported binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (floor division; a zero divisor yields infinity)
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Order in which an expression is searched for an operator symbol.
    pub const PARSE_ORDER: [Self; 5] = [Self::Pow, Self::Mul, Self::Div, Self::Add, Self::Sub];

    /// Resolves an operator symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnsupportedOperator`] for anything other than `+ - * / ^`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bfcalc_core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^').unwrap(), Operator::Pow);
    /// assert!(Operator::from_symbol('%').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, CalcError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            '^' => Ok(Self::Pow),
            other => Err(CalcError::UnsupportedOperator(other)),
        }
    }

    /// The operator's symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// File name of the operator's program inside a program directory.
    pub const fn module_file(self) -> &'static str {
        match self {
            Self::Add => "addition.bf",
            Self::Sub => "subtraction.bf",
            Self::Mul => "multiplication.bf",
            Self::Div => "division.bf",
            Self::Pow => "power.bf",
        }
    }

    /// Position in [`Operator::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Add => 0,
            Self::Sub => 1,
            Self::Mul => 2,
            Self::Div => 3,
            Self::Pow => 4,
        }
    }

    /// Human-readable name, used in help text and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Pow => "power",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
