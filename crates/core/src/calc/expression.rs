//! Expression splitting.

use std::fmt;
use std::str::FromStr;

use crate::arith::BigNumber;
use crate::common::{CalcError, Operator};

/// A single `<number><operator><number>` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The operator.
    pub op: Operator,
    /// Left operand (the base for `^`).
    pub lhs: BigNumber,
    /// Right operand (the exponent for `^`).
    pub rhs: BigNumber,
}

impl FromStr for Expression {
    type Err = CalcError;

    /// Parses an expression such as `"999 + 999"`.
    ///
    /// Whitespace is ignored. Operators are tried in the order `^ * / + -`; the
    /// text is split at the first occurrence and both halves must be
    /// non-negative decimal integers, otherwise the next operator is tried.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        for op in Operator::PARSE_ORDER {
            let Some((lhs, rhs)) = compact.split_once(op.symbol()) else {
                continue;
            };
            if let (Ok(lhs), Ok(rhs)) = (lhs.parse(), rhs.parse()) {
                return Ok(Self { op, lhs, rhs });
            }
        }

        Err(CalcError::Parse {
            expression: compact,
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.lhs, self.op, self.rhs)
    }
}
