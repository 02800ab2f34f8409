//! Cell arithmetic engine.
//!
//! This module reproduces the five operations over [`BigNumber`]s with the
//! same carry/borrow discipline the tape machine uses on single cells, but
//! without a cell or tape bound.
//!
//! Operations are organized into submodules by category:
//! - [`number`]:         the base-256 cell representation and decimal conversion
//! - [`additive`]:       add, sub, `checked_sub`
//! - [`multiplicative`]: mul, pow
//! - [`division`]:       div, `div_rem`

/// Addition and subtraction.
pub mod additive;

/// Long division.
pub mod division;

/// Multiplication and exponentiation.
pub mod multiplicative;

/// The cell-sequence number type.
pub mod number;

use tracing::debug;

pub use additive::{add, checked_sub, sub};
pub use division::{div, div_rem};
pub use multiplicative::{mul, pow};
pub use number::BigNumber;

use crate::common::{ArithError, Operator, Value};
use crate::config::ArithConfig;

/// Dispatch point for big-number operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellAlu;

impl CellAlu {
    /// Applies `op` to `a` and `b`.
    ///
    /// For [`Operator::Pow`], `b` is the exponent. Power is the only operation
    /// that can refuse: exponents above `limits.max_exponent`, or an estimated
    /// result above `limits.max_result_bits`, are rejected before any work is
    /// done. Bases 0 and 1 never grow and skip both checks.
    ///
    /// # Errors
    ///
    /// [`ArithError`] for a power outside the configured limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bfcalc_core::arith::CellAlu;
    /// use bfcalc_core::config::ArithConfig;
    /// use bfcalc_core::{BigNumber, Operator, Value};
    ///
    /// let limits = ArithConfig::default();
    /// let a = BigNumber::from(999u32);
    /// let sum = CellAlu::execute(Operator::Add, &a, &a, &limits).unwrap();
    /// assert_eq!(sum.to_string(), "1998");
    ///
    /// let inf = CellAlu::execute(Operator::Div, &a, &BigNumber::zero(), &limits).unwrap();
    /// assert_eq!(inf, Value::Infinity);
    /// ```
    pub fn execute(
        op: Operator,
        a: &BigNumber,
        b: &BigNumber,
        limits: &ArithConfig,
    ) -> Result<Value, ArithError> {
        debug!(op = %op, lhs_cells = a.len(), rhs_cells = b.len(), "cell arithmetic");

        let value = match op {
            Operator::Add => Value::Finite(add(a, b)),
            Operator::Sub => Value::Finite(sub(a, b)),
            Operator::Mul => Value::Finite(mul(a, b)),
            Operator::Div => div(a, b),
            Operator::Pow => Value::Finite(Self::power(a, b, limits)?),
        };
        Ok(value)
    }

    fn power(base: &BigNumber, exponent: &BigNumber, limits: &ArithConfig) -> Result<BigNumber, ArithError> {
        if exponent.is_zero() {
            return Ok(BigNumber::one());
        }
        if base.is_zero() || base.is_one() {
            return Ok(base.clone());
        }

        let requested = exponent.to_u64().unwrap_or(u64::MAX);
        if requested > limits.max_exponent {
            return Err(ArithError::ExponentTooLarge {
                exponent: requested,
                limit: limits.max_exponent,
            });
        }

        let estimated_bits = requested.saturating_mul(base.bit_len());
        if estimated_bits > limits.max_result_bits {
            return Err(ArithError::ResultTooLarge {
                estimated_bits,
                limit: limits.max_result_bits,
            });
        }

        Ok(pow(base, requested))
    }
}
