//! Long division.
//!
//! The dividend is consumed most significant cell first. Each step shifts the
//! next cell into the running remainder and subtracts the divisor from it as
//! many times as it fits; that count (at most 255) is the next quotient cell.

use super::additive::checked_sub;
use super::number::BigNumber;
use crate::common::Value;

/// Quotient and remainder of `a / b`, or `None` for a zero divisor.
pub fn div_rem(a: &BigNumber, b: &BigNumber) -> Option<(BigNumber, BigNumber)> {
    if b.is_zero() {
        return None;
    }
    if a < b {
        return Some((BigNumber::zero(), a.clone()));
    }

    let mut quotient = Vec::with_capacity(a.len());
    let mut remainder = BigNumber::zero();
    for &cell in a.cells().iter().rev() {
        remainder.shift_in(cell);
        let mut digit = 0u8;
        while let Some(rest) = checked_sub(&remainder, b) {
            remainder = rest;
            digit += 1;
        }
        quotient.push(digit);
    }
    quotient.reverse();

    Some((BigNumber::from_cells(quotient), remainder))
}

/// Floor of `a / b`; a zero divisor yields [`Value::Infinity`].
pub fn div(a: &BigNumber, b: &BigNumber) -> Value {
    div_rem(a, b).map_or(Value::Infinity, |(q, _)| Value::Finite(q))
}
