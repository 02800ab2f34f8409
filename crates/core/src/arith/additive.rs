//! Addition and subtraction with cell-by-cell carry and borrow.
//!
//! Both routines walk the operands from the least significant cell upward,
//! exactly as a chain of single-cell tape runs would, passing a carry (or
//! borrow) of 0 or 1 into the next cell.

use tracing::debug;

use super::number::BigNumber;
use crate::common::CELL_SIZE;

/// `a + b`.
///
/// The result grows by one cell when a carry leaves the top cell.
pub fn add(a: &BigNumber, b: &BigNumber) -> BigNumber {
    let (long, short) = if a.len() >= b.len() {
        (a.cells(), b.cells())
    } else {
        (b.cells(), a.cells())
    };

    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u16;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let mut total = u16::from(x) + u16::from(y) + carry;
        if total >= CELL_SIZE {
            total -= CELL_SIZE;
            carry = 1;
        } else {
            carry = 0;
        }
        result.push(total as u8);
    }
    if carry != 0 {
        result.push(1);
    }

    BigNumber::from_cells(result)
}

/// `a - b`, or `None` when `b > a`.
pub fn checked_sub(a: &BigNumber, b: &BigNumber) -> Option<BigNumber> {
    if a < b {
        return None;
    }

    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0u16;
    for (i, &x) in a.cells().iter().enumerate() {
        let subtrahend = u16::from(b.cells().get(i).copied().unwrap_or(0)) + borrow;
        let minuend = u16::from(x);
        let diff = if minuend >= subtrahend {
            borrow = 0;
            minuend - subtrahend
        } else {
            borrow = 1;
            minuend + CELL_SIZE - subtrahend
        };
        result.push(diff as u8);
    }

    Some(BigNumber::from_cells(result))
}

/// `a - b` over the unsigned domain.
///
/// A subtrahend larger than the minuend has no unsigned result; the
/// difference saturates to zero.
pub fn sub(a: &BigNumber, b: &BigNumber) -> BigNumber {
    checked_sub(a, b).unwrap_or_else(|| {
        debug!(
            minuend_cells = a.len(),
            subtrahend_cells = b.len(),
            "subtraction below zero saturated"
        );
        BigNumber::zero()
    })
}
