//! Multiplication and exponentiation.

use super::number::BigNumber;
use crate::common::CELL_BITS;

/// `a * b` by the full cross product of cells.
///
/// Every cell of `a` is multiplied against every cell of `b` into a result of
/// `len(a) + len(b)` cells; the carry of each pass lands in the cell just past
/// that pass, so no cell ever exceeds 255 between passes. The 16-bit
/// accumulator tops out at `255 * 255 + 255 + 255 = 65535`.
pub fn mul(a: &BigNumber, b: &BigNumber) -> BigNumber {
    if a.is_zero() || b.is_zero() {
        return BigNumber::zero();
    }

    let (a, b) = (a.cells(), b.cells());
    let mut result = vec![0u8; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u16;
        for (j, &y) in b.iter().enumerate() {
            let acc = u16::from(x) * u16::from(y) + u16::from(result[i + j]) + carry;
            result[i + j] = acc as u8;
            carry = acc >> CELL_BITS;
        }
        result[i + b.len()] = carry as u8;
    }

    BigNumber::from_cells(result)
}

/// `base ^ exponent` by repeated multiplication; `x ^ 0 = 1` for every `x`, zero included.
///
/// Runs `exponent` multiplications. Callers bound the exponent (see
/// [`ArithConfig`](crate::config::ArithConfig)).
pub fn pow(base: &BigNumber, exponent: u64) -> BigNumber {
    if exponent == 0 {
        return BigNumber::one();
    }
    if base.is_zero() || base.is_one() {
        return base.clone();
    }

    let mut result = base.clone();
    for _ in 1..exponent {
        result = mul(&result, base);
    }
    result
}
