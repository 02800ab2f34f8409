//! Base-256 cell numbers.
//!
//! A [`BigNumber`] is a little-endian sequence of 8-bit cells: index 0 is the
//! least significant cell, each cell is one base-256 digit. The sequence is
//! never empty and never carries a most-significant zero cell, except for the
//! single cell `[0]` that represents zero.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::common::{CELL_BITS, ParseNumberError};

/// Largest power of ten whose chunks still fit the short-division accumulator.
const DECIMAL_CHUNK: u32 = 10_000;
/// Digits per `DECIMAL_CHUNK`.
const DECIMAL_CHUNK_DIGITS: usize = 4;

/// Arbitrary-precision non-negative integer stored as base-256 cells.
///
/// # Examples
///
/// ```
/// use bfcalc_core::BigNumber;
///
/// let n: BigNumber = "65536".parse().unwrap();
/// assert_eq!(n.cells(), &[0, 0, 1]);
/// assert_eq!(n.to_string(), "65536");
/// assert_eq!(BigNumber::from(255u8).cells(), &[255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigNumber {
    cells: Vec<u8>,
}

impl BigNumber {
    /// The number 0 (`[0]`).
    pub fn zero() -> Self {
        Self { cells: vec![0] }
    }

    /// The number 1 (`[1]`).
    pub fn one() -> Self {
        Self { cells: vec![1] }
    }

    /// Builds a number from little-endian cells, trimming most-significant zero cells.
    pub fn from_cells(mut cells: Vec<u8>) -> Self {
        trim(&mut cells);
        Self { cells }
    }

    /// Little-endian cells, least significant first.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells in the minimal representation (at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; zero is the single cell `[0]`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// True for zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.cells == [0]
    }

    /// True for one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.cells == [1]
    }

    /// Least significant cell, i.e. the value modulo 256.
    #[inline]
    pub fn low_cell(&self) -> u8 {
        self.cells[0]
    }

    /// Number of significant bits (0 for zero).
    pub fn bit_len(&self) -> u64 {
        let top = self.cells[self.cells.len() - 1];
        let full_cells = (self.cells.len() - 1) as u64;
        full_cells * u64::from(CELL_BITS) + u64::from(u8::BITS - top.leading_zeros())
    }

    /// Value as `u64`, or `None` if it needs more than eight cells.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    /// Value as `u128`, or `None` if it needs more than sixteen cells.
    pub fn to_u128(&self) -> Option<u128> {
        if self.cells.len() > 16 {
            return None;
        }
        Some(
            self.cells
                .iter()
                .rev()
                .fold(0u128, |acc, &cell| (acc << CELL_BITS) | u128::from(cell)),
        )
    }

    /// Shifts one cell in at the least significant end: `self = self * 256 + cell`.
    pub(crate) fn shift_in(&mut self, cell: u8) {
        if self.is_zero() {
            self.cells[0] = cell;
        } else {
            self.cells.insert(0, cell);
        }
    }

    /// `self = self * factor + addend` for small factors, in place.
    fn mul_small_add(&mut self, factor: u32, addend: u32) {
        let mut carry = addend;
        for cell in &mut self.cells {
            let acc = u32::from(*cell) * factor + carry;
            *cell = acc as u8;
            carry = acc >> CELL_BITS;
        }
        while carry != 0 {
            self.cells.push(carry as u8);
            carry >>= CELL_BITS;
        }
        trim(&mut self.cells);
    }

    /// Short division by a small divisor, in place, most significant cell first.
    /// Returns the remainder.
    fn div_small(&mut self, divisor: u32) -> u32 {
        let mut remainder = 0u32;
        for cell in self.cells.iter_mut().rev() {
            let acc = (remainder << CELL_BITS) | u32::from(*cell);
            *cell = (acc / divisor) as u8;
            remainder = acc % divisor;
        }
        trim(&mut self.cells);
        remainder
    }
}

/// Drops most-significant zero cells, keeping at least one cell.
fn trim(cells: &mut Vec<u8>) {
    let len = cells.iter().rposition(|&c| c != 0).map_or(1, |i| i + 1);
    cells.truncate(len);
    if cells.is_empty() {
        cells.push(0);
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cells
            .len()
            .cmp(&other.cells.len())
            .then_with(|| self.cells.iter().rev().cmp(other.cells.iter().rev()))
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u128> for BigNumber {
    /// Splits by repeated division by 256, least significant cell first.
    fn from(mut n: u128) -> Self {
        let mut cells = Vec::with_capacity(16);
        while n > 0 {
            cells.push((n & 0xFF) as u8);
            n >>= CELL_BITS;
        }
        Self::from_cells(cells)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigNumber {
                fn from(n: $t) -> Self {
                    Self::from(u128::from(n))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);

impl FromStr for BigNumber {
    type Err = ParseNumberError;

    /// Parses a non-negative decimal integer of any length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let mut n = Self::zero();
        for (index, digit) in s.chars().enumerate() {
            let Some(value) = digit.to_digit(10) else {
                return Err(ParseNumberError::InvalidDigit { digit, index });
            };
            n.mul_small_add(10, value);
        }
        Ok(n)
    }
}

impl fmt::Display for BigNumber {
    /// Writes the decimal representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.clone();
        let mut chunks = Vec::new();
        loop {
            chunks.push(rest.div_small(DECIMAL_CHUNK));
            if rest.is_zero() {
                break;
            }
        }

        let mut digits = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            digits.push_str(&first.to_string());
        }
        for chunk in iter {
            digits.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
        }
        f.pad_integral(true, "", &digits)
    }
}
