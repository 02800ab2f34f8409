//! Machine geometry and arithmetic limits.

/// Number of cells on a freshly constructed tape.
pub const TAPE_SIZE: usize = 30_000;

/// Number of distinct values a cell can hold; every cell write wraps modulo this.
pub const CELL_SIZE: u16 = 256;

/// Width of one cell in bits (`CELL_SIZE == 1 << CELL_BITS`).
pub const CELL_BITS: u32 = 8;

/// Default ceiling on the exponent accepted by big-number power.
pub const MAX_EXPONENT: u64 = 1000;

/// Default ceiling on the estimated bit length of a big-number power result.
pub const MAX_RESULT_BITS: u64 = 1_000_000;

/// Every byte the tape machine treats as an instruction; anything else is a comment.
pub const INSTRUCTION_SYMBOLS: &[u8; 8] = b"><+-.,[]";
