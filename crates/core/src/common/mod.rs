//! Common types shared by the tape machine, the cell arithmetic engine and the dispatcher.
//!
//! This module provides:
//! 1. **Constants:** Tape geometry, cell width and default arithmetic limits.
//! 2. **Errors:** One `thiserror` enum per concern plus the umbrella `CalcError`.
//! 3. **Operators:** The closed operator set and its symbol/program-file mapping.
//! 4. **Values:** The numeric result or the division-by-zero sentinel.

/// Tape geometry, cell width and limit constants.
pub mod constants;

/// Error types for programs, execution, parsing, arithmetic and dispatch.
pub mod error;

/// The five supported operators.
pub mod operator;

/// Calculation result values.
pub mod value;

pub use constants::{CELL_BITS, CELL_SIZE, TAPE_SIZE};
pub use error::{
    ArithError, CalcError, ConfigError, LibraryError, MachineError, ParseNumberError, ProgramError,
};
pub use operator::Operator;
pub use value::Value;
