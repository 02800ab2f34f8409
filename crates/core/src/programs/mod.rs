//! Operator programs.
//!
//! Each operator has a pre-authored tape program that reads two bytes (`a`,
//! then `b`) and writes exactly one byte:
//!
//! | Operator | File                | Output                         |
//! |----------|---------------------|--------------------------------|
//! | `+`      | `addition.bf`       | `(a + b) mod 256`              |
//! | `-`      | `subtraction.bf`    | `(a - b) mod 256` (wraps)      |
//! | `*`      | `multiplication.bf` | `(a * b) mod 256`              |
//! | `/`      | `division.bf`       | `floor(a / b)`, `0` if `b = 0` |
//! | `^`      | `power.bf`          | `a ^ b mod 256`, `0 ^ 0 = 1`   |
//!
//! The programs are compiled into the crate; a [`ProgramLibrary`] can replace
//! any of them with a file from a directory.

/// Directory-backed program collection.
pub mod library;

pub use library::{ProgramLibrary, ProgramOrigin};

use crate::common::{LibraryError, Operator};
use crate::machine::Program;

/// Source of the built-in addition program.
pub const ADDITION: &str = include_str!("../../bf/addition.bf");
/// Source of the built-in subtraction program.
pub const SUBTRACTION: &str = include_str!("../../bf/subtraction.bf");
/// Source of the built-in multiplication program.
pub const MULTIPLICATION: &str = include_str!("../../bf/multiplication.bf");
/// Source of the built-in division program.
pub const DIVISION: &str = include_str!("../../bf/division.bf");
/// Source of the built-in power program.
pub const POWER: &str = include_str!("../../bf/power.bf");

/// Built-in program text for `op`.
pub const fn builtin_source(op: Operator) -> &'static str {
    match op {
        Operator::Add => ADDITION,
        Operator::Sub => SUBTRACTION,
        Operator::Mul => MULTIPLICATION,
        Operator::Div => DIVISION,
        Operator::Pow => POWER,
    }
}

/// Parses the built-in program for `op`.
///
/// # Errors
///
/// [`LibraryError::Builtin`] if the embedded text has malformed loops.
pub fn builtin_program(op: Operator) -> Result<Program, LibraryError> {
    Program::parse(builtin_source(op)).map_err(|source| LibraryError::Builtin {
        file: op.module_file(),
        source,
    })
}
