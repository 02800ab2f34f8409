//! Tape-machine calculator library.
//!
//! This crate evaluates two-operand arithmetic (`+ - * / ^`) in two ways:
//! 1. **Machine:** An 8-instruction tape interpreter with 8-bit wrapping cells and a circular tape.
//! 2. **Programs:** Five pre-authored tape programs, one per operator, producing modulo-256 results.
//! 3. **Arith:** Arbitrary-precision arithmetic over little-endian base-256 cells with explicit carry/borrow.
//! 4. **Calc:** Expression parsing and dispatch between the 8-bit and big-number modes.
//! 5. **Config:** JSON-deserialisable settings (tape size, step ceiling, arithmetic limits).

/// Arbitrary-precision cell arithmetic (add, sub, mul, div, pow).
pub mod arith;
/// Expression parsing and the mode dispatcher.
pub mod calc;
/// Shared types: constants, errors, operators, result values.
pub mod common;
/// Calculator configuration (defaults, enums, JSON deserialisation).
pub mod config;
/// Tape machine (instructions, programs, tape, execution, statistics).
pub mod machine;
/// Built-in operator programs and the on-disk program library.
pub mod programs;

/// Arbitrary-precision number stored as base-256 cells.
pub use crate::arith::BigNumber;
/// Dispatcher; construct with `Calculator::new`.
pub use crate::calc::Calculator;
/// Operator set and result value.
pub use crate::common::{Operator, Value};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::{Config, Mode};
/// Tape interpreter entry point and parsed program type.
pub use crate::machine::{Machine, Program};
