//! Error definitions.
//!
//! This module defines every failure the calculator can report. It provides:
//! 1. **Load-time errors:** Malformed loop nesting in a program (`ProgramError`) and program library I/O (`LibraryError`).
//! 2. **Run-time errors:** Input exhaustion and the optional step ceiling (`MachineError`).
//! 3. **Numeric errors:** Decimal parsing (`ParseNumberError`) and big-number power limits (`ArithError`).
//! 4. **Dispatch errors:** The umbrella `CalcError` the calculator hands to its caller.
//!
//! Division by zero is not an error anywhere in this module; it is the
//! [`Value::Infinity`](crate::common::Value::Infinity) result.

use std::path::PathBuf;

use thiserror::Error;

use super::operator::Operator;

/// Malformed loop nesting detected while parsing a program.
///
/// Raised before any instruction executes. Offsets are byte offsets into the
/// program text, comments included, so they point at the offending bracket in
/// the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// A `[` with no matching `]`.
    #[error("unmatched '[' at offset {offset}")]
    UnmatchedLoopStart {
        /// Byte offset of the bracket in the program text.
        offset: usize,
    },

    /// A `]` with no preceding unmatched `[`.
    #[error("unmatched ']' at offset {offset}")]
    UnmatchedLoopEnd {
        /// Byte offset of the bracket in the program text.
        offset: usize,
    },
}

/// Failure while executing a program on the tape machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A `,` executed after every input byte was consumed.
    #[error("input exhausted at instruction {position}")]
    InputExhausted {
        /// Instruction index of the read.
        position: usize,
    },

    /// The configured step ceiling was reached before the program finished.
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded {
        /// The ceiling that was hit.
        limit: u64,
    },
}

/// Failure converting decimal text into a [`BigNumber`](crate::arith::BigNumber).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// No digits were supplied.
    #[error("empty number")]
    Empty,

    /// A character outside `0-9`.
    #[error("invalid digit {digit:?} at index {index}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character index within the input.
        index: usize,
    },
}

/// Limits enforced by the big-number engine before it commits to a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Exponent above the configured ceiling (or not representable as `u64`).
    #[error("exponent is too large: {exponent} (limit {limit})")]
    ExponentTooLarge {
        /// Requested exponent, saturated at `u64::MAX`.
        exponent: u64,
        /// Configured ceiling.
        limit: u64,
    },

    /// Estimated result size above the configured ceiling.
    #[error("result would be too large: ~{estimated_bits} bits (limit {limit})")]
    ResultTooLarge {
        /// `exponent * bit_len(base)`, saturating.
        estimated_bits: u64,
        /// Configured ceiling.
        limit: u64,
    },
}

/// Failure loading operator programs from a directory.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The program file exists but could not be read.
    #[error("failed to read program '{}': {source}", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program file has malformed loop nesting.
    #[error("invalid program '{}': {source}", path.display())]
    Program {
        /// Path of the program file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: ProgramError,
    },

    /// A program compiled into the crate failed to parse.
    #[error("built-in program '{file}' is invalid: {source}")]
    Builtin {
        /// File name of the built-in program.
        file: &'static str,
        /// Parse failure.
        #[source]
        source: ProgramError,
    },
}

/// Invalid calculator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not match the configuration schema.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the calculator cannot run with.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Umbrella error returned by the [`Calculator`](crate::calc::Calculator).
#[derive(Debug, Error)]
pub enum CalcError {
    /// The symbol is not one of `+ - * / ^`.
    #[error("unsupported operation: '{0}'")]
    UnsupportedOperator(char),

    /// The expression could not be split into `<number><op><number>`.
    #[error("cannot parse expression: '{expression}'")]
    Parse {
        /// The expression with whitespace removed.
        expression: String,
    },

    /// An operand is not a non-negative decimal integer.
    #[error(transparent)]
    Number(#[from] ParseNumberError),

    /// The tape machine failed.
    #[error(transparent)]
    Machine(#[from] MachineError),

    /// The big-number engine refused the computation.
    #[error(transparent)]
    Arith(#[from] ArithError),

    /// A program could not be loaded.
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The operator's program finished without writing a byte.
    #[error("program for '{}' produced no output", op.symbol())]
    NoOutput {
        /// Operator whose program ran.
        op: Operator,
    },
}
