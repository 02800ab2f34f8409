//! Dispatcher.
//!
//! Turns an operator and two operands into a [`Value`] using either engine:
//! 1. **8-bit mode:** Operands are truncated to one cell and fed to the operator's tape program.
//! 2. **Big-number mode:** Operands go to the [`CellAlu`] unchanged.
//!
//! Parsing of `"<a><op><b>"` text lives in [`expression`].

/// Expression parsing.
pub mod expression;

use std::path::Path;

use tracing::debug;

pub use expression::Expression;

use crate::arith::{BigNumber, CellAlu};
use crate::common::{CalcError, Operator, Value};
use crate::config::{ArithConfig, Config, Mode};
use crate::machine::{Machine, RunStats};
use crate::programs::ProgramLibrary;

/// Result of one evaluation plus, in 8-bit mode, the tape machine statistics.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The computed value.
    pub value: Value,
    /// Statistics of the tape run; `None` in big-number mode or when no program ran.
    pub stats: Option<RunStats>,
}

/// Evaluates expressions in either mode.
///
/// # Examples
///
/// ```
/// use bfcalc_core::{Calculator, Config};
///
/// let calc = Calculator::new(&Config::default()).unwrap();
/// assert_eq!(calc.calculate("1000*500").unwrap().to_string(), "500000");
/// assert_eq!(calc.calculate_8bit("255+1").unwrap().to_string(), "0");
/// assert_eq!(calc.calculate("7/0").unwrap().to_string(), "inf");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    machine: Machine,
    library: ProgramLibrary,
    arith: ArithConfig,
    mode: Mode,
}

impl Calculator {
    /// Builds a calculator from configuration.
    ///
    /// Programs come from `config.general.modules_dir` when set (missing files
    /// fall back to the built-ins), otherwise from the built-ins.
    ///
    /// # Errors
    ///
    /// [`CalcError::Config`] for an invalid configuration and
    /// [`CalcError::Library`] when a program cannot be loaded.
    pub fn new(config: &Config) -> Result<Self, CalcError> {
        config.validate()?;
        let library = match config.general.modules_dir.as_deref() {
            Some(dir) => Self::load_library(dir)?,
            None => ProgramLibrary::builtin()?,
        };
        Ok(Self::with_library(config, library))
    }

    fn load_library(dir: &Path) -> Result<ProgramLibrary, CalcError> {
        debug!(dir = %dir.display(), "loading program library");
        Ok(ProgramLibrary::from_dir(dir)?)
    }

    /// Builds a calculator around an existing program library.
    pub fn with_library(config: &Config, library: ProgramLibrary) -> Self {
        Self {
            machine: Machine::new(&config.machine),
            library,
            arith: config.arith.clone(),
            mode: config.general.mode,
        }
    }

    /// Mode used by [`Calculator::calculate`].
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The tape machine used in 8-bit mode.
    pub const fn machine(&self) -> &Machine {
        &self.machine
    }

    /// The programs used in 8-bit mode.
    pub const fn library(&self) -> &ProgramLibrary {
        &self.library
    }

    /// Applies `op` to `a` and `b` in `mode`.
    ///
    /// # Errors
    ///
    /// See [`Calculator::evaluate_detailed`].
    pub fn evaluate(
        &self,
        op: Operator,
        a: &BigNumber,
        b: &BigNumber,
        mode: Mode,
    ) -> Result<Value, CalcError> {
        Ok(self.evaluate_detailed(op, a, b, mode)?.value)
    }

    /// Applies `op` to `a` and `b` in `mode`, keeping tape statistics.
    ///
    /// In 8-bit mode each operand is reduced modulo 256 first. Division by a
    /// zero divisor yields [`Value::Infinity`] in both modes.
    ///
    /// # Errors
    ///
    /// * [`CalcError::Machine`] / [`CalcError::NoOutput`] when a tape program misbehaves.
    /// * [`CalcError::Arith`] when a big-number power exceeds the configured limits.
    pub fn evaluate_detailed(
        &self,
        op: Operator,
        a: &BigNumber,
        b: &BigNumber,
        mode: Mode,
    ) -> Result<Evaluation, CalcError> {
        match mode {
            Mode::EightBit => self.evaluate_8bit(op, a.low_cell(), b.low_cell()),
            Mode::BigNumber => Ok(Evaluation {
                value: CellAlu::execute(op, a, b, &self.arith)?,
                stats: None,
            }),
        }
    }

    fn evaluate_8bit(&self, op: Operator, a: u8, b: u8) -> Result<Evaluation, CalcError> {
        if op == Operator::Div && b == 0 {
            debug!(a, "8-bit division by zero");
            return Ok(Evaluation {
                value: Value::Infinity,
                stats: None,
            });
        }

        let report = self.machine.execute(self.library.get(op), &[a, b])?;
        let Some(&byte) = report.output.first() else {
            return Err(CalcError::NoOutput { op });
        };
        debug!(op = %op, a, b, result = byte, steps = report.stats.steps, "8-bit evaluation");

        Ok(Evaluation {
            value: Value::Finite(BigNumber::from(byte)),
            stats: Some(report.stats),
        })
    }

    /// Parses and evaluates `expression` in `mode`, keeping tape statistics.
    ///
    /// # Errors
    ///
    /// [`CalcError::Parse`] for malformed text, otherwise as [`Calculator::evaluate_detailed`].
    pub fn calculate_detailed(&self, expression: &str, mode: Mode) -> Result<Evaluation, CalcError> {
        let Expression { op, lhs, rhs } = expression.parse::<Expression>()?;
        self.evaluate_detailed(op, &lhs, &rhs, mode)
    }

    /// Parses and evaluates `expression` in the configured mode.
    ///
    /// # Errors
    ///
    /// As [`Calculator::calculate_detailed`].
    pub fn calculate(&self, expression: &str) -> Result<Value, CalcError> {
        Ok(self.calculate_detailed(expression, self.mode)?.value)
    }

    /// Parses and evaluates `expression` on the tape machine.
    ///
    /// # Errors
    ///
    /// As [`Calculator::calculate_detailed`].
    pub fn calculate_8bit(&self, expression: &str) -> Result<Value, CalcError> {
        Ok(self.calculate_detailed(expression, Mode::EightBit)?.value)
    }

    /// Parses and evaluates `expression` with the cell arithmetic engine.
    ///
    /// # Errors
    ///
    /// As [`Calculator::calculate_detailed`].
    pub fn calculate_big(&self, expression: &str) -> Result<Value, CalcError> {
        Ok(self.calculate_detailed(expression, Mode::BigNumber)?.value)
    }

    /// Evaluates every expression in the configured mode; one failure does not stop the rest.
    pub fn batch<S: AsRef<str>>(&self, expressions: &[S]) -> Vec<(String, Result<Value, CalcError>)> {
        expressions
            .iter()
            .map(|e| {
                let e = e.as_ref();
                (e.to_owned(), self.calculate(e))
            })
            .collect()
    }
}
