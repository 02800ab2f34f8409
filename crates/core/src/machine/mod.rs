//! Tape machine.
//!
//! This module implements the 8-instruction tape interpreter used in 8-bit
//! mode. It is organized as:
//! - [`instruction`]: the instruction set and its symbols.
//! - [`program`]:     comment filtering, loop validation and the jump table.
//! - [`tape`]:        the circular array of wrapping 8-bit cells.
//! - [`execution`]:   per-run state and single-stepping.
//! - [`stats`]:       per-run counters.
//!
//! Execution is single-threaded and deterministic. No step bound is imposed
//! unless [`MachineConfig::step_limit`] is set.

/// Per-run interpreter state.
pub mod execution;

/// The eight instructions.
pub mod instruction;

/// Parsed, validated programs.
pub mod program;

/// Run statistics.
pub mod stats;

/// Circular cell memory.
pub mod tape;

use tracing::debug;

pub use execution::{Execution, ExecutionState, RunReport};
pub use instruction::Instruction;
pub use program::Program;
pub use stats::RunStats;
pub use tape::Tape;

use crate::common::MachineError;
use crate::config::MachineConfig;

/// Tape machine front end.
///
/// Holds only configuration; every call builds its own [`Execution`] with a
/// fresh tape, so a `Machine` can be shared freely.
#[derive(Debug, Clone)]
pub struct Machine {
    tape_size: usize,
    step_limit: Option<u64>,
    trace: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(&MachineConfig::default())
    }
}

impl Machine {
    /// Creates a machine from its configuration section.
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            tape_size: config.tape_size,
            step_limit: config.step_limit,
            trace: config.trace,
        }
    }

    /// Number of cells each run's tape gets.
    pub const fn tape_size(&self) -> usize {
        self.tape_size
    }

    /// Configured step ceiling.
    pub const fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Prepares a run without executing anything, for single-stepping.
    pub fn start<'a>(&self, program: &'a Program, input: &'a [u8]) -> Execution<'a> {
        Execution::new(program, input, self.tape_size, self.step_limit, self.trace)
    }

    /// Runs `program` to completion and returns its output.
    ///
    /// # Errors
    ///
    /// [`MachineError::InputExhausted`] if the program reads more bytes than
    /// `input` holds; [`MachineError::StepLimitExceeded`] if a ceiling is configured and reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use bfcalc_core::{Machine, Program};
    ///
    /// let add = Program::parse(",>,[-<+>]<.").unwrap();
    /// let machine = Machine::default();
    /// assert_eq!(machine.run(&add, &[255, 1]).unwrap(), vec![0]);
    /// ```
    pub fn run(&self, program: &Program, input: &[u8]) -> Result<Vec<u8>, MachineError> {
        Ok(self.execute(program, input)?.output)
    }

    /// Runs `program` to completion and returns its output together with run statistics.
    ///
    /// # Errors
    ///
    /// Same as [`Machine::run`].
    pub fn execute(&self, program: &Program, input: &[u8]) -> Result<RunReport, MachineError> {
        debug!(
            instructions = program.len(),
            input_len = input.len(),
            tape_size = self.tape_size,
            "tape machine run starting"
        );

        let mut execution = self.start(program, input);
        if let Err(e) = execution.run_to_end() {
            debug!(error = %e, steps = execution.stats().steps, "tape machine run failed");
            return Err(e);
        }
        let report = execution.finish();

        debug!(
            steps = report.stats.steps,
            output_len = report.output.len(),
            "tape machine run finished"
        );
        Ok(report)
    }
}
