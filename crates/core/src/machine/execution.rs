//! Per-invocation execution state.
//!
//! An `Execution` owns a fresh tape, the instruction pointer, the input cursor
//! and the output buffer for exactly one run of one program. Nothing in it is
//! shared with other runs, so repeated or concurrent invocations cannot
//! interfere.

use tracing::trace;

use super::instruction::Instruction;
use super::program::Program;
use super::stats::RunStats;
use super::tape::Tape;
use crate::common::MachineError;

/// Output and statistics of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Bytes written by `.`, in order.
    pub output: Vec<u8>,
    /// Counters collected during the run.
    pub stats: RunStats,
}

/// Snapshot of the interpreter registers, for debugging and single-stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionState {
    /// Data pointer.
    pub pointer: usize,
    /// Value under the data pointer.
    pub current_cell: u8,
    /// Instruction pointer.
    pub pc: usize,
    /// Unread input bytes.
    pub input_remaining: usize,
    /// Bytes written so far.
    pub output_len: usize,
    /// Instructions executed so far.
    pub steps: u64,
    /// True once the instruction pointer has run past the program.
    pub finished: bool,
}

/// A single run of a program over a fresh tape.
#[derive(Debug)]
pub struct Execution<'a> {
    program: &'a Program,
    input: &'a [u8],
    input_pos: usize,
    tape: Tape,
    pc: usize,
    output: Vec<u8>,
    stats: RunStats,
    step_limit: Option<u64>,
    trace: bool,
}

impl<'a> Execution<'a> {
    /// Prepares a run: zeroed tape of `tape_size` cells, pointer and instruction pointer at 0.
    pub fn new(
        program: &'a Program,
        input: &'a [u8],
        tape_size: usize,
        step_limit: Option<u64>,
        trace: bool,
    ) -> Self {
        Self {
            program,
            input,
            input_pos: 0,
            tape: Tape::new(tape_size),
            pc: 0,
            output: Vec::new(),
            stats: RunStats::default(),
            step_limit,
            trace,
        }
    }

    /// Executes one instruction.
    ///
    /// Returns `Ok(false)` once the instruction pointer is past the end of the
    /// program; further calls keep returning `Ok(false)`.
    ///
    /// # Errors
    ///
    /// * [`MachineError::InputExhausted`] when `,` runs with no input left.
    /// * [`MachineError::StepLimitExceeded`] when the configured ceiling is reached.
    pub fn step(&mut self) -> Result<bool, MachineError> {
        let Some(inst) = self.program.get(self.pc) else {
            self.stats.finish();
            return Ok(false);
        };

        if let Some(limit) = self.step_limit {
            if self.stats.steps >= limit {
                return Err(MachineError::StepLimitExceeded { limit });
            }
        }

        if self.trace {
            trace!(
                pc = self.pc,
                pointer = self.tape.pointer(),
                cell = self.tape.read(),
                instruction = %inst,
                "step"
            );
        }
        self.stats.record(inst);

        match inst {
            Instruction::MoveRight => self.tape.move_right(),
            Instruction::MoveLeft => self.tape.move_left(),
            Instruction::Increment => self.tape.increment(),
            Instruction::Decrement => self.tape.decrement(),
            Instruction::Output => {
                self.output.push(self.tape.read());
                self.stats.output_produced += 1;
            }
            Instruction::Input => {
                let Some(&byte) = self.input.get(self.input_pos) else {
                    return Err(MachineError::InputExhausted { position: self.pc });
                };
                self.input_pos += 1;
                self.tape.write(byte);
                self.stats.input_consumed += 1;
            }
            Instruction::LoopStart => {
                if self.tape.read() == 0 {
                    self.jump();
                }
            }
            Instruction::LoopEnd => {
                if self.tape.read() != 0 {
                    self.jump();
                }
            }
        }

        self.pc += 1;
        Ok(true)
    }

    /// Moves the instruction pointer onto the partner bracket; the `pc += 1`
    /// that ends every step then lands one past it.
    #[inline]
    fn jump(&mut self) {
        self.pc = self.program.jump_target(self.pc).unwrap_or(self.pc);
        self.stats.jumps_taken += 1;
    }

    /// Runs until the program ends.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Execution::step`].
    pub fn run_to_end(&mut self) -> Result<(), MachineError> {
        while self.step()? {}
        Ok(())
    }

    /// Register snapshot.
    pub fn state(&self) -> ExecutionState {
        ExecutionState {
            pointer: self.tape.pointer(),
            current_cell: self.tape.read(),
            pc: self.pc,
            input_remaining: self.input.len() - self.input_pos,
            output_len: self.output.len(),
            steps: self.stats.steps,
            finished: self.pc >= self.program.len(),
        }
    }

    /// The tape as it stands.
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Output written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Counters collected so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Consumes the execution, returning its output and statistics.
    pub fn finish(mut self) -> RunReport {
        self.stats.finish();
        RunReport {
            output: self.output,
            stats: self.stats,
        }
    }
}
