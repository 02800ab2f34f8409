//! Execution statistics collection and reporting.
//!
//! This module tracks what a single tape machine run did. It provides:
//! 1. **Steps:** Total executed instructions and host time (steps per second).
//! 2. **Instruction mix:** Counts per instruction kind.
//! 3. **Control flow:** Loop jumps actually taken.
//! 4. **I/O:** Input bytes consumed and output bytes produced.

use std::fmt;
use std::time::{Duration, Instant};

use super::instruction::Instruction;

/// Counters for one tape machine run.
#[derive(Clone, Debug)]
pub struct RunStats {
    start_time: Instant,
    elapsed: Option<Duration>,
    /// Executed instructions.
    pub steps: u64,
    /// Executed instructions per kind, indexed by [`Instruction::index`].
    pub per_instruction: [u64; Instruction::COUNT],
    /// `[` or `]` executions that changed the instruction pointer.
    pub jumps_taken: u64,
    /// Bytes consumed by `,`.
    pub input_consumed: u64,
    /// Bytes produced by `.`.
    pub output_produced: u64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: None,
            steps: 0,
            per_instruction: [0; Instruction::COUNT],
            jumps_taken: 0,
            input_consumed: 0,
            output_produced: 0,
        }
    }
}

impl RunStats {
    /// Records one executed instruction.
    #[inline]
    pub(crate) const fn record(&mut self, inst: Instruction) {
        self.steps += 1;
        self.per_instruction[inst.index()] += 1;
    }

    /// Freezes the host-time measurement.
    pub(crate) fn finish(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(self.start_time.elapsed());
        }
    }

    /// Host time spent in the run (still counting if the run is unfinished).
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Executions of one instruction kind.
    pub const fn count(&self, inst: Instruction) -> u64 {
        self.per_instruction[inst.index()]
    }

    /// Prints the statistics block to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.elapsed().as_secs_f64();
        let steps = self.steps.max(1);
        let rate = if seconds > 0.0 {
            self.steps as f64 / seconds / 1_000_000.0
        } else {
            0.0
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "TAPE MACHINE RUN STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.6} s")?;
        writeln!(f, "steps                    {}", self.steps)?;
        writeln!(f, "steps_per_sec            {rate:.2} M")?;
        writeln!(f, "jumps_taken              {}", self.jumps_taken)?;
        writeln!(f, "input_consumed           {}", self.input_consumed)?;
        writeln!(f, "output_produced          {}", self.output_produced)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for inst in Instruction::ALL {
            let n = self.count(inst);
            writeln!(
                f,
                "  {}                      {} ({:.2}%)",
                inst,
                n,
                n as f64 / steps as f64 * 100.0
            )?;
        }
        writeln!(f, "==========================================================")
    }
}
