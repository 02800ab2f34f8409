//! Parsed tape programs.
//!
//! A program is the instruction sequence left after discarding every
//! non-instruction byte, plus a jump table pairing each `[` with its `]`.
//! Loop nesting is verified once here, so execution never meets an unmatched
//! bracket.

use std::fmt;

use super::instruction::Instruction;
use crate::common::ProgramError;

/// An immutable, validated instruction sequence with a precomputed jump table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Box<[Instruction]>,
    /// For a bracket at `pc`, the index of its partner; otherwise `pc` itself.
    jumps: Box<[usize]>,
}

impl Program {
    /// Parses program text. Bytes outside `><+-.,[]` are comments.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError`] when a bracket has no partner; the offset is the
    /// bracket's byte position in `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bfcalc_core::Program;
    ///
    /// let program = Program::parse("read two cells: ,>, then add: [-<+>]<.").unwrap();
    /// assert_eq!(program.to_string(), ",>,[-<+>]<.");
    /// assert!(Program::parse("[[]").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, ProgramError> {
        let mut instructions = Vec::with_capacity(source.len());
        let mut jumps = Vec::with_capacity(source.len());
        // (instruction index, source offset) of every open `[`
        let mut open: Vec<(usize, usize)> = Vec::new();

        for (offset, byte) in source.bytes().enumerate() {
            let Some(inst) = Instruction::from_symbol(byte) else {
                continue;
            };
            let pc = instructions.len();
            instructions.push(inst);
            jumps.push(pc);

            match inst {
                Instruction::LoopStart => open.push((pc, offset)),
                Instruction::LoopEnd => {
                    let Some((start, _)) = open.pop() else {
                        return Err(ProgramError::UnmatchedLoopEnd { offset });
                    };
                    jumps[start] = pc;
                    jumps[pc] = start;
                }
                _ => {}
            }
        }

        if let Some((_, offset)) = open.pop() {
            return Err(ProgramError::UnmatchedLoopStart { offset });
        }

        Ok(Self {
            instructions: instructions.into_boxed_slice(),
            jumps: jumps.into_boxed_slice(),
        })
    }

    /// Number of instructions (comments excluded).
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True when the program has no instructions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction sequence.
    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instruction at `pc`, or `None` past the end.
    #[inline]
    pub fn get(&self, pc: usize) -> Option<Instruction> {
        self.instructions.get(pc).copied()
    }

    /// Index of the bracket matching the one at `pc`.
    ///
    /// For non-bracket positions this is `pc` itself; out-of-range positions return `None`.
    #[inline]
    pub fn jump_target(&self, pc: usize) -> Option<usize> {
        self.jumps.get(pc).copied()
    }

    /// Deepest loop nesting in the program.
    pub fn max_depth(&self) -> usize {
        let mut depth = 0usize;
        let mut max = 0usize;
        for inst in self.instructions.iter() {
            match inst {
                Instruction::LoopStart => {
                    depth += 1;
                    max = max.max(depth);
                }
                Instruction::LoopEnd => depth -= 1,
                _ => {}
            }
        }
        max
    }
}

impl fmt::Display for Program {
    /// Writes the canonical program text: instructions only, no comments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in self.instructions.iter() {
            write!(f, "{inst}")?;
        }
        Ok(())
    }
}
