//! Tape machine instruction set.

use std::fmt;

/// One of the eight tape machine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Instruction {
    /// `>`: pointer += 1 (wraps at the tape end).
    MoveRight = 0,
    /// `<`: pointer -= 1 (wraps at the tape start).
    MoveLeft = 1,
    /// `+`: current cell += 1 (mod 256).
    Increment = 2,
    /// `-`: current cell -= 1 (mod 256).
    Decrement = 3,
    /// `.`: append the current cell to the output.
    Output = 4,
    /// `,`: replace the current cell with the next input byte.
    Input = 5,
    /// `[`: jump past the matching `]` when the current cell is zero.
    LoopStart = 6,
    /// `]`: jump back past the matching `[` when the current cell is non-zero.
    LoopEnd = 7,
}

impl Instruction {
    /// Number of distinct instructions.
    pub const COUNT: usize = 8;

    /// Every instruction, indexed by its discriminant.
    pub const ALL: [Self; Self::COUNT] = [
        Self::MoveRight,
        Self::MoveLeft,
        Self::Increment,
        Self::Decrement,
        Self::Output,
        Self::Input,
        Self::LoopStart,
        Self::LoopEnd,
    ];

    /// Decodes a program byte. Returns `None` for comment bytes.
    #[inline]
    pub const fn from_symbol(byte: u8) -> Option<Self> {
        match byte {
            b'>' => Some(Self::MoveRight),
            b'<' => Some(Self::MoveLeft),
            b'+' => Some(Self::Increment),
            b'-' => Some(Self::Decrement),
            b'.' => Some(Self::Output),
            b',' => Some(Self::Input),
            b'[' => Some(Self::LoopStart),
            b']' => Some(Self::LoopEnd),
            _ => None,
        }
    }

    /// The instruction's source symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::MoveRight => '>',
            Self::MoveLeft => '<',
            Self::Increment => '+',
            Self::Decrement => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::LoopStart => '[',
            Self::LoopEnd => ']',
        }
    }

    /// Dense index for per-instruction counters.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
