//! Circular tape memory.
//!
//! Every cell holds a `u8` and every write wraps modulo 256. The pointer wraps
//! modulo the tape length in both directions, so no address is ever out of
//! bounds.

/// A bounded, wraparound array of 8-bit cells plus the data pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[u8]>,
    pointer: usize,
}

impl Tape {
    /// Creates a zeroed tape of `size` cells with the pointer at cell 0.
    ///
    /// A `size` of zero is raised to one; configuration validation rejects it earlier.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size.max(1)].into_boxed_slice(),
            pointer: 0,
        }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a tape has at least one cell.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Current pointer position.
    #[inline]
    pub const fn pointer(&self) -> usize {
        self.pointer
    }

    /// Value under the pointer.
    #[inline]
    pub fn read(&self) -> u8 {
        self.cells[self.pointer]
    }

    /// Overwrites the cell under the pointer.
    #[inline]
    pub fn write(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    /// Adds one to the current cell, wrapping 255 to 0.
    #[inline]
    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(1);
    }

    /// Subtracts one from the current cell, wrapping 0 to 255.
    #[inline]
    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_sub(1);
    }

    /// Moves the pointer one cell right, wrapping at the end.
    #[inline]
    pub fn move_right(&mut self) {
        self.pointer += 1;
        if self.pointer == self.cells.len() {
            self.pointer = 0;
        }
    }

    /// Moves the pointer one cell left, wrapping at the start.
    #[inline]
    pub fn move_left(&mut self) {
        self.pointer = self.pointer.checked_sub(1).unwrap_or(self.cells.len() - 1);
    }

    /// Copy of cells `start..end`, clamped to the tape. Used for debugging snapshots.
    pub fn window(&self, start: usize, end: usize) -> Vec<u8> {
        let end = end.min(self.cells.len());
        let start = start.min(end);
        self.cells[start..end].to_vec()
    }

    /// All cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
