//! Board module - occupancy grid for the snake body
//!
//! The board is one [`BitRow`] per grid row, stored inline (no heap) so that
//! cloning it for a render snapshot is a plain copy.
//! Coordinates: (row, col) where row ranges 0..rows (top to bottom) and col
//! ranges 0..cols (left to right). Both walls are exclusive on the far side
//! and inclusive at zero.

use arrayvec::ArrayVec;

use crate::bitrow::BitRow;
use crate::error::CoreError;
use crate::rng::SimpleRng;
use crate::types::{Position, MAX_COLS, MAX_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: ArrayVec<BitRow, MAX_ROWS>,
    cols: u8,
}

impl Board {
    /// Create an empty `rows` x `cols` board
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(
            rows as usize <= MAX_ROWS && cols as usize <= MAX_COLS,
            "board {}x{} exceeds {}x{}",
            rows,
            cols,
            MAX_ROWS,
            MAX_COLS
        );
        let mut cells = ArrayVec::new();
        for _ in 0..rows {
            cells.push(BitRow::new(cols));
        }
        Self { rows: cells, cols }
    }

    pub fn rows(&self) -> u8 {
        self.rows.len() as u8
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get a copy of one row
    pub fn row(&self, row: usize) -> BitRow {
        self.rows[row]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &BitRow> {
        self.rows.iter()
    }

    /// Check if position lies on the playfield: `0 <= row < rows`, `0 <= col < cols`
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.rows.len()
            && pos.col >= 0
            && (pos.col as usize) < self.cols as usize
    }

    /// Split a position into row/col indices. Callers bounds-check first.
    #[inline(always)]
    fn index(&self, pos: Position) -> (usize, usize) {
        assert!(
            self.is_in_bounds(pos),
            "position ({}, {}) is off the {}x{} board",
            pos.row,
            pos.col,
            self.rows.len(),
            self.cols
        );
        (pos.row as usize, pos.col as usize)
    }

    /// Check if position is occupied by the body
    pub fn is_occupied(&self, pos: Position) -> bool {
        let (row, col) = self.index(pos);
        self.rows[row].test(col)
    }

    pub fn occupy(&mut self, pos: Position) {
        let (row, col) = self.index(pos);
        self.rows[row].set(col);
    }

    pub fn vacate(&mut self, pos: Position) {
        let (row, col) = self.index(pos);
        self.rows[row].clear(col);
    }

    /// Number of free cells on the whole board
    pub fn free_count(&self) -> u32 {
        self.rows.iter().map(BitRow::free_count).sum()
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(BitRow::occupied_count).sum()
    }

    /// The `n`-th free cell (0-based) in row-major order
    ///
    /// Rows are skipped whole using their free counts, so only one row is
    /// scanned column by column.
    pub fn nth_free_cell(&self, mut n: u32) -> Option<Position> {
        for (r, row) in self.rows.iter().enumerate() {
            let free = row.free_count();
            if n >= free {
                n -= free;
                continue;
            }
            return row
                .nth_free(n)
                .map(|col| Position::new(r as i16, col as i16));
        }
        None
    }

    /// Pick a free cell uniformly at random
    ///
    /// Draws `k` from `[0, free_count)` and walks free cells in row-major order
    /// to the `k`-th one, so the free-cell list is never materialised.
    pub fn random_free_cell(&self, rng: &mut SimpleRng) -> Result<Position, CoreError> {
        let free = self.free_count();
        if free == 0 {
            return Err(CoreError::NoSpaceAvailable);
        }
        let k = rng.next_range(free);
        self.nth_free_cell(k).ok_or(CoreError::NoSpaceAvailable)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            *row = BitRow::new(self.cols);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}
