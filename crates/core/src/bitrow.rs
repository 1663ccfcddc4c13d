//! BitRow module - occupancy bitmask for one grid row
//!
//! Column `c` maps to bit `c` of a single `u128`, so every operation is a
//! constant-time mask. Bits at or above `width` are never set.

use crate::types::MAX_COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRow {
    bits: u128,
    width: u8,
}

impl BitRow {
    /// Create an empty row `width` columns wide
    pub fn new(width: u8) -> Self {
        assert!(
            width as usize <= MAX_COLS,
            "row width {} exceeds {} columns",
            width,
            MAX_COLS
        );
        Self { bits: 0, width }
    }

    #[inline(always)]
    fn mask(&self, col: usize) -> u128 {
        assert!(
            col < self.width as usize,
            "column {} out of range for row width {}",
            col,
            self.width
        );
        1u128 << col
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether `col` is occupied
    pub fn test(&self, col: usize) -> bool {
        self.bits & self.mask(col) != 0
    }

    /// Mark `col` occupied (no-op if already set)
    pub fn set(&mut self, col: usize) {
        self.bits |= self.mask(col);
    }

    /// Mark `col` free (no-op if already clear)
    pub fn clear(&mut self, col: usize) {
        self.bits &= !self.mask(col);
    }

    /// Number of unset columns
    pub fn free_count(&self) -> u32 {
        self.width as u32 - self.occupied_count()
    }

    /// Number of set columns
    pub fn occupied_count(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Raw mask, bit `c` = column `c`
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Index of the `n`-th free column (0-based), scanning left to right
    pub fn nth_free(&self, n: u32) -> Option<usize> {
        (0..self.width as usize)
            .filter(|&col| !self.test(col))
            .nth(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_is_empty() {
        let row = BitRow::new(10);
        assert!(row.is_empty());
        assert_eq!(row.free_count(), 10);
        assert_eq!(row.occupied_count(), 0);
        assert!((0..10).all(|c| !row.test(c)));
    }

    #[test]
    fn set_and_clear_touch_one_bit() {
        let mut row = BitRow::new(8);
        row.set(3);
        assert!(row.test(3));
        assert_eq!(row.bits(), 0b1000);
        assert_eq!(row.free_count(), 7);

        row.clear(3);
        assert!(!row.test(3));
        assert!(row.is_empty());
    }

    #[test]
    fn set_and_clear_are_idempotent() {
        let mut row = BitRow::new(8);
        row.set(5);
        row.set(5);
        assert_eq!(row.occupied_count(), 1);

        row.clear(5);
        row.clear(5);
        assert_eq!(row.occupied_count(), 0);
    }

    #[test]
    fn full_width_row_uses_every_bit() {
        let mut row = BitRow::new(MAX_COLS as u8);
        row.set(0);
        row.set(MAX_COLS - 1);
        assert!(row.test(MAX_COLS - 1));
        assert_eq!(row.free_count(), MAX_COLS as u32 - 2);

        for c in 0..MAX_COLS {
            row.set(c);
        }
        assert_eq!(row.free_count(), 0);
        assert_eq!(row.bits(), u128::MAX);
    }

    #[test]
    fn nth_free_skips_occupied_columns() {
        let mut row = BitRow::new(5);
        row.set(0);
        row.set(2);
        assert_eq!(row.nth_free(0), Some(1));
        assert_eq!(row.nth_free(1), Some(3));
        assert_eq!(row.nth_free(2), Some(4));
        assert_eq!(row.nth_free(3), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_past_width_panics() {
        BitRow::new(4).test(4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_past_width_panics() {
        BitRow::new(4).set(10);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn oversized_row_panics() {
        BitRow::new(200);
    }
}
