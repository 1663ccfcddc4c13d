//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Grid positions are `(row, col)`, zero-indexed from the top-left corner:
//!
//! - **row** grows downwards, `0..rows`
//! - **col** grows to the right, `0..cols`
//!
//! Both components are signed so a step off the top or left wall is still a
//! representable [`Position`] that bounds checks can reject.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | One simulation step per 100ms |
//! | `DEFAULT_ROWS` | 20 | Default playfield height |
//! | `DEFAULT_COLS` | 40 | Default playfield width |
//! | `DEFAULT_INITIAL_LENGTH` | 5 | Body length at game start |
//! | `MAX_ROWS` | 64 | Upper bound on rows (board is stack allocated) |
//! | `MAX_COLS` | 128 | Upper bound on columns (one `u128` per row) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{apply_direction, Direction, Position};
//!
//! let head = Position::new(2, 2);
//! assert_eq!(apply_direction(head, Direction::Right), Position::new(2, 3));
//! assert_eq!(apply_direction(head, Direction::Up), Position::new(1, 2));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::from_str("down"), Some(Direction::Down));
//! assert_eq!(Direction::from_str("sideways"), None);
//! ```

/// Fixed timestep interval in milliseconds (one advance per tick)
pub const TICK_MS: u32 = 100;

/// Default number of grid rows
pub const DEFAULT_ROWS: u8 = 20;

/// Default number of grid columns
pub const DEFAULT_COLS: u8 = 40;

/// Default body length at game start
pub const DEFAULT_INITIAL_LENGTH: u8 = 5;

/// Maximum number of rows a board can hold
pub const MAX_ROWS: usize = 64;

/// Maximum number of columns a board can hold (width of one row bitmask)
pub const MAX_COLS: usize = 128;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step along `dir`
    pub fn moved(self, dir: Direction) -> Self {
        apply_direction(self, dir)
    }
}

/// The four headings the snake can travel in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180° reversal of this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row/column delta for a single step
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r". Anything else is rejected here rather than
    /// at use time.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Translate `pos` by one cell along `dir`.
///
/// Pure; the result may lie outside the board; callers check bounds.
pub fn apply_direction(pos: Position, dir: Direction) -> Position {
    let (dr, dc) = dir.delta();
    Position {
        row: pos.row + dr,
        col: pos.col + dc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn apply_direction_moves_one_cell() {
        let p = Position::new(5, 5);
        assert_eq!(apply_direction(p, Direction::Up), Position::new(4, 5));
        assert_eq!(apply_direction(p, Direction::Down), Position::new(6, 5));
        assert_eq!(apply_direction(p, Direction::Left), Position::new(5, 4));
        assert_eq!(apply_direction(p, Direction::Right), Position::new(5, 6));
    }

    #[test]
    fn apply_then_opposite_returns_to_start() {
        let p = Position::new(3, 7);
        for dir in Direction::ALL {
            assert_eq!(p.moved(dir).moved(dir.opposite()), p);
        }
    }

    #[test]
    fn stepping_off_the_top_left_stays_representable() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.moved(Direction::Up), Position::new(-1, 0));
        assert_eq!(origin.moved(Direction::Left), Position::new(0, -1));
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("r"), Some(Direction::Right));
        assert_eq!(Direction::from_str(""), None);
        assert_eq!(Direction::from_str("north"), None);
    }

    #[test]
    fn default_dimensions_fit_limits() {
        assert!((DEFAULT_ROWS as usize) <= MAX_ROWS);
        assert!((DEFAULT_COLS as usize) <= MAX_COLS);
        assert!(DEFAULT_INITIAL_LENGTH < DEFAULT_COLS);
        assert!(DEFAULT_INITIAL_LENGTH < DEFAULT_ROWS);
    }
}
