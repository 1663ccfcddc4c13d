use crate::board::Board;
use crate::types::{Direction, Position};

/// Read-only view of a game handed to renderers once per tick.
///
/// The board is stored inline, so filling a snapshot never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub head: Position,
    pub tail: Position,
    pub food: Option<Position>,
    pub direction: Direction,
    pub length: u32,
    pub score: u32,
    pub ticks: u32,
    pub running: bool,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        !self.running
    }

    /// Whether a cell holds part of the body
    pub fn is_body(&self, pos: Position) -> bool {
        self.board.is_in_bounds(pos) && self.board.is_occupied(pos)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::default(),
            head: Position::default(),
            tail: Position::default(),
            food: None,
            direction: Direction::Right,
            length: 0,
            score: 0,
            ticks: 0,
            running: true,
        }
    }
}
