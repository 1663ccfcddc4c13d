//! Motion queue - the path the tail still has to retrace
//!
//! One direction is pushed per head step and one popped per tail step, so the
//! queue always holds `body length - 1` entries and the body itself is never
//! stored. Backed by a ring buffer: both ends are O(1).

use std::collections::VecDeque;

use crate::types::Direction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionQueue {
    moves: VecDeque<Direction>,
}

impl MotionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue pre-filled with `count` copies of `dir` (a straight initial body)
    pub fn seeded(dir: Direction, count: usize) -> Self {
        let mut moves = VecDeque::with_capacity(count + 1);
        moves.extend(std::iter::repeat(dir).take(count));
        Self { moves }
    }

    /// Record a head step
    pub fn enqueue(&mut self, dir: Direction) {
        self.moves.push_back(dir);
    }

    /// Take the direction the tail moves along next
    ///
    /// Panics when empty: the queue length is tied to the body length, so an
    /// empty pop means the bookkeeping is already corrupt.
    pub fn dequeue(&mut self) -> Direction {
        match self.moves.pop_front() {
            Some(dir) => dir,
            None => panic!("motion queue underflow: tail advanced past the head"),
        }
    }

    /// Next direction for the tail
    pub fn front(&self) -> Option<Direction> {
        self.moves.front().copied()
    }

    /// Most recently recorded head step
    pub fn back(&self) -> Option<Direction> {
        self.moves.back().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Directions from tail to head
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().copied()
    }
}
