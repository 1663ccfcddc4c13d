//! Game state module - manages the complete game state
//!
//! This module ties together the board, the motion queue, food placement and
//! scoring. The only mutation the outside world drives is [`GameState::advance`],
//! once per tick, plus [`GameState::set_pending_direction`] between ticks.
//!
//! The body is never stored as a list of cells. The board's bitmask says which
//! cells are occupied, and the motion queue says which way the tail has to go
//! next; together with the head and tail positions that is enough to move the
//! snake in O(1) per tick regardless of its length.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::{GameConfig, ScoringPolicy};
use crate::error::CoreError;
use crate::motion::MotionQueue;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{apply_direction, Direction, Position};

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The head would have left the board
    Wall,
    /// The head would have entered an occupied cell
    Body,
}

/// Result of one [`GameState::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tick {
    /// Head and tail both moved; length unchanged
    Moved,
    /// Head moved onto food; tail stayed, length grew by one
    Ate,
    /// This tick ended the game; nothing moved
    Collided(Collision),
    /// The game was already over; nothing happened
    Finished,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    motion: MotionQueue,
    head: Position,
    tail: Position,
    /// Heading applied on the last tick.
    direction: Direction,
    /// Latest accepted input; committed at the start of the next tick.
    pending_direction: Direction,
    food: Option<Position>,
    score: u32,
    /// Ticks that moved the snake (collision ticks excluded).
    ticks: u32,
    running: bool,
    seed: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The body is laid out straight on the middle row, tail in column 0,
    /// heading right.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, CoreError> {
        config.validate()?;

        let mut board = Board::new(config.rows, config.cols);
        let row = (config.rows / 2) as i16;
        let length = config.initial_length as i16;
        for col in 0..length {
            board.occupy(Position::new(row, col));
        }

        let mut state = Self {
            config,
            board,
            motion: MotionQueue::seeded(Direction::Right, config.initial_length as usize - 1),
            head: Position::new(row, length - 1),
            tail: Position::new(row, 0),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            ticks: 0,
            running: true,
            seed,
            rng: SimpleRng::new(seed),
        };

        if config.food_enabled {
            state.food = Some(state.board.random_free_cell(&mut state.rng)?);
        }

        debug!(
            rows = config.rows,
            cols = config.cols,
            length = config.initial_length,
            seed,
            "new game"
        );
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn motion(&self) -> &MotionQueue {
        &self.motion
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn tail(&self) -> Position {
        self.tail
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Seed for a follow-up game, derived from this game's RNG state
    pub fn next_seed(&self) -> u32 {
        self.rng.state()
    }

    /// Body length, head and tail included
    pub fn body_len(&self) -> usize {
        self.motion.len() + 1
    }

    /// Body cells from tail to head, replayed from the motion queue
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.tail).chain(self.motion.iter().scan(self.tail, |pos, dir| {
            *pos = apply_direction(*pos, dir);
            Some(*pos)
        }))
    }

    /// Request a new heading for the next tick
    ///
    /// Rejected (returns false, pending direction unchanged) when `dir`
    /// reverses the committed heading. Checking against the committed heading
    /// rather than the pending one means several inputs within one tick can
    /// never add up to a reversal.
    pub fn set_pending_direction(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() {
            return false;
        }
        self.pending_direction = dir;
        true
    }

    /// Advance the game by one tick
    pub fn advance(&mut self) -> Tick {
        if !self.running {
            return Tick::Finished;
        }

        self.direction = self.pending_direction;

        if self.config.scoring == ScoringPolicy::SurvivalTicks {
            self.score = self.score.saturating_add(1);
        }

        let next = apply_direction(self.head, self.direction);
        if let Some(kind) = self.collision_at(next) {
            self.running = false;
            info!(
                ?kind,
                score = self.score,
                ticks = self.ticks,
                length = self.body_len(),
                "game over"
            );
            return Tick::Collided(kind);
        }

        let ate = self.food == Some(next);

        self.head = next;
        self.board.occupy(next);
        self.motion.enqueue(self.direction);
        self.ticks = self.ticks.wrapping_add(1);

        let tick = if ate {
            if self.config.scoring == ScoringPolicy::FoodEaten {
                self.score = self.score.saturating_add(1);
            }
            debug!(row = next.row, col = next.col, score = self.score, "food eaten");
            self.food = self.place_food();
            Tick::Ate
        } else {
            let tail_dir = self.motion.dequeue();
            self.board.vacate(self.tail);
            self.tail = apply_direction(self.tail, tail_dir);
            Tick::Moved
        };

        debug_assert_eq!(self.board.occupied_count() as usize, self.body_len());
        tick
    }

    /// What `pos` would collide with, if anything
    pub fn collision_at(&self, pos: Position) -> Option<Collision> {
        if !self.board.is_in_bounds(pos) {
            Some(Collision::Wall)
        } else if self.board.is_occupied(pos) {
            Some(Collision::Body)
        } else {
            None
        }
    }

    fn place_food(&mut self) -> Option<Position> {
        match self.board.random_free_cell(&mut self.rng) {
            Ok(pos) => {
                debug!(row = pos.row, col = pos.col, "food placed");
                Some(pos)
            }
            Err(err) => {
                warn!(%err, length = self.body_len(), "board filled, no food placed");
                None
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.head = self.head;
        out.tail = self.tail;
        out.food = self.food;
        out.direction = self.direction;
        out.length = self.body_len() as u32;
        out.score = self.score;
        out.ticks = self.ticks;
        out.running = self.running;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_five() -> GameConfig {
        GameConfig::new(5, 5, 3).with_food(false)
    }

    fn assert_body_matches_board(state: &GameState) {
        let cells: Vec<_> = state.body().collect();
        assert_eq!(cells.len(), state.body_len());
        assert_eq!(cells.first(), Some(&state.tail));
        assert_eq!(cells.last(), Some(&state.head));
        assert_eq!(state.board.occupied_count() as usize, state.body_len());
        for p in &cells {
            assert!(state.board.is_occupied(*p), "body cell {:?} not set", p);
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(five_by_five(), 1).unwrap();
        assert_eq!(state.head, Position::new(2, 2));
        assert_eq!(state.tail, Position::new(2, 0));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.pending_direction, Direction::Right);
        assert_eq!(state.motion.len(), 2);
        assert_eq!(state.body_len(), 3);
        assert_eq!(state.score, 0);
        assert!(state.running);
        assert_eq!(state.food, None);
        assert_body_matches_board(&state);
    }

    #[test]
    fn test_new_game_places_food_off_body() {
        let state = GameState::new(GameConfig::new(5, 5, 3), 42).unwrap();
        let food = state.food.unwrap();
        assert!(state.board.is_in_bounds(food));
        assert!(!state.board.is_occupied(food));
    }

    #[test]
    fn test_single_cell_snake() {
        let mut state = GameState::new(GameConfig::new(4, 4, 1).with_food(false), 1).unwrap();
        assert!(state.motion.is_empty());
        assert_eq!(state.head, state.tail);

        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(state.head, Position::new(2, 1));
        assert_eq!(state.tail, Position::new(2, 1));
        assert_body_matches_board(&state);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = GameState::new(GameConfig::new(5, 3, 3), 1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_advance_moves_head_and_tail() {
        let mut state = GameState::new(five_by_five(), 1).unwrap();

        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(state.head, Position::new(2, 3));
        assert_eq!(state.tail, Position::new(2, 1));
        assert!(!state.board.is_occupied(Position::new(2, 0)));
        assert_eq!(state.body_len(), 3);
        assert_eq!(state.ticks, 1);
        assert_body_matches_board(&state);
    }

    #[test]
    fn test_wall_collision_freezes_state() {
        let mut state = GameState::new(GameConfig::new(5, 4, 3).with_food(false), 1).unwrap();

        assert_eq!(state.advance(), Tick::Moved);
        let board_before = state.board.clone();

        assert_eq!(state.advance(), Tick::Collided(Collision::Wall));
        assert!(!state.running);
        assert_eq!(state.head, Position::new(2, 3));
        assert_eq!(state.tail, Position::new(2, 1));
        assert_eq!(state.board, board_before);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_advance_after_game_over_is_noop() {
        let mut state = GameState::new(GameConfig::new(5, 4, 3).with_food(false), 1).unwrap();
        state.advance();
        state.advance();
        assert!(state.game_over());

        let head = state.head;
        assert_eq!(state.advance(), Tick::Finished);
        assert_eq!(state.advance(), Tick::Finished);
        assert_eq!(state.head, head);
        assert!(!state.running);
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut state = GameState::new(GameConfig::new(5, 5, 3), 7).unwrap();
        state.food = Some(Position::new(2, 3));

        assert_eq!(state.advance(), Tick::Ate);
        assert_eq!(state.score, 1);
        assert_eq!(state.body_len(), 4);
        assert_eq!(state.head, Position::new(2, 3));
        assert_eq!(state.tail, Position::new(2, 0));
        assert!(state.board.is_occupied(Position::new(2, 0)));
        assert_eq!(state.board.free_count(), 21);

        let food = state.food.unwrap();
        assert!(!state.board.is_occupied(food));
        assert_body_matches_board(&state);
    }

    #[test]
    fn test_growth_applies_for_one_tick_only() {
        let mut state = GameState::new(GameConfig::new(5, 5, 3), 7).unwrap();
        state.food = Some(Position::new(2, 3));
        state.advance();
        // Keep the fresh food out of the way.
        state.food = Some(Position::new(0, 0));

        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(state.body_len(), 4);
        assert_eq!(state.tail, Position::new(2, 1));
        assert!(!state.board.is_occupied(Position::new(2, 0)));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut state = GameState::new(five_by_five(), 1).unwrap();

        assert!(!state.set_pending_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Right);

        state.advance();
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.head, Position::new(2, 3));
    }

    #[test]
    fn test_rapid_inputs_cannot_reverse_within_a_tick() {
        let mut state = GameState::new(five_by_five(), 1).unwrap();

        // Up is legal, but Left is still checked against the committed Right.
        assert!(state.set_pending_direction(Direction::Up));
        assert!(!state.set_pending_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Up);

        state.advance();
        assert_eq!(state.head, Position::new(1, 2));

        // Now Left is a legal turn from Up.
        assert!(state.set_pending_direction(Direction::Left));
    }

    #[test]
    fn test_last_accepted_input_wins() {
        let mut state = GameState::new(five_by_five(), 1).unwrap();
        state.set_pending_direction(Direction::Up);
        state.set_pending_direction(Direction::Down);
        state.advance();
        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.head, Position::new(3, 2));
    }

    #[test]
    fn test_self_collision() {
        let mut state = GameState::new(GameConfig::new(7, 7, 5).with_food(false), 1).unwrap();
        // Body on row 3, cols 0..=4. Turn down, left, up: the head meets the body.
        state.set_pending_direction(Direction::Down);
        assert_eq!(state.advance(), Tick::Moved);
        state.set_pending_direction(Direction::Left);
        assert_eq!(state.advance(), Tick::Moved);
        state.set_pending_direction(Direction::Up);
        assert_eq!(state.advance(), Tick::Collided(Collision::Body));
        assert!(!state.running);
        assert_eq!(state.head, Position::new(4, 3));
    }

    #[test]
    fn test_moving_into_the_tail_cell_collides() {
        // A 2x2 loop: the tail is still occupied when the head is tested.
        let mut state = GameState::new(GameConfig::new(4, 4, 3), 1).unwrap();
        state.food = Some(Position::new(3, 2));
        state.set_pending_direction(Direction::Down);
        state.advance();
        state.food = None;
        assert_eq!(state.body_len(), 4);

        state.set_pending_direction(Direction::Left);
        assert_eq!(state.advance(), Tick::Moved);
        state.set_pending_direction(Direction::Up);
        assert_eq!(state.advance(), Tick::Collided(Collision::Body));
    }

    #[test]
    fn test_survival_scoring_counts_fatal_tick() {
        let mut state = GameState::new(GameConfig::survival(5, 4, 3), 1).unwrap();
        assert_eq!(state.food, None);

        assert_eq!(state.advance(), Tick::Moved);
        assert_eq!(state.score, 1);

        assert_eq!(state.advance(), Tick::Collided(Collision::Wall));
        assert_eq!(state.score, 2);

        assert_eq!(state.advance(), Tick::Finished);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_food_scoring_ignores_ticks() {
        let mut state = GameState::new(GameConfig::new(9, 9, 2), 5).unwrap();
        state.food = Some(Position::new(0, 0));
        state.advance();
        state.advance();
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_board_fill_clears_food() {
        let mut state = GameState::new(GameConfig::new(2, 2, 1), 1).unwrap();
        assert_eq!(state.head, Position::new(1, 0));

        state.food = Some(Position::new(1, 1));
        assert_eq!(state.advance(), Tick::Ate);

        state.food = Some(Position::new(0, 1));
        state.set_pending_direction(Direction::Up);
        assert_eq!(state.advance(), Tick::Ate);
        assert_eq!(state.food, Some(Position::new(0, 0)));

        state.set_pending_direction(Direction::Left);
        assert_eq!(state.advance(), Tick::Ate);
        assert_eq!(state.body_len(), 4);
        assert_eq!(state.board.free_count(), 0);
        assert_eq!(state.food, None);
        assert!(state.running);

        state.set_pending_direction(Direction::Down);
        assert_eq!(state.advance(), Tick::Collided(Collision::Body));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(GameConfig::default(), 2024).unwrap();
        let b = GameState::new(GameConfig::default(), 2024).unwrap();
        assert_eq!(a.food, b.food);
        assert_eq!(a.seed(), 2024);
        assert_eq!(a.next_seed(), b.next_seed());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(GameConfig::new(5, 5, 3), 9).unwrap();
        state.food = Some(Position::new(0, 0));
        state.advance();

        let snap = state.snapshot();
        assert_eq!(snap.board, state.board);
        assert_eq!(snap.head, state.head);
        assert_eq!(snap.tail, state.tail);
        assert_eq!(snap.food, state.food);
        assert_eq!(snap.length, 3);
        assert_eq!(snap.ticks, 1);
        assert!(snap.running);
        assert!(snap.is_body(state.head));
        assert!(!snap.is_body(Position::new(-1, 0)));
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut state = GameState::new(five_by_five(), 1).unwrap();
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        assert_eq!(snap.board.rows(), 5);

        state.advance();
        state.snapshot_into(&mut snap);
        assert_eq!(snap.head, Position::new(2, 3));
        assert_eq!(snap, state.snapshot());
    }
}
