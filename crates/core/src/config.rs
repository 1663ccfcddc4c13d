//! Game configuration, fixed for the lifetime of a [`crate::GameState`].

use crate::error::ConfigError;
use crate::types::{DEFAULT_COLS, DEFAULT_INITIAL_LENGTH, DEFAULT_ROWS, MAX_COLS, MAX_ROWS};

/// How the score grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringPolicy {
    /// +1 per food eaten
    FoodEaten,
    /// +1 per tick, counted before the collision test so the fatal tick scores too
    SurvivalTicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid height
    pub rows: u8,
    /// Grid width
    pub cols: u8,
    /// Body length at game start, head included
    pub initial_length: u8,
    /// Whether food is placed on the board
    pub food_enabled: bool,
    pub scoring: ScoringPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            initial_length: DEFAULT_INITIAL_LENGTH,
            food_enabled: true,
            scoring: ScoringPolicy::FoodEaten,
        }
    }
}

impl GameConfig {
    /// Food game on a custom grid
    pub fn new(rows: u8, cols: u8, initial_length: u8) -> Self {
        Self {
            rows,
            cols,
            initial_length,
            ..Default::default()
        }
    }

    /// Food-less variant scored by ticks survived
    pub fn survival(rows: u8, cols: u8, initial_length: u8) -> Self {
        Self {
            rows,
            cols,
            initial_length,
            food_enabled: false,
            scoring: ScoringPolicy::SurvivalTicks,
        }
    }

    pub fn with_food(mut self, enabled: bool) -> Self {
        self.food_enabled = enabled;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check dimensions and that the straight initial body fits both ways
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let length = self.initial_length as usize;

        if rows == 0 || rows > MAX_ROWS {
            return Err(ConfigError::Rows {
                got: rows,
                max: MAX_ROWS,
            });
        }
        if cols == 0 || cols > MAX_COLS {
            return Err(ConfigError::Cols {
                got: cols,
                max: MAX_COLS,
            });
        }
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if length >= cols || length >= rows {
            return Err(ConfigError::LengthTooLong { length, rows, cols });
        }
        Ok(())
    }
}
