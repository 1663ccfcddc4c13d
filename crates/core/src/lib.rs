//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Compact**: The body is never stored cell by cell
//!
//! # Module Structure
//!
//! - [`bitrow`]: one grid row as a `u128` occupancy mask
//! - [`board`]: rows of bitmasks with bounds checks and uniform free-cell sampling
//! - [`motion`]: FIFO of past head directions that the tail replays
//! - [`game_state`]: head/tail/food/score and the per-tick transition
//! - [`config`]: grid size, initial length, food and scoring policy
//! - [`rng`]: seeded LCG used for food placement
//! - [`snapshot`]: allocation-free read-only copy for renderers
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its committed direction
//! - A 180° reversal request is ignored
//! - Leaving the board or entering the body ends the game; the final frame is kept
//! - Eating food grows the body by one (the tail stays put for that tick)
//! - Score counts food eaten, or ticks survived in the food-less variant
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState, Tick};
//! use tui_snake_core::types::{Direction, Position};
//!
//! let config = GameConfig::new(5, 5, 3).with_food(false);
//! let mut game = GameState::new(config, 12345).unwrap();
//!
//! assert_eq!(game.head(), Position::new(2, 2));
//! assert_eq!(game.advance(), Tick::Moved);
//! assert_eq!(game.head(), Position::new(2, 3));
//!
//! // Reversing is ignored
//! assert!(!game.set_pending_direction(Direction::Left));
//! assert!(game.set_pending_direction(Direction::Down));
//! game.advance();
//! assert_eq!(game.head(), Position::new(3, 3));
//! assert_eq!(game.body_len(), 3);
//! ```
//!
//! # Timing
//!
//! The core has no clock. The driver calls
//! [`GameState::advance`](game_state::GameState::advance) once every
//! [`TICK_MS`](types::TICK_MS) milliseconds.

pub mod bitrow;
pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod motion;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use bitrow::BitRow;
pub use board::Board;
pub use config::{GameConfig, ScoringPolicy};
pub use error::{ConfigError, CoreError};
pub use game_state::{Collision, GameState, Tick};
pub use motion::MotionQueue;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
