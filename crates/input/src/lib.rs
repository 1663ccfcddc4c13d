//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events into [`InputCommand`]s. The core only ever sees
//! the steering part (through `GameState::set_pending_direction`); starting a
//! new game and quitting are handled by whoever owns the game state.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit, InputCommand};
