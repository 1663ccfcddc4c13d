//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! libraries and instead renders into a simple framebuffer that is flushed to
//! the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view logic pure ([`GameView`] never touches the terminal)
//! - Allow control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
