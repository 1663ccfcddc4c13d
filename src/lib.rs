//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, benches and
//! integration tests can use `tui_snake::{core,input,term,types}`.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
