//! Error types for the core.
//!
//! Only recoverable conditions live here. Contract violations (out-of-range
//! bit index, dequeue on an empty motion queue) panic instead.

use thiserror::Error;

/// Rejected [`crate::GameConfig`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rows must be in 1..={max}, got {got}")]
    Rows { got: usize, max: usize },

    #[error("cols must be in 1..={max}, got {got}")]
    Cols { got: usize, max: usize },

    #[error("initial length must be at least 1")]
    ZeroLength,

    #[error("initial length {length} does not fit a {rows}x{cols} board")]
    LengthTooLong { length: usize, rows: usize, cols: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Every cell of the board is occupied.
    #[error("no free cell left on the board")]
    NoSpaceAvailable,

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
