//! Error type shared by the whole crate.
//!
//! Configuration problems are rejected up front with a descriptive message;
//! terminal I/O failures from a renderer are carried through unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("board {width}x{height} is out of range (minimum {min_width}x{min_height}, maximum {max}x{max})")]
    InvalidBoard {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
        max: i32,
    },

    #[error("brick layout needs at least one row and one column (got {rows}x{columns})")]
    EmptyLayout { rows: u32, columns: u32 },

    #[error("{columns} brick columns need {required} units but the board is only {available} wide")]
    LayoutTooWide {
        columns: u32,
        required: i64,
        available: i32,
    },

    #[error("{rows} brick rows reach row {bottom}, which must stay above row {limit}")]
    LayoutTooTall { rows: u32, bottom: i64, limit: i32 },

    #[error("paddle width {width} does not fit on a board {board_width} wide")]
    InvalidPaddle { width: i32, board_width: i32 },

    #[error("paddle step {0} must not be negative")]
    InvalidPaddleStep(i32),

    #[error("unknown layout pattern `{0}` (expected standard, pyramid, checkerboard or rainbow)")]
    UnknownPattern(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
