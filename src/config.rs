//! Board geometry and tunable game parameters.

use std::time::Duration;

use crate::entities::{LayoutPattern, Paddle};
use crate::error::{Error, Result};
use crate::layout;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const BOARD_WIDTH: i32 = 80;
pub const BOARD_HEIGHT: i32 = 25;

/// Smallest board the HUD, walls and a one-row layout still fit on.
pub const MIN_BOARD_WIDTH: i32 = 20;
pub const MIN_BOARD_HEIGHT: i32 = 10;

/// Largest side a terminal cursor can address.
pub const MAX_BOARD_SIZE: i32 = u16::MAX as i32;

pub const DEFAULT_ROWS: u32 = 5;
pub const DEFAULT_COLUMNS: u32 = 10;

pub const PADDLE_WIDTH: i32 = 8;
pub const PADDLE_STEP: i32 = 2;

/// Lives granted at the start of every round.
pub const INITIAL_LIVES: u32 = 3;

/// ≈60 FPS.
pub const FRAME: Duration = Duration::from_millis(16);

/// Hard ceiling on a single run so unattended sessions always terminate.
pub const MAX_RUNTIME: Duration = Duration::from_secs(5 * 60);

// ── Board ────────────────────────────────────────────────────────────────────

/// The fixed logical coordinate space every entity lives in.
///
/// Row 0 is the HUD and row 1 the top wall; the paddle sits three rows above
/// the bottom and anything reaching the last row is lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let range = |v: i32, min: i32| (min..=MAX_BOARD_SIZE).contains(&v);
        if !range(width, MIN_BOARD_WIDTH) || !range(height, MIN_BOARD_HEIGHT) {
            return Err(Error::InvalidBoard {
                width,
                height,
                min_width: MIN_BOARD_WIDTH,
                min_height: MIN_BOARD_HEIGHT,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self { width, height })
    }

    /// Row the paddle travels along.
    pub fn paddle_row(&self) -> i32 {
        self.height - 3
    }

    /// Row the ball is served from.
    pub fn serve_row(&self) -> i32 {
        self.paddle_row() - 2
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

// ── Config ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub board_width: i32,
    pub board_height: i32,
    pub rows: u32,
    pub columns: u32,
    pub pattern: LayoutPattern,
    pub paddle_width: i32,
    pub paddle_step: i32,
    /// Target duration of one frame; the loop sleeps off whatever is left.
    pub frame: Duration,
    pub max_runtime: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            pattern: LayoutPattern::Standard,
            paddle_width: PADDLE_WIDTH,
            paddle_step: PADDLE_STEP,
            frame: FRAME,
            max_runtime: MAX_RUNTIME,
        }
    }
}

impl Config {
    /// Check every geometric constraint and return the board to play on.
    pub fn validate(&self) -> Result<Board> {
        let board = Board::new(self.board_width, self.board_height)?;

        Paddle::new(&board, self.paddle_width, self.paddle_step)?;

        // Must run before generating: the generator allocates every row.
        let bottom = layout::bottom_row_y(self.rows);
        if bottom >= i64::from(board.serve_row()) {
            return Err(Error::LayoutTooTall {
                rows: self.rows,
                bottom,
                limit: board.serve_row(),
            });
        }

        // Width is checked by the generator itself.
        layout::generate(self.pattern, self.rows, self.columns, board.width)?;

        Ok(board)
    }
}
