//! The drawing contract between the simulation and whatever displays it.

use std::io;

use crate::entities::{Ball, Brick, GameState, Outcome, Paddle};
use crate::score::ScoreState;

/// A horizontal span of cells to blank before the next incremental draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl Region {
    pub fn cell(x: i32, y: i32) -> Self {
        Self { x, y, width: 1 }
    }
}

/// Receives draw commands from [`crate::game::Session::render`].
///
/// Implementations decide how things look; the session only decides what to
/// draw and when.
pub trait Renderer {
    /// Full-frame redraw for `state`: clear everything, then draw the
    /// screen furniture (walls, menu, pause or game-over text).
    fn draw_screen(
        &mut self,
        state: GameState,
        score: &ScoreState,
        outcome: Option<Outcome>,
    ) -> io::Result<()>;

    fn clear_region(&mut self, region: Region) -> io::Result<()>;

    /// Draw the bricks that are not destroyed.
    fn draw_bricks(&mut self, bricks: &[Brick]) -> io::Result<()>;

    fn draw_paddle(&mut self, paddle: &Paddle) -> io::Result<()>;

    fn draw_ball(&mut self, ball: &Ball) -> io::Result<()>;

    /// Score, high score and lives.
    fn draw_hud(&mut self, score: &ScoreState) -> io::Result<()>;

    /// Flush the frame to the display.
    fn present(&mut self) -> io::Result<()>;
}
