//! All game entity types: plain data with small invariant-preserving mutators.

use std::fmt;
use std::str::FromStr;

use crate::config::Board;
use crate::error::{Error, Result};
use crate::layout;

// ── State-machine tags ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
    /// Terminal: the run loop exits at the top of the next frame.
    Exiting,
}

/// How the last round ended; only meaningful while in `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

// ── Ball ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BounceDirection {
    /// Invert the horizontal velocity.
    Horizontal,
    /// Invert the vertical velocity.
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    /// Horizontal velocity, one of -1, 0, 1.
    pub dx: i32,
    /// Vertical velocity, one of -1, 0, 1 (negative is up).
    pub dy: i32,
    pub active: bool,
}

impl Ball {
    pub const GLYPH: char = '●';

    /// Place the ball and put it back in play.
    ///
    /// A zero velocity would leave an active ball stuck forever, so a
    /// motionless request is turned into a straight upward serve.
    pub fn reset(&mut self, x: i32, y: i32, dx: i32, dy: i32) {
        let (dx, dy) = (dx.signum(), dy.signum());
        self.x = x;
        self.y = y;
        self.dx = dx;
        self.dy = if dx == 0 && dy == 0 { -1 } else { dy };
        self.active = true;
    }

    /// Move one grid unit along each axis of the current velocity.
    pub fn translate(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    pub fn bounce(&mut self, direction: BounceDirection) {
        match direction {
            BounceDirection::Horizontal => self.dx = -self.dx,
            BounceDirection::Vertical => self.dy = -self.dy,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            dx: 1,
            dy: -1,
            active: false,
        }
    }
}

// ── Paddle ───────────────────────────────────────────────────────────────────

/// Which part of the paddle the ball struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleZone {
    /// Near the centre: straight rebound.
    Top,
    /// Left of centre: rebound up and to the left.
    Left,
    /// Right of centre: rebound up and to the right.
    Right,
}

/// The player's paddle.  Its fields are read-only from outside so the
/// `0 <= x && x + width <= board_width` invariant can only be maintained here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paddle {
    x: i32,
    y: i32,
    width: i32,
    step: i32,
    board_width: i32,
}

impl Paddle {
    pub const GLYPH: char = '█';

    /// A paddle centred on the paddle row of `board`.
    ///
    /// The width must lie in `1..=board.width` and the step must not be negative.
    pub fn new(board: &Board, width: i32, step: i32) -> Result<Self> {
        if width < 1 || width > board.width {
            return Err(Error::InvalidPaddle {
                width,
                board_width: board.width,
            });
        }
        if step < 0 {
            return Err(Error::InvalidPaddleStep(step));
        }
        let mut paddle = Self {
            x: 0,
            y: board.paddle_row(),
            width,
            step,
            board_width: board.width,
        };
        paddle.reset();
        Ok(paddle)
    }

    /// Re-centre the paddle.
    pub fn reset(&mut self) {
        self.x = (self.board_width - self.width) / 2;
    }

    pub fn move_left(&mut self) {
        self.set_x(self.x - self.step);
    }

    pub fn move_right(&mut self) {
        self.set_x(self.x + self.step);
    }

    /// Place the paddle at `x`, clamped so it never leaves the board.
    pub fn set_x(&mut self, x: i32) {
        self.x = x.clamp(0, self.board_width - self.width);
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Column of the paddle's centre (rounded towards the left edge).
    pub fn center(&self) -> i32 {
        self.x + self.width / 2
    }

    /// True when the ball point lies on the paddle's single row.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y == self.y
    }
}

// ── Bricks ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrickType {
    Standard,
    Strong,
    Bonus,
}

impl BrickType {
    /// Score awarded for destroying a brick of this type.
    pub fn point_value(self) -> u32 {
        match self {
            BrickType::Standard => 10,
            BrickType::Strong => 20,
            BrickType::Bonus => 50,
        }
    }

    /// Fixed row policy: two rows of bonus bricks on top, then two strong rows.
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => BrickType::Bonus,
            2 | 3 => BrickType::Strong,
            _ => BrickType::Standard,
        }
    }

    pub fn color(self) -> BrickColor {
        match self {
            BrickType::Standard => BrickColor::Cyan,
            BrickType::Strong => BrickColor::Yellow,
            BrickType::Bonus => BrickColor::Red,
        }
    }
}

/// Cosmetic brick colour, translated to a terminal colour by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrickColor {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brick {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: BrickType,
    pub color: BrickColor,
    pub destroyed: bool,
}

impl Brick {
    pub const GLYPH: char = '█';

    pub fn new(x: i32, y: i32, width: i32, height: i32, kind: BrickType) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
            color: kind.color(),
            destroyed: false,
        }
    }

    pub fn point_value(&self) -> u32 {
        self.kind.point_value()
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Half-open rectangle test `[x, x+width) × [y, y+height)`.
    /// A destroyed brick contains nothing.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.destroyed
            && x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

// ── Layout ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPattern {
    /// Uniform rows×columns grid.
    Standard,
    /// Each row two bricks shorter than the one above, centred.
    Pyramid,
    /// Grid with every other cell left empty.
    Checkerboard,
    /// Grid coloured by a rotating six-colour palette.
    Rainbow,
}

impl fmt::Display for LayoutPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutPattern::Standard => "standard",
            LayoutPattern::Pyramid => "pyramid",
            LayoutPattern::Checkerboard => "checkerboard",
            LayoutPattern::Rainbow => "rainbow",
        };
        f.write_str(name)
    }
}

impl FromStr for LayoutPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(LayoutPattern::Standard),
            "pyramid" => Ok(LayoutPattern::Pyramid),
            "checkerboard" => Ok(LayoutPattern::Checkerboard),
            "rainbow" => Ok(LayoutPattern::Rainbow),
            _ => Err(Error::UnknownPattern(s.to_string())),
        }
    }
}

/// The bricks of one round plus the parameters they were generated from.
#[derive(Clone, Debug, PartialEq)]
pub struct BrickLayout {
    pub bricks: Vec<Brick>,
    pub pattern: LayoutPattern,
    pub rows: u32,
    pub columns: u32,
    /// Left edge of a full-width row (pyramid rows are narrower).
    pub start_x: i32,
    pub start_y: i32,
}

impl BrickLayout {
    /// An empty layout; call [`BrickLayout::regenerate`] to fill it.
    pub fn new(pattern: LayoutPattern, rows: u32, columns: u32) -> Self {
        Self {
            bricks: Vec::new(),
            pattern,
            rows,
            columns,
            start_x: 0,
            start_y: layout::START_Y,
        }
    }

    /// Replace every brick with a fresh set for `board`.
    pub fn regenerate(&mut self, board: &Board) -> Result<()> {
        self.bricks = layout::generate(self.pattern, self.rows, self.columns, board.width)?;
        self.start_x = layout::grid_start_x(self.columns as i32, board.width);
        self.start_y = layout::START_Y;
        Ok(())
    }

    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }

    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed)
    }
}
