//! Brick arrangement generators.
//!
//! Every generator is a pure function of its parameters: it returns a fresh,
//! ordered brick list and leaves assigning it to a layout to the caller.

use crate::entities::{Brick, BrickColor, BrickType, LayoutPattern};
use crate::error::{Error, Result};

// ── Geometry ─────────────────────────────────────────────────────────────────

pub const BRICK_WIDTH: i32 = 6;
pub const BRICK_HEIGHT: i32 = 1;
pub const SPACING_X: i32 = 1;
pub const SPACING_Y: i32 = 1;

/// First brick row, just below the HUD and the top wall.
pub const START_Y: i32 = 3;

/// Row colours for the rainbow pattern, indexed by `row % 6`.
pub const RAINBOW: [BrickColor; 6] = [
    BrickColor::Red,
    BrickColor::Yellow,
    BrickColor::Green,
    BrickColor::Cyan,
    BrickColor::Blue,
    BrickColor::Magenta,
];

/// Total width of `count` bricks laid side by side.
pub fn row_width(count: i32) -> i32 {
    count * (BRICK_WIDTH + SPACING_X) - SPACING_X
}

/// Width `columns` bricks would need, computed wide enough that no count overflows.
pub fn required_width(columns: u32) -> i64 {
    i64::from(columns) * i64::from(BRICK_WIDTH + SPACING_X) - i64::from(SPACING_X)
}

/// Top edge of the last of `rows` brick rows, computed without overflow.
pub fn bottom_row_y(rows: u32) -> i64 {
    i64::from(START_Y) + i64::from(rows.saturating_sub(1)) * i64::from(BRICK_HEIGHT + SPACING_Y)
}

/// Left edge that centres `count` bricks on a board `board_width` wide.
pub fn grid_start_x(count: i32, board_width: i32) -> i32 {
    (board_width - row_width(count)) / 2
}

/// Top edge of brick row `row`.
pub fn row_y(row: i32) -> i32 {
    START_Y + row * (BRICK_HEIGHT + SPACING_Y)
}

// ── Entry point ──────────────────────────────────────────────────────────────

/// Build the bricks for `pattern`.
///
/// Rejects an empty grid or one wider than the board rather than clamping it.
/// Height is not checked here; `Config::validate` bounds `rows` against the
/// board before anything is generated.
pub fn generate(
    pattern: LayoutPattern,
    rows: u32,
    columns: u32,
    board_width: i32,
) -> Result<Vec<Brick>> {
    if rows == 0 || columns == 0 {
        return Err(Error::EmptyLayout { rows, columns });
    }
    let required = required_width(columns);
    if required > i64::from(board_width) {
        return Err(Error::LayoutTooWide {
            columns,
            required,
            available: board_width,
        });
    }

    let rows = rows as usize;
    let columns = columns as usize;
    let bricks = match pattern {
        LayoutPattern::Standard => grid(rows, columns, board_width, |_, _| true),
        LayoutPattern::Checkerboard => {
            grid(rows, columns, board_width, |row, col| (row + col) % 2 == 0)
        }
        LayoutPattern::Rainbow => {
            let mut bricks = grid(rows, columns, board_width, |_, _| true);
            for (i, brick) in bricks.iter_mut().enumerate() {
                brick.color = RAINBOW[(i / columns) % RAINBOW.len()];
            }
            bricks
        }
        LayoutPattern::Pyramid => pyramid(rows, columns, board_width),
    };
    Ok(bricks)
}

// ── Patterns ─────────────────────────────────────────────────────────────────

fn brick_at(row: usize, x: i32) -> Brick {
    Brick::new(
        x,
        row_y(row as i32),
        BRICK_WIDTH,
        BRICK_HEIGHT,
        BrickType::for_row(row),
    )
}

/// Row-major grid keeping only the cells `keep` accepts.
fn grid(
    rows: usize,
    columns: usize,
    board_width: i32,
    keep: impl Fn(usize, usize) -> bool,
) -> Vec<Brick> {
    let start_x = grid_start_x(columns as i32, board_width);
    let mut bricks = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for col in 0..columns {
            if keep(row, col) {
                bricks.push(brick_at(row, start_x + col as i32 * (BRICK_WIDTH + SPACING_X)));
            }
        }
    }
    bricks
}

/// Row `r` holds `columns - 2r` bricks; stops at the first row that would be empty.
fn pyramid(rows: usize, columns: usize, board_width: i32) -> Vec<Brick> {
    let mut bricks = Vec::new();
    for row in 0..rows {
        let count = columns as i32 - 2 * row as i32;
        if count <= 0 {
            break;
        }
        let start_x = grid_start_x(count, board_width);
        for col in 0..count {
            bricks.push(brick_at(row, start_x + col * (BRICK_WIDTH + SPACING_X)));
        }
    }
    bricks
}
