//! Ball motion plus wall and paddle collision response.
//!
//! Motion is grid-quantised: every frame the ball moves exactly one unit along
//! each non-zero axis of its velocity, then walls are resolved before the
//! paddle.

use log::debug;

use crate::config::Board;
use crate::entities::{Ball, Paddle, PaddleZone};

/// Offsets from the paddle centre closer than this count as a centre hit.
const CENTER_ZONE: i32 = 2;

/// Advance `ball` by one frame.
///
/// Does nothing for an inactive ball.  Returns the paddle zone struck this
/// frame, if any.
pub fn advance(ball: &mut Ball, paddle: Option<&Paddle>, board: &Board) -> Option<PaddleZone> {
    if !ball.active {
        return None;
    }

    ball.translate();
    bounce_off_walls(ball, board);

    // A lost ball is past the paddle row; walls take priority.
    if !ball.active {
        return None;
    }
    paddle.and_then(|p| bounce_off_paddle(ball, p))
}

/// Reflect off the side and top walls, or deactivate the ball on the bottom row.
pub fn bounce_off_walls(ball: &mut Ball, board: &Board) {
    if ball.x <= 0 {
        ball.dx = -ball.dx;
        ball.x = 1;
    } else if ball.x >= board.width - 1 {
        ball.dx = -ball.dx;
        ball.x = board.width - 2;
    }

    if ball.y <= 1 {
        ball.dy = -ball.dy;
        ball.y = 2;
    }

    if ball.y >= board.height - 1 {
        ball.active = false;
    }
}

/// Classify where the ball point struck `paddle`, or `None` without overlap.
pub fn classify_paddle_hit(ball: &Ball, paddle: &Paddle) -> Option<PaddleZone> {
    if !paddle.contains(ball.x, ball.y) {
        return None;
    }
    let offset = ball.x - paddle.center();
    let zone = if offset.abs() < CENTER_ZONE {
        PaddleZone::Top
    } else if offset < 0 {
        PaddleZone::Left
    } else {
        PaddleZone::Right
    };
    Some(zone)
}

/// Send the ball back up if it overlaps the paddle.
///
/// Every zone forces an upward vertical velocity; the edges also force the
/// horizontal direction so the rebound angles away from the centre.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> Option<PaddleZone> {
    let zone = classify_paddle_hit(ball, paddle)?;
    match zone {
        PaddleZone::Top => {
            ball.dy = -ball.dy.abs();
            ball.y = paddle.y() - 1;
        }
        PaddleZone::Left => {
            ball.dx = -1;
            ball.dy = -ball.dy.abs();
        }
        PaddleZone::Right => {
            ball.dx = 1;
            ball.dy = -ball.dy.abs();
        }
    }
    debug!("paddle hit {:?} at x={}", zone, ball.x);
    Some(zone)
}
