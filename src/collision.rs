//! Ball ↔ brick collision: detection, destruction, scoring and bounce.

use log::debug;

use crate::entities::{Ball, BounceDirection, Brick};
use crate::score::ScoreState;

/// Resolve at most one brick hit for this frame.
///
/// Live bricks are scanned in layout order and the first one containing the
/// ball point wins, even when the ball overlaps several.  The hit brick is
/// destroyed, its points are credited to `score`, and the ball bounces.
pub fn resolve<'a>(
    ball: &mut Ball,
    bricks: &'a mut [Brick],
    score: &mut ScoreState,
) -> Option<&'a Brick> {
    let index = bricks.iter().position(|b| b.contains(ball.x, ball.y))?;

    let brick = &mut bricks[index];
    brick.destroy();
    score.add_points(brick.point_value());

    let direction = bounce_direction(ball, brick);
    ball.bounce(direction);

    debug!(
        "brick {} ({:?}) destroyed at ({}, {}), bounce {:?}",
        index, brick.kind, brick.x, brick.y, direction
    );
    Some(&bricks[index])
}

/// Pick the axis to reflect on from the ball's offset to the brick centre.
///
/// A strictly larger horizontal offset means a side hit; ties go vertical.
pub fn bounce_direction(ball: &Ball, brick: &Brick) -> BounceDirection {
    let (cx, cy) = brick.center();
    if (ball.x - cx).abs() > (ball.y - cy).abs() {
        BounceDirection::Horizontal
    } else {
        BounceDirection::Vertical
    }
}
