use breakout::config::Board;
use breakout::entities::*;
use breakout::physics::*;

use proptest::prelude::*;

fn board() -> Board {
    Board::new(80, 25).unwrap()
}

fn ball(x: i32, y: i32, dx: i32, dy: i32) -> Ball {
    Ball { x, y, dx, dy, active: true }
}

/// Paddle spanning x = 36..44 on row 22, centre column 40.
fn paddle() -> Paddle {
    Paddle::new(&board(), 8, 2).unwrap()
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_ball_in_open_space() {
    let mut b = ball(40, 12, 1, -1);
    let zone = advance(&mut b, None, &board());
    assert_eq!((b.x, b.y, b.dx, b.dy), (41, 11, 1, -1));
    assert_eq!(zone, None);
}

#[test]
fn advance_ignores_inactive_ball() {
    let mut b = ball(40, 12, 1, -1);
    b.active = false;
    advance(&mut b, Some(&paddle()), &board());
    assert_eq!((b.x, b.y), (40, 12));
}

#[test]
fn left_wall_inverts_dx_and_clamps_to_one() {
    let mut b = ball(1, 10, -1, 1);
    advance(&mut b, None, &board());
    assert_eq!(b.dx, 1);
    assert_eq!(b.x, 1);
    assert_eq!(b.y, 11);
}

#[test]
fn right_wall_inverts_dx_and_clamps() {
    let mut b = ball(78, 10, 1, 1);
    advance(&mut b, None, &board());
    assert_eq!(b.dx, -1);
    assert_eq!(b.x, 78); // width - 2
}

#[test]
fn top_wall_inverts_dy_and_clamps_to_two() {
    let mut b = ball(20, 2, 1, -1);
    advance(&mut b, None, &board());
    assert_eq!(b.dy, 1);
    assert_eq!(b.y, 2);
}

#[test]
fn corner_bounces_both_axes() {
    let mut b = ball(1, 2, -1, -1);
    advance(&mut b, None, &board());
    assert_eq!((b.x, b.y, b.dx, b.dy), (1, 2, 1, 1));
}

#[test]
fn bottom_row_deactivates_without_bouncing() {
    let mut b = ball(10, 23, 1, 1);
    advance(&mut b, Some(&paddle()), &board());
    assert!(!b.active);
    assert_eq!(b.dy, 1);
    assert_eq!(b.y, 24);
}

// ── paddle ────────────────────────────────────────────────────────────────────

#[test]
fn classify_centre_hit_as_top() {
    let p = paddle();
    assert_eq!(classify_paddle_hit(&ball(40, 22, 1, 1), &p), Some(PaddleZone::Top));
    assert_eq!(classify_paddle_hit(&ball(39, 22, 1, 1), &p), Some(PaddleZone::Top));
    assert_eq!(classify_paddle_hit(&ball(41, 22, 1, 1), &p), Some(PaddleZone::Top));
}

#[test]
fn classify_edge_hits() {
    let p = paddle();
    assert_eq!(classify_paddle_hit(&ball(38, 22, 1, 1), &p), Some(PaddleZone::Left));
    assert_eq!(classify_paddle_hit(&ball(36, 22, 1, 1), &p), Some(PaddleZone::Left));
    assert_eq!(classify_paddle_hit(&ball(42, 22, 1, 1), &p), Some(PaddleZone::Right));
    assert_eq!(classify_paddle_hit(&ball(43, 22, 1, 1), &p), Some(PaddleZone::Right));
}

#[test]
fn classify_misses() {
    let p = paddle();
    assert_eq!(classify_paddle_hit(&ball(35, 22, 1, 1), &p), None);
    assert_eq!(classify_paddle_hit(&ball(44, 22, 1, 1), &p), None); // x + width excluded
    assert_eq!(classify_paddle_hit(&ball(40, 21, 1, 1), &p), None);
}

#[test]
fn top_zone_bounces_straight_up_above_paddle() {
    let p = paddle();
    let mut b = ball(39, 21, 1, 1);
    let zone = advance(&mut b, Some(&p), &board());
    assert_eq!(zone, Some(PaddleZone::Top));
    assert_eq!(b.dy, -1);
    assert_eq!(b.dx, 1);
    assert_eq!(b.y, 21);
}

#[test]
fn left_zone_sends_ball_up_and_left() {
    let p = paddle();
    let mut b = ball(35, 21, 1, 1);
    let zone = advance(&mut b, Some(&p), &board());
    assert_eq!(zone, Some(PaddleZone::Left));
    assert_eq!((b.dx, b.dy), (-1, -1));
}

#[test]
fn right_zone_sends_ball_up_and_right() {
    let p = paddle();
    let mut b = ball(44, 21, -1, 1);
    let zone = advance(&mut b, Some(&p), &board());
    assert_eq!(zone, Some(PaddleZone::Right));
    assert_eq!((b.dx, b.dy), (1, -1));
}

#[test]
fn paddle_bounce_never_turns_an_upward_ball_down() {
    let p = paddle();
    let mut b = ball(37, 22, 0, -1);
    bounce_off_paddle(&mut b, &p);
    assert_eq!(b.dy, -1);
}

// ── properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn walls_keep_ball_in_bounds(
        x in 1i32..79,
        y in 2i32..23,
        dx in prop::sample::select(vec![-1i32, 1]),
        dy in prop::sample::select(vec![-1i32, 1]),
    ) {
        let mut b = ball(x, y, dx, dy);
        advance(&mut b, None, &board());
        prop_assert!(b.x >= 1 && b.x <= 78);
        prop_assert!(b.y >= 2);
        if !b.active {
            prop_assert_eq!(b.dy, dy);
        }
    }

    #[test]
    fn every_paddle_hit_leaves_ball_moving_up(
        offset in 0i32..8,
        dx in prop::sample::select(vec![-1i32, 0, 1]),
        dy in prop::sample::select(vec![-1i32, 1]),
    ) {
        let p = paddle();
        let mut b = ball(p.x() + offset, p.y(), dx, dy);
        prop_assert!(bounce_off_paddle(&mut b, &p).is_some());
        prop_assert!(b.dy <= 0);
    }

    #[test]
    fn paddle_stays_on_board(moves in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut p = Paddle::new(&board(), 8, 3).unwrap();
        for left in moves {
            if left { p.move_left() } else { p.move_right() }
            prop_assert!(p.x() >= 0);
            prop_assert!(p.x() + p.width() <= 80);
        }
    }
}
