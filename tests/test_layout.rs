use breakout::entities::*;
use breakout::error::Error;
use breakout::layout::*;

// ── Standard ──────────────────────────────────────────────────────────────────

#[test]
fn standard_grid_dimensions_and_order() {
    let bricks = generate(LayoutPattern::Standard, 5, 10, 80).unwrap();
    assert_eq!(bricks.len(), 50);

    // 10 bricks of 6 with 1-unit gaps = 69 wide, centred on 80 → starts at 5
    assert_eq!(bricks[0].x, 5);
    assert_eq!(bricks[0].y, 3);
    assert_eq!(bricks[1].x, 12);
    assert_eq!(bricks[9].x, 5 + 9 * 7);
    assert_eq!(bricks[10].x, 5);
    assert_eq!(bricks[10].y, 5); // rows are two units apart
    assert!(bricks.iter().all(|b| b.width == 6 && b.height == 1 && !b.destroyed));
}

#[test]
fn standard_grid_types_follow_row_policy() {
    let bricks = generate(LayoutPattern::Standard, 5, 4, 80).unwrap();
    let kinds: Vec<BrickType> = bricks.chunks(4).map(|row| row[0].kind).collect();
    assert_eq!(
        kinds,
        vec![
            BrickType::Bonus,
            BrickType::Bonus,
            BrickType::Strong,
            BrickType::Strong,
            BrickType::Standard
        ]
    );
}

#[test]
fn grid_is_horizontally_centred() {
    let bricks = generate(LayoutPattern::Standard, 1, 3, 40).unwrap();
    let left = bricks.first().unwrap().x;
    let right_edge = bricks.last().unwrap().x + 6;
    assert_eq!(left, 40 - right_edge);
}

// ── Pyramid ───────────────────────────────────────────────────────────────────

#[test]
fn pyramid_rows_shrink_by_two() {
    let bricks = generate(LayoutPattern::Pyramid, 4, 10, 80).unwrap();
    let per_row: Vec<usize> = (0..4)
        .map(|r| bricks.iter().filter(|b| b.y == row_y(r)).count())
        .collect();
    assert_eq!(per_row, vec![10, 8, 6, 4]);
}

#[test]
fn pyramid_stops_once_a_row_would_be_empty() {
    // columns = 10: row 5 would hold 10 - 10 = 0 bricks and is not emitted
    let bricks = generate(LayoutPattern::Pyramid, 8, 10, 80).unwrap();
    assert_eq!(bricks.len(), 10 + 8 + 6 + 4 + 2);
    assert!(bricks.iter().all(|b| b.y < row_y(5)));
}

#[test]
fn pyramid_rows_are_each_centred() {
    let bricks = generate(LayoutPattern::Pyramid, 2, 4, 80).unwrap();
    let second: Vec<&Brick> = bricks.iter().filter(|b| b.y == row_y(1)).collect();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].x, grid_start_x(2, 80));
    assert!(second[0].x > bricks[0].x);
}

#[test]
fn pyramid_with_odd_columns_ends_in_single_brick() {
    let bricks = generate(LayoutPattern::Pyramid, 10, 5, 80).unwrap();
    assert_eq!(bricks.len(), 5 + 3 + 1);
}

// ── Checkerboard ──────────────────────────────────────────────────────────────

#[test]
fn checkerboard_omits_odd_cells() {
    let bricks = generate(LayoutPattern::Checkerboard, 4, 6, 80).unwrap();
    assert_eq!(bricks.len(), 12);
    assert!(bricks.iter().all(|b| !b.destroyed));

    let start = grid_start_x(6, 80);
    for brick in &bricks {
        let col = (brick.x - start) / 7;
        let row = (brick.y - START_Y) / 2;
        assert_eq!((row + col) % 2, 0);
    }
}

// ── Rainbow ───────────────────────────────────────────────────────────────────

#[test]
fn rainbow_colours_rotate_every_six_rows() {
    let bricks = generate(LayoutPattern::Rainbow, 7, 2, 80).unwrap();
    let colours: Vec<BrickColor> = bricks.chunks(2).map(|row| row[0].color).collect();
    assert_eq!(
        colours,
        vec![
            BrickColor::Red,
            BrickColor::Yellow,
            BrickColor::Green,
            BrickColor::Cyan,
            BrickColor::Blue,
            BrickColor::Magenta,
            BrickColor::Red
        ]
    );
}

#[test]
fn rainbow_keeps_points_and_geometry_of_standard() {
    let rainbow = generate(LayoutPattern::Rainbow, 5, 10, 80).unwrap();
    let standard = generate(LayoutPattern::Standard, 5, 10, 80).unwrap();
    assert_eq!(rainbow.len(), standard.len());
    for (r, s) in rainbow.iter().zip(&standard) {
        assert_eq!((r.x, r.y, r.kind), (s.x, s.y, s.kind));
    }
}

// ── Rejections ────────────────────────────────────────────────────────────────

#[test]
fn zero_rows_or_columns_are_rejected() {
    assert!(matches!(
        generate(LayoutPattern::Standard, 0, 10, 80),
        Err(Error::EmptyLayout { rows: 0, columns: 10 })
    ));
    assert!(matches!(
        generate(LayoutPattern::Pyramid, 3, 0, 80),
        Err(Error::EmptyLayout { .. })
    ));
}

#[test]
fn grid_wider_than_board_is_rejected() {
    // 12 columns need 83 units
    match generate(LayoutPattern::Standard, 1, 12, 80) {
        Err(Error::LayoutTooWide { required, available, .. }) => {
            assert_eq!(required, 83);
            assert_eq!(available, 80);
        }
        other => panic!("expected LayoutTooWide, got {:?}", other),
    }
}

#[test]
fn huge_column_counts_are_rejected_before_allocating() {
    for columns in [u32::MAX, 1 << 31, 12_000] {
        for pattern in [
            LayoutPattern::Standard,
            LayoutPattern::Pyramid,
            LayoutPattern::Checkerboard,
            LayoutPattern::Rainbow,
        ] {
            match generate(pattern, 1, columns, 80) {
                Err(Error::LayoutTooWide { required, .. }) => {
                    assert_eq!(required, i64::from(columns) * 7 - 1);
                }
                other => panic!("expected LayoutTooWide for {}, got {:?}", columns, other),
            }
        }
    }
}

#[test]
fn extents_do_not_overflow() {
    assert_eq!(required_width(10), 69);
    assert_eq!(required_width(u32::MAX), 4_294_967_295 * 7 - 1);
    assert_eq!(bottom_row_y(1), 3);
    assert_eq!(bottom_row_y(5), 11);
    assert_eq!(bottom_row_y(0), 3);
    assert_eq!(bottom_row_y(0x8000_0001), 3 + 0x8000_0000_i64 * 2);
}
