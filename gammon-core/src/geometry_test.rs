#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn px_approx_eq(a: Px, b: Px) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn scale_640() -> Scale {
    Scale::new(640.0).unwrap()
}

// --- Scale ---

#[test]
fn height_is_three_quarters_of_width() {
    for w in [1.0, 99.0, 640.0, 1023.0, 4096.5] {
        let s = Scale::new(w).unwrap();
        assert_eq!(s.height(), w * 0.75);
    }
}

#[test]
fn scale_rejects_bad_widths() {
    for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(Scale::new(w), Err(Error::InvalidWidth(_))), "width {w}");
    }
}

#[test]
fn axes_scale_independently() {
    let s = scale_640();
    assert!(approx_eq(s.x(1.0), 12.8));
    assert!(approx_eq(s.y(1.0), 9.6));
}

#[test]
fn top_left_holder_in_pixels() {
    let r = scale_640().rect(HOLDERS[0]);
    assert!(approx_eq(r.x, 12.8));
    assert!(approx_eq(r.y, 19.2));
    assert!(approx_eq(r.w, 38.4));
    assert!(approx_eq(r.h, 192.0));
}

// --- Layout table ---

#[test]
fn slot_table_corners() {
    let cases = [
        (0, Quadrant::TopLeft, 5.0, 2.0),
        (5, Quadrant::TopLeft, 20.0, 2.0),
        (6, Quadrant::BottomLeft, 5.0, 48.0),
        (12, Quadrant::TopRight, 27.0, 2.0),
        (18, Quadrant::BottomRight, 27.0, 48.0),
        (23, Quadrant::BottomRight, 42.0, 48.0),
    ];
    for (i, q, x, y) in cases {
        let s = slot(i);
        assert_eq!(s.quadrant, q, "index {i}");
        assert_eq!(s.start_x, x, "index {i}");
        assert_eq!(s.start_y, y, "index {i}");
    }
}

#[test]
fn try_slot_rejects_index_24() {
    assert!(matches!(try_slot(24), Err(Error::PointIndex { index: 24 })));
    assert!(try_slot(23).is_ok());
}

#[test]
#[should_panic]
fn slot_fails_fast_past_the_last_point() {
    slot(24);
}

#[test]
#[should_panic]
fn slot_does_not_wrap_around_the_board() {
    slot(POINT_COUNT + 6);
}

#[test]
fn first_triangle_in_pixels() {
    let s = scale_640();
    let t = triangle(s, 5.0, 2.0, 3.0, 20.0, Half::of(2.0));
    assert!(px_approx_eq(t.base_left, Px::new(64.0, 19.2)));
    assert!(px_approx_eq(t.apex, Px::new(83.2, 211.2)));
    assert!(px_approx_eq(t.base_right, Px::new(102.4, 19.2)));
}

#[test]
fn triangles_point_toward_the_middle() {
    let s = scale_640();
    for i in 0..POINT_COUNT {
        let sl = slot(i);
        let t = slot_triangle(s, &sl);
        match sl.half {
            Half::Upper => assert!(t.apex.y > t.base_left.y, "index {i}"),
            Half::Lower => assert!(t.apex.y < t.base_left.y, "index {i}"),
        }
        assert_eq!(t.base_left.y, t.base_right.y);
    }
}

#[test]
fn opposite_rows_meet_with_a_gap_for_the_bar() {
    let s = scale_640();
    let top = slot_triangle(s, &slot(0));
    let bottom = slot_triangle(s, &slot(6));
    assert!(top.apex.y < bottom.apex.y);
    assert!(approx_eq(bottom.apex.y - top.apex.y, s.y(6.0)));
}

// --- Shading ---

#[test]
fn neighbours_never_share_a_shade() {
    for q in 0..4 {
        for c in 0..5 {
            let i = q * 6 + c;
            assert_ne!(point_shade(i), point_shade(i + 1), "index {i}");
        }
    }
}

#[test]
fn facing_points_differ_in_shade() {
    for c in 0..6 {
        assert_ne!(point_shade(c), point_shade(6 + c));
        assert_ne!(point_shade(12 + c), point_shade(18 + c));
    }
}

#[test]
fn first_top_point_is_black() {
    assert_eq!(point_shade(0), Shade::Black);
    assert_eq!(point_shade(6), Shade::White);
}

// --- Orientation ---

#[test]
fn rotation_is_a_permutation_and_involution() {
    let o = Orientation::Rotated;
    let mut seen = [false; POINT_COUNT];
    for i in 0..POINT_COUNT {
        let j = o.slot_for(i);
        assert!(!seen[j]);
        seen[j] = true;
        assert_eq!(o.slot_for(j), i);
        assert_eq!(Orientation::Upright.slot_for(i), i);
    }
}

#[test]
fn rotated_slot_is_the_half_turn_of_the_original() {
    for i in 0..POINT_COUNT {
        let a = slot(i);
        let b = slot(Orientation::Rotated.slot_for(i));
        assert_eq!(b.start_x, GRID - a.start_x - POINT_WIDTH);
        assert_ne!(a.half, b.half);
    }
}

#[test]
fn shading_survives_rotation() {
    for i in 0..POINT_COUNT {
        assert_eq!(point_shade(i), point_shade(Orientation::Rotated.slot_for(i)));
    }
}

#[test]
fn holders_are_symmetric_under_rotation() {
    for h in HOLDERS {
        assert!(HOLDERS.contains(&h.rotated()));
    }
}

#[test]
fn orientation_follows_active_player() {
    assert_eq!(Orientation::for_player(Player::White), Orientation::Upright);
    assert_eq!(Orientation::for_player(Player::Black), Orientation::Rotated);
}

// --- Stacks ---

#[test]
fn empty_point_has_no_stack() {
    let st = checker_stack(scale_640(), &slot(3), 0);
    assert!(st.is_empty());
    assert_eq!(st.overflow, None);
    assert_eq!(st.innermost(), None);
}

#[test]
fn upper_stack_grows_downward_from_the_edge() {
    let s = scale_640();
    let st = checker_stack(s, &slot(0), 3);
    assert_eq!(st.centers.len(), 3);
    assert!(approx_eq(st.centers[0].x, s.x(6.5)));
    assert!(approx_eq(st.centers[0].y, s.y(4.0)));
    assert!(st.centers[1].y > st.centers[0].y);
    assert!(st.centers[2].y > st.centers[1].y);
}

#[test]
fn lower_stack_grows_upward_from_the_edge() {
    let s = scale_640();
    let st = checker_stack(s, &slot(6), 2);
    assert!(approx_eq(st.centers[0].y, s.y(46.0)));
    assert!(st.centers[1].y < st.centers[0].y);
}

#[test]
fn checkers_touch_without_overlapping() {
    let s = scale_640();
    let st = checker_stack(s, &slot(0), 2);
    let gap = st.centers[1].y - st.centers[0].y;
    assert!(approx_eq(gap, st.radius * 2.0));
}

#[test]
fn tall_stack_is_capped_with_overflow() {
    let s = scale_640();
    let st = checker_stack(s, &slot(12), 9);
    assert_eq!(st.centers.len(), MAX_STACK as usize);
    assert_eq!(st.overflow, Some(9));
    let tip = s.y(2.0 + POINT_HEIGHT);
    let last = st.innermost().unwrap();
    assert!(last.y + st.radius <= tip + EPSILON);
}

#[test]
fn exactly_max_stack_has_no_overflow() {
    let st = checker_stack(scale_640(), &slot(1), MAX_STACK);
    assert_eq!(st.centers.len(), MAX_STACK as usize);
    assert_eq!(st.overflow, None);
}

#[test]
fn bar_stacks_sit_on_the_bar_column() {
    let s = scale_640();
    let white = bar_stack(s, Orientation::Upright, Player::White, 2);
    let black = bar_stack(s, Orientation::Upright, Player::Black, 2);
    for c in white.centers.iter().chain(&black.centers) {
        assert!(approx_eq(c.x, s.x(25.0)));
    }
    assert!(white.centers[0].y > s.y(MID_LINE));
    assert!(black.centers[0].y < s.y(MID_LINE));
}

#[test]
fn rotated_bar_swaps_sides() {
    let s = scale_640();
    let white = bar_stack(s, Orientation::Rotated, Player::White, 1);
    assert!(white.centers[0].y < s.y(MID_LINE));
}

// --- Furniture ---

fn inside(inner: GridRect, outer: GridRect) -> bool {
    inner.x >= outer.x - EPSILON
        && inner.y >= outer.y - EPSILON
        && inner.x + inner.w <= outer.x + outer.w + EPSILON
        && inner.y + inner.h <= outer.y + outer.h + EPSILON
}

#[test]
fn tray_slabs_fill_the_right_holders() {
    let white = tray_slabs(Orientation::Upright, Player::White, 4);
    let black = tray_slabs(Orientation::Upright, Player::Black, 20);
    assert_eq!(white.len(), 4);
    assert_eq!(black.len(), TRAY_SLOTS as usize);
    assert!(white.iter().all(|r| inside(*r, HOLDERS[3])));
    assert!(black.iter().all(|r| inside(*r, HOLDERS[2])));
    // White's first slab sits against the bottom edge.
    assert!(white[0].y > white[1].y);
}

#[test]
fn cube_moves_with_its_owner() {
    let centred = cube_rect(Orientation::Upright, &Cube::default());
    assert!(approx_eq(centred.center().y, MID_LINE));
    let black = cube_rect(
        Orientation::Upright,
        &Cube {
            value: 2,
            owner: Some(Player::Black),
        },
    );
    assert!(inside(black, HOLDERS[0]));
    let white = cube_rect(
        Orientation::Upright,
        &Cube {
            value: 2,
            owner: Some(Player::White),
        },
    );
    assert!(inside(white, HOLDERS[1]));
}

#[test]
fn dice_land_in_the_players_half() {
    for r in dice_rects(Orientation::Upright, Player::White) {
        assert!(inside(r, BOARD_HALVES[1]));
    }
    for r in dice_rects(Orientation::Upright, Player::Black) {
        assert!(inside(r, BOARD_HALVES[0]));
    }
    for r in dice_rects(Orientation::Rotated, Player::White) {
        assert!(inside(r, BOARD_HALVES[0]));
    }
}

#[test]
fn pip_counts_match_face_values() {
    for v in 1..=6u8 {
        assert_eq!(pips(v).len(), usize::from(v));
    }
    assert!(pips(0).is_empty());
    assert!(pips(7).is_empty());
}
