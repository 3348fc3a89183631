use serde_json::json;

use super::*;

#[test]
fn new_board_is_empty_with_white_active() {
    let b = Board::new();
    assert!(b.points.iter().all(|p| *p == Point::EMPTY));
    assert_eq!(b.active_player, Player::White);
    assert_eq!(b.cube, Cube::default());
    assert_eq!(b.dice, None);
    assert!(b.validate().is_ok());
}

#[test]
fn points_do_not_alias() {
    let mut b = Board::new();
    b.points[3] = Point::occupied(Player::Black, 4);
    for (i, p) in b.points.iter().enumerate() {
        if i != 3 {
            assert_eq!(*p, Point::EMPTY, "point {i} changed with point 3");
        }
    }
    let copy = b;
    b.points[3].checkers = 1;
    assert_eq!(copy.points[3].checkers, 4);
}

#[test]
fn zero_checkers_is_an_empty_point() {
    assert_eq!(Point::occupied(Player::White, 0), Point::EMPTY);
    assert!(Point::occupied(Player::White, 2).is_consistent());
}

#[test]
fn inconsistent_points_are_detected() {
    let owned_but_empty = Point {
        owner: Owner::White,
        checkers: 0,
    };
    let unowned_with_checkers = Point {
        owner: Owner::Empty,
        checkers: 2,
    };
    assert!(!owned_but_empty.is_consistent());
    assert!(!unowned_with_checkers.is_consistent());
}

#[test]
fn set_point_checks_index_and_invariant() {
    let mut b = Board::new();
    assert!(matches!(
        b.set_point(24, Point::EMPTY),
        Err(Error::PointIndex { index: 24 })
    ));
    let bad = Point {
        owner: Owner::Black,
        checkers: 0,
    };
    assert!(matches!(
        b.set_point(2, bad),
        Err(Error::InconsistentPoint { index: 2, .. })
    ));
    assert_eq!(b.point(2).unwrap(), Point::EMPTY);

    b.set_point(2, Point::occupied(Player::Black, 3)).unwrap();
    assert_eq!(b.point(2).unwrap().checkers, 3);
    assert!(matches!(b.point(30), Err(Error::PointIndex { index: 30 })));
}

#[test]
fn checker_counts_are_uncapped() {
    let mut b = Board::new();
    b.set_point(0, Point::occupied(Player::White, 40)).unwrap();
    assert!(b.validate().is_ok());
}

#[test]
fn validate_rejects_bad_cube_and_dice() {
    let mut b = Board::new();
    b.cube.value = 3;
    assert!(matches!(b.validate(), Err(Error::CubeValue(3))));
    b.cube.value = 128;
    assert!(matches!(b.validate(), Err(Error::CubeValue(128))));
    b.cube.value = 64;
    assert!(b.validate().is_ok());

    b.dice = Some(Dice {
        player: Player::Black,
        values: [6, 0],
    });
    assert!(matches!(b.validate(), Err(Error::DieValue(0))));
}

#[test]
fn starting_position_has_fifteen_a_side() {
    let b = Board::starting_position();
    assert!(b.validate().is_ok());
    assert_eq!(b.checker_total(Player::White), 15);
    assert_eq!(b.checker_total(Player::Black), 15);
    assert_eq!(b.points[0], Point::occupied(Player::White, 5));
    assert_eq!(b.points[23], Point::occupied(Player::Black, 2));
}

#[test]
fn checker_total_counts_bar_and_tray() {
    let mut b = Board::new();
    b.bar.set(Player::Black, 2);
    b.off.set(Player::Black, 3);
    b.set_point(7, Point::occupied(Player::Black, 1)).unwrap();
    assert_eq!(b.checker_total(Player::Black), 6);
    assert_eq!(b.checker_total(Player::White), 0);
}

#[test]
fn checker_total_does_not_overflow_on_huge_stacks() {
    let mut b = Board::new();
    b.set_point(0, Point::occupied(Player::White, u32::MAX)).unwrap();
    b.set_point(1, Point::occupied(Player::White, u32::MAX)).unwrap();
    b.bar.set(Player::White, 1);
    b.off.set(Player::White, u32::MAX);
    assert!(b.validate().is_ok());
    assert_eq!(b.checker_total(Player::White), 3 * u64::from(u32::MAX) + 1);
}

// --- Position JSON ---

#[test]
fn minimal_position_fills_defaults() {
    let mut points = vec![json!({}); 24];
    points[5] = json!({"owner": "black", "checkers": 2});
    let text = json!({ "points": points }).to_string();
    let b = Board::from_json(&text).unwrap();
    assert_eq!(b.active_player, Player::White);
    assert_eq!(b.points[5], Point::occupied(Player::Black, 2));
    assert_eq!(b.points[4], Point::EMPTY);
    assert_eq!(b.cube, Cube::default());
}

#[test]
fn position_with_wrong_point_count_is_rejected() {
    let text = json!({ "points": vec![json!({}); 23] }).to_string();
    match Board::from_json(&text) {
        Err(Error::Json(e)) => assert!(e.to_string().contains("expected 24 points, found 23")),
        other => panic!("expected a json error, got {other:?}"),
    }
}

#[test]
fn position_with_inconsistent_point_is_rejected() {
    let mut points = vec![json!({}); 24];
    points[0] = json!({"owner": "white", "checkers": 0});
    let text = json!({ "points": points }).to_string();
    assert!(Board::from_json(&text).is_err());
}

#[test]
fn position_survives_a_json_trip() {
    let mut b = Board::starting_position();
    b.active_player = Player::Black;
    b.cube = Cube {
        value: 4,
        owner: Some(Player::White),
    };
    b.dice = Some(Dice {
        player: Player::Black,
        values: [3, 5],
    });
    let text = b.to_json().unwrap();
    assert!(text.contains("\"active_player\": \"black\""));
    assert_eq!(Board::from_json(&text).unwrap(), b);
}

#[test]
fn partial_bar_and_tray_fill_missing_sides() {
    let text = json!({
        "points": vec![json!({}); 24],
        "bar": {"white": 2},
        "off": {"black": 4},
    })
    .to_string();
    let b = Board::from_json(&text).unwrap();
    assert_eq!(b.bar, PerPlayer { white: 2, black: 0 });
    assert_eq!(b.off, PerPlayer { white: 0, black: 4 });
}
